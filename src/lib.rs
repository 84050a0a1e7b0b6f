//! biblioteca-api — in-memory library REST API (authors & books).
//!
//! Layered: domain (stores & models) / application (use cases, stats) /
//! infra (seed data) / interface (HTTP boundary).

pub mod application;
pub mod domain;
pub mod infra;
pub mod interface;
