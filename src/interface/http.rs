//! HTTP Server for biblioteca-api
//!
//! axum Router <-> application::LibraryService
//!
//! Endpoints: / (metadata), /stats, /authors CRUD + nationality search,
//! /books CRUD + author/year/title search.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::application::error::AppError;
use crate::application::service::LibraryService;
use crate::domain::model::author::{Author, AuthorUpdate, NewAuthor};
use crate::domain::model::book::{Book, BookUpdate, NewBook};
use crate::domain::model::id::{AuthorId, BookId};
use crate::infra::seed;

// =============================================================================
// Public entry point
// =============================================================================

/// HTTP Serverを起動する。Storeはサンプルデータ入りでプロセス生存中のみ保持。
pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let service = Arc::new(LibraryService::new(
        seed::sample_authors(),
        seed::sample_books(),
    ));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "biblioteca-api listening");
    axum::serve(listener, router(service)).await?;
    Ok(())
}

/// 全ルートを束ねたRouterを返す（テストからも使う）。
pub fn router(service: Arc<LibraryService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/stats", get(stats))
        .nest("/authors", author_routes())
        .nest("/books", book_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

fn author_routes() -> Router<Arc<LibraryService>> {
    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
        .route("/search/nationality/:value", get(authors_by_nationality))
}

fn book_routes() -> Router<Arc<LibraryService>> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
        .route("/author/:author_id", get(books_by_author))
        .route("/search/year/:year", get(books_by_year))
        .route("/search/title/:term", get(books_by_title))
}

// =============================================================================
// Error mapping
// =============================================================================

/// Boundaryレベルのエラー。NotFound→404、壊れた入力→422、それ以外→500。
#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Unprocessable(String),
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Domain(domain) => ApiError::NotFound(domain.to_string()),
            AppError::LockPoisoned => {
                tracing::error!("store lock poisoned");
                ApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Root & stats handlers
// =============================================================================

async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "biblioteca-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "authors": "/authors",
            "books": "/books",
            "stats": "/stats",
        },
    }))
}

async fn stats(State(service): State<Arc<LibraryService>>) -> ApiResult<Response> {
    let stats = service.stats()?;
    Ok(Json(stats).into_response())
}

// =============================================================================
// Author handlers
// =============================================================================

async fn list_authors(State(service): State<Arc<LibraryService>>) -> ApiResult<Json<Vec<Author>>> {
    Ok(Json(service.list_authors()?))
}

async fn get_author(
    State(service): State<Arc<LibraryService>>,
    Path(id): Path<AuthorId>,
) -> ApiResult<Json<Author>> {
    Ok(Json(service.get_author(id)?))
}

async fn create_author(
    State(service): State<Arc<LibraryService>>,
    payload: Result<Json<NewAuthor>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload?;
    let author = service.create_author(req)?;
    Ok((StatusCode::CREATED, Json(author)).into_response())
}

async fn update_author(
    State(service): State<Arc<LibraryService>>,
    Path(id): Path<AuthorId>,
    payload: Result<Json<AuthorUpdate>, JsonRejection>,
) -> ApiResult<Json<Author>> {
    let Json(req) = payload?;
    Ok(Json(service.update_author(id, req)?))
}

async fn delete_author(
    State(service): State<Arc<LibraryService>>,
    Path(id): Path<AuthorId>,
) -> ApiResult<StatusCode> {
    service.delete_author(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn authors_by_nationality(
    State(service): State<Arc<LibraryService>>,
    Path(value): Path<String>,
) -> ApiResult<Json<Vec<Author>>> {
    Ok(Json(service.find_authors_by_nationality(&value)?))
}

// =============================================================================
// Book handlers
// =============================================================================

async fn list_books(State(service): State<Arc<LibraryService>>) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(service.list_books()?))
}

async fn get_book(
    State(service): State<Arc<LibraryService>>,
    Path(id): Path<BookId>,
) -> ApiResult<Json<Book>> {
    Ok(Json(service.get_book(id)?))
}

async fn create_book(
    State(service): State<Arc<LibraryService>>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload?;
    let book = service.create_book(req)?;
    Ok((StatusCode::CREATED, Json(book)).into_response())
}

async fn update_book(
    State(service): State<Arc<LibraryService>>,
    Path(id): Path<BookId>,
    payload: Result<Json<BookUpdate>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let Json(req) = payload?;
    Ok(Json(service.update_book(id, req)?))
}

async fn delete_book(
    State(service): State<Arc<LibraryService>>,
    Path(id): Path<BookId>,
) -> ApiResult<StatusCode> {
    service.delete_book(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn books_by_author(
    State(service): State<Arc<LibraryService>>,
    Path(author_id): Path<AuthorId>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(service.find_books_by_author(author_id)?))
}

async fn books_by_year(
    State(service): State<Arc<LibraryService>>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(service.find_books_by_year(year)?))
}

async fn books_by_title(
    State(service): State<Arc<LibraryService>>,
    Path(term): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(service.find_books_by_title(&term)?))
}
