use super::model::id::{AuthorId, BookId};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("author not found: {0}")]
    AuthorNotFound(AuthorId),

    #[error("book not found: {0}")]
    BookNotFound(BookId),
}
