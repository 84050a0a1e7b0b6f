use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::model::author::{Author, AuthorUpdate, NewAuthor};
use crate::domain::model::book::{Book, BookUpdate, NewBook};
use crate::domain::model::id::{AuthorId, BookId};
use crate::domain::store::{AuthorStore, BookStore};

use super::error::AppError;
use super::stats::{self, LibraryStats};

/// 図書館ユースケース。両Storeを所有し、Store単位のRwLockで
/// 書き込みを直列化する（読み取り同士は並行可）。
pub struct LibraryService {
    authors: RwLock<AuthorStore>,
    books: RwLock<BookStore>,
}

impl LibraryService {
    pub fn new(authors: AuthorStore, books: BookStore) -> Self {
        Self {
            authors: RwLock::new(authors),
            books: RwLock::new(books),
        }
    }

    // --- Authors ---

    pub fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        Ok(self.authors_read()?.list_all().to_vec())
    }

    pub fn get_author(&self, id: AuthorId) -> Result<Author, AppError> {
        Ok(self.authors_read()?.get(id)?.clone())
    }

    pub fn create_author(&self, req: NewAuthor) -> Result<Author, AppError> {
        Ok(self.authors_write()?.create(req))
    }

    pub fn update_author(&self, id: AuthorId, req: AuthorUpdate) -> Result<Author, AppError> {
        Ok(self.authors_write()?.update(id, req)?)
    }

    /// 著者削除。参照している書籍はcascadeせずそのまま残す。
    pub fn delete_author(&self, id: AuthorId) -> Result<(), AppError> {
        Ok(self.authors_write()?.delete(id)?)
    }

    pub fn find_authors_by_nationality(&self, term: &str) -> Result<Vec<Author>, AppError> {
        Ok(self.authors_read()?.find_by_nationality(term))
    }

    // --- Books ---

    pub fn list_books(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books_read()?.list_all().to_vec())
    }

    pub fn get_book(&self, id: BookId) -> Result<Book, AppError> {
        Ok(self.books_read()?.get(id)?.clone())
    }

    pub fn create_book(&self, req: NewBook) -> Result<Book, AppError> {
        Ok(self.books_write()?.create(req))
    }

    pub fn update_book(&self, id: BookId, req: BookUpdate) -> Result<Book, AppError> {
        Ok(self.books_write()?.update(id, req)?)
    }

    pub fn delete_book(&self, id: BookId) -> Result<(), AppError> {
        Ok(self.books_write()?.delete(id)?)
    }

    pub fn find_books_by_author(&self, author_id: AuthorId) -> Result<Vec<Book>, AppError> {
        Ok(self.books_read()?.find_by_author(author_id))
    }

    pub fn find_books_by_year(&self, year: i32) -> Result<Vec<Book>, AppError> {
        Ok(self.books_read()?.find_by_year(year))
    }

    pub fn find_books_by_title(&self, term: &str) -> Result<Vec<Book>, AppError> {
        Ok(self.books_read()?.find_by_title(term))
    }

    // --- Stats ---

    /// 両Storeの現在状態から統計を導出する。
    pub fn stats(&self) -> Result<LibraryStats, AppError> {
        let authors = self.authors_read()?;
        let books = self.books_read()?;
        Ok(stats::compute(&authors, &books))
    }

    // --- private ---

    fn authors_read(&self) -> Result<RwLockReadGuard<'_, AuthorStore>, AppError> {
        self.authors.read().map_err(|_| AppError::LockPoisoned)
    }

    fn authors_write(&self) -> Result<RwLockWriteGuard<'_, AuthorStore>, AppError> {
        self.authors.write().map_err(|_| AppError::LockPoisoned)
    }

    fn books_read(&self) -> Result<RwLockReadGuard<'_, BookStore>, AppError> {
        self.books.read().map_err(|_| AppError::LockPoisoned)
    }

    fn books_write(&self) -> Result<RwLockWriteGuard<'_, BookStore>, AppError> {
        self.books.write().map_err(|_| AppError::LockPoisoned)
    }
}
