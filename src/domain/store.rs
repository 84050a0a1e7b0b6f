use super::error::DomainError;
use super::model::author::{Author, AuthorUpdate, NewAuthor};
use super::model::book::{Book, BookUpdate, NewBook};
use super::model::id::{AuthorId, BookId};

/// 著者Store — 挿入順を保持するインメモリ列。
/// idは単調増加カウンタで採番し、削除後も再利用しない。
#[derive(Debug)]
pub struct AuthorStore {
    rows: Vec<Author>,
    next_id: u64,
}

impl Default for AuthorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// 全著者を挿入順で返す。
    pub fn list_all(&self) -> &[Author] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: AuthorId) -> Result<&Author, DomainError> {
        self.rows
            .iter()
            .find(|a| a.id() == id)
            .ok_or(DomainError::AuthorNotFound(id))
    }

    /// 著者追加。次の未使用idを採番して末尾に追加する。
    pub fn create(&mut self, req: NewAuthor) -> Author {
        let id = AuthorId::new(self.next_id);
        self.next_id += 1;
        let author = Author::new(id, req);
        self.rows.push(author.clone());
        author
    }

    /// 著者更新。指定フィールドのみ上書きする。
    pub fn update(&mut self, id: AuthorId, req: AuthorUpdate) -> Result<Author, DomainError> {
        let row = self
            .rows
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(DomainError::AuthorNotFound(id))?;
        row.apply(req);
        Ok(row.clone())
    }

    /// 著者削除。参照している書籍には触れない（cascadeしない）。
    pub fn delete(&mut self, id: AuthorId) -> Result<(), DomainError> {
        let idx = self
            .rows
            .iter()
            .position(|a| a.id() == id)
            .ok_or(DomainError::AuthorNotFound(id))?;
        self.rows.remove(idx);
        Ok(())
    }

    /// 国籍の部分一致検索（case-insensitive）。該当なしは空列。
    pub fn find_by_nationality(&self, term: &str) -> Vec<Author> {
        let query = term.to_lowercase();
        self.rows
            .iter()
            .filter(|a| a.nationality().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

/// 書籍Store — AuthorStoreと同じCRUD形に検索3種を加えたもの。
#[derive(Debug)]
pub struct BookStore {
    rows: Vec<Book>,
    next_id: u64,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list_all(&self) -> &[Book] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: BookId) -> Result<&Book, DomainError> {
        self.rows
            .iter()
            .find(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))
    }

    /// 書籍追加。author_idの存在は検証しない。
    pub fn create(&mut self, req: NewBook) -> Book {
        let id = BookId::new(self.next_id);
        self.next_id += 1;
        let book = Book::new(id, req);
        self.rows.push(book.clone());
        book
    }

    pub fn update(&mut self, id: BookId, req: BookUpdate) -> Result<Book, DomainError> {
        let row = self
            .rows
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))?;
        row.apply(req);
        Ok(row.clone())
    }

    pub fn delete(&mut self, id: BookId) -> Result<(), DomainError> {
        let idx = self
            .rows
            .iter()
            .position(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))?;
        self.rows.remove(idx);
        Ok(())
    }

    /// 指定著者の書籍を挿入順で返す。著者が存在しなくてもエラーにしない。
    pub fn find_by_author(&self, author_id: AuthorId) -> Vec<Book> {
        self.rows
            .iter()
            .filter(|b| b.author_id() == author_id)
            .cloned()
            .collect()
    }

    /// 出版年の完全一致検索。
    pub fn find_by_year(&self, year: i32) -> Vec<Book> {
        self.rows
            .iter()
            .filter(|b| b.publication_year() == Some(year))
            .cloned()
            .collect()
    }

    /// タイトルの部分一致検索（case-insensitive）。
    pub fn find_by_title(&self, term: &str) -> Vec<Book> {
        let query = term.to_lowercase();
        self.rows
            .iter()
            .filter(|b| b.title().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}
