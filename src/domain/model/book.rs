use serde::{Deserialize, Serialize};

use super::id::{AuthorId, BookId};

/// 書籍作成リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author_id: AuthorId,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
}

/// 書籍更新リクエスト（Noneのフィールドは変更しない）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author_id: Option<AuthorId>,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
}

/// 書籍レコード。author_idは著者への参照だが、FKとしては強制しない
/// （著者削除後もdangling参照のまま残る）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author_id: AuthorId,
    publication_year: Option<i32>,
    genre: Option<String>,
}

impl Book {
    pub(crate) fn new(id: BookId, req: NewBook) -> Self {
        Self {
            id,
            title: req.title,
            author_id: req.author_id,
            publication_year: req.publication_year,
            genre: req.genre,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn publication_year(&self) -> Option<i32> {
        self.publication_year
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// 指定されたフィールドのみ上書きする（Store経由でのみ呼ばれる）。
    pub(crate) fn apply(&mut self, req: BookUpdate) {
        if let Some(title) = req.title {
            self.title = title;
        }
        if let Some(author_id) = req.author_id {
            self.author_id = author_id;
        }
        if let Some(publication_year) = req.publication_year {
            self.publication_year = Some(publication_year);
        }
        if let Some(genre) = req.genre {
            self.genre = Some(genre);
        }
    }
}
