use serde::{Deserialize, Serialize};

use super::id::AuthorId;

/// 著者作成リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub nationality: String,
    pub birth_year: Option<i32>,
}

/// 著者更新リクエスト（Noneのフィールドは変更しない）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorUpdate {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub birth_year: Option<i32>,
}

/// 著者レコード。Storeが所有し、Storeを通じて操作する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    nationality: String,
    birth_year: Option<i32>,
}

impl Author {
    pub(crate) fn new(id: AuthorId, req: NewAuthor) -> Self {
        Self {
            id,
            name: req.name,
            nationality: req.nationality,
            birth_year: req.birth_year,
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    /// 指定されたフィールドのみ上書きする（Store経由でのみ呼ばれる）。
    pub(crate) fn apply(&mut self, req: AuthorUpdate) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(nationality) = req.nationality {
            self.nationality = nationality;
        }
        if let Some(birth_year) = req.birth_year {
            self.birth_year = Some(birth_year);
        }
    }
}
