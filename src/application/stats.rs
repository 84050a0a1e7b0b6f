use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::model::id::AuthorId;
use crate::domain::store::{AuthorStore, BookStore};

/// 出版年の範囲。年を持つ書籍が1冊もない場合はNone（JSONではnull）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub oldest: i32,
    pub newest: i32,
}

/// 両Storeから導出される統計。キャッシュせず毎回計算する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryStats {
    pub total_authors: usize,
    pub total_books: usize,
    /// author_id → 書籍数。dangling参照の著者も含む。
    pub books_per_author: BTreeMap<AuthorId, usize>,
    pub nationalities: BTreeSet<String>,
    pub year_range: Option<YearRange>,
}

/// 現在のStore状態から統計を計算する。読み取り専用。
pub fn compute(authors: &AuthorStore, books: &BookStore) -> LibraryStats {
    let mut books_per_author: BTreeMap<AuthorId, usize> = BTreeMap::new();
    for book in books.list_all() {
        *books_per_author.entry(book.author_id()).or_insert(0) += 1;
    }

    let nationalities: BTreeSet<String> = authors
        .list_all()
        .iter()
        .map(|a| a.nationality().to_string())
        .collect();

    let mut years = books.list_all().iter().filter_map(|b| b.publication_year());
    let year_range = years.next().map(|first| {
        years.fold(
            YearRange {
                oldest: first,
                newest: first,
            },
            |range, year| YearRange {
                oldest: range.oldest.min(year),
                newest: range.newest.max(year),
            },
        )
    });

    LibraryStats {
        total_authors: authors.len(),
        total_books: books.len(),
        books_per_author,
        nationalities,
        year_range,
    }
}
