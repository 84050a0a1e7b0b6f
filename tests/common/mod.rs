//! Shared test harness for integration tests.

#![allow(dead_code)]

use biblioteca_api::application::service::LibraryService;
use biblioteca_api::infra::seed;

/// サンプルデータ入りのLibraryService（著者5、書籍8）。
pub fn seeded_service() -> LibraryService {
    LibraryService::new(seed::sample_authors(), seed::sample_books())
}

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
