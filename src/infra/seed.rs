//! プロセス起動時に投入するサンプルデータ（ラテンアメリカ文学）。
//! idは採番カウンタ経由で振られるため、著者は1..=5、書籍は1..=8になる。

use crate::domain::model::author::NewAuthor;
use crate::domain::model::book::NewBook;
use crate::domain::model::id::AuthorId;
use crate::domain::store::{AuthorStore, BookStore};

pub fn sample_authors() -> AuthorStore {
    let mut store = AuthorStore::new();
    for (name, nationality, birth_year) in [
        ("Gabriel García Márquez", "Colombiano", 1927),
        ("Isabel Allende", "Chileno", 1942),
        ("Mario Vargas Llosa", "Peruano", 1936),
        ("Jorge Luis Borges", "Argentino", 1899),
        ("Pablo Neruda", "Chileno", 1904),
    ] {
        store.create(NewAuthor {
            name: name.into(),
            nationality: nationality.into(),
            birth_year: Some(birth_year),
        });
    }
    store
}

pub fn sample_books() -> BookStore {
    let mut store = BookStore::new();
    for (title, author_id, year, genre) in [
        ("Cien años de soledad", 1, 1967, "Realismo mágico"),
        ("La casa de los espíritus", 2, 1982, "Realismo mágico"),
        ("La ciudad y los perros", 3, 1963, "Novela"),
        ("Ficciones", 4, 1944, "Cuentos"),
        (
            "Veinte poemas de amor y una canción desesperada",
            5,
            1924,
            "Poesía",
        ),
        ("El amor en los tiempos del cólera", 1, 1985, "Novela"),
        ("Paula", 2, 1994, "Memorias"),
        ("Conversación en La Catedral", 3, 1969, "Novela"),
    ] {
        store.create(NewBook {
            title: title.into(),
            author_id: AuthorId::new(author_id),
            publication_year: Some(year),
            genre: Some(genre.into()),
        });
    }
    store
}
