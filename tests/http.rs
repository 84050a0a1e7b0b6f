//! HTTP boundary tests — axum Router via tower::ServiceExt::oneshot.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use biblioteca_api::interface::http::router;

fn app() -> Router {
    router(Arc::new(common::seeded_service()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Root & stats
// =============================================================================

#[tokio::test]
async fn root_returns_service_metadata() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["service"], "biblioteca-api");
    assert_eq!(body["endpoints"]["stats"], "/stats");
}

#[tokio::test]
async fn stats_reflect_seed_data() {
    let response = app().oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_authors"], 5);
    assert_eq!(body["total_books"], 8);
    assert_eq!(body["books_per_author"]["1"], 2);
    assert_eq!(body["year_range"]["oldest"], 1924);
    assert_eq!(body["year_range"]["newest"], 1994);
    assert_eq!(body["nationalities"].as_array().unwrap().len(), 4);
}

// =============================================================================
// Author endpoints
// =============================================================================

#[tokio::test]
async fn list_authors_in_insertion_order() {
    let response = app().oneshot(get("/authors")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let authors = body.as_array().unwrap();
    assert_eq!(authors.len(), 5);
    assert_eq!(authors[0]["name"], "Gabriel García Márquez");
    assert_eq!(authors[4]["name"], "Pablo Neruda");
}

#[tokio::test]
async fn get_author_by_id() {
    let response = app().oneshot(get("/authors/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Isabel Allende");
    assert_eq!(body["nationality"], "Chileno");
    assert_eq!(body["birth_year"], 1942);
}

#[tokio::test]
async fn missing_author_maps_to_404() {
    let response = app().oneshot(get("/authors/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("author not found"));
}

#[tokio::test]
async fn create_author_returns_201_with_next_id() {
    let request = json_request(
        "POST",
        "/authors",
        json!({"name": "Julio Cortázar", "nationality": "Argentino", "birth_year": 1914}),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 6);
    assert_eq!(body["name"], "Julio Cortázar");
}

#[tokio::test]
async fn malformed_create_body_maps_to_422() {
    // nameが欠けている
    let request = json_request("POST", "/authors", json!({"nationality": "Chileno"}));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn update_author_is_partial() {
    let app = app();
    let request = json_request("PUT", "/authors/3", json!({"nationality": "Perú"}));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Mario Vargas Llosa");
    assert_eq!(body["nationality"], "Perú");
    assert_eq!(body["birth_year"], 1936);
}

#[tokio::test]
async fn update_missing_author_maps_to_404() {
    let request = json_request("PUT", "/authors/42", json!({"name": "Nadie"}));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_author_returns_204_and_books_remain() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/authors/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/authors/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // cascadeしない: 著者1の書籍2冊はdangling参照のまま返る
    let response = app.oneshot(get("/books/author/1")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn nationality_search_finds_chileans() {
    let response = app()
        .oneshot(get("/authors/search/nationality/Chileno"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let authors = body.as_array().unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0]["name"], "Isabel Allende");
    assert_eq!(authors[1]["name"], "Pablo Neruda");
}

// =============================================================================
// Book endpoints
// =============================================================================

#[tokio::test]
async fn list_books_seeded() {
    let response = app().oneshot(get("/books")).await.unwrap();
    let body = body_json(response).await;
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 8);
    assert_eq!(books[0]["title"], "Cien años de soledad");
    assert_eq!(books[0]["author_id"], 1);
    assert_eq!(books[0]["genre"], "Realismo mágico");
}

#[tokio::test]
async fn create_book_with_dangling_author() {
    let request = json_request(
        "POST",
        "/books",
        json!({"title": "Libro huérfano", "author_id": 999}),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 9);
    assert_eq!(body["author_id"], 999);
    assert_eq!(body["publication_year"], Value::Null);
}

#[tokio::test]
async fn delete_book_then_404() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/books/8")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/books/8")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn books_by_author_endpoint() {
    let response = app().oneshot(get("/books/author/2")).await.unwrap();
    let body = body_json(response).await;
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["title"], "La casa de los espíritus");
    assert_eq!(books[1]["title"], "Paula");
}

#[tokio::test]
async fn year_search_1967() {
    let response = app().oneshot(get("/books/search/year/1967")).await.unwrap();
    let body = body_json(response).await;
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Cien años de soledad");
}

#[tokio::test]
async fn title_search_is_case_insensitive_substring() {
    let response = app()
        .oneshot(get("/books/search/title/AMOR"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();

    // seedでは2冊が"amor"を含む
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"El amor en los tiempos del cólera"));
    assert!(titles.contains(&"Veinte poemas de amor y una canción desesperada"));
}

#[tokio::test]
async fn year_search_no_match_is_empty_not_error() {
    let response = app().oneshot(get("/books/search/year/1800")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
