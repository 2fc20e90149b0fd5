//! API integration tests, driving the router against an in-memory store

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use lending_server::{
    api,
    config::DatabaseConfig,
    repository::{self, Repository},
    services::Services,
    AppState,
};

/// Fresh application over an empty database
async fn app() -> Router {
    let pool = repository::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open database");
    let repository = Repository::new(pool);
    repository.migrate().await.expect("Failed to run migrations");
    api::create_router(AppState::new(Services::new(repository)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_create_user_and_duplicate_email() {
    let app = app().await;

    let (status, body) = post(&app, "/users", json!({"name": "Ann", "email": "a@x.com"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "Ann", "email": "a@x.com"}));

    let (status, body) = post(&app, "/users", json!({"name": "Ann", "email": "a@x.com"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "DuplicateEmail");
    assert_eq!(body["message"], "User with this email already exists");

    let (_, body) = get(&app, "/users").await;
    assert_eq!(body["users"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_create_user_missing_fields() {
    let app = app().await;

    let (status, body) = post(&app, "/users", json!({"name": "Ann"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MissingField");
    assert_eq!(body["message"], "name and email are required");

    let (status, _) = post(&app, "/users", json!({"name": "", "email": "a@x.com"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_field_length_limit() {
    let app = app().await;

    let (status, body) = post(&app, "/books", json!({"title": "x".repeat(201), "author_id": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidField");
}

#[tokio::test]
async fn test_malformed_body() {
    let app = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/authors")
        .body(Body::from(r#"{"name": "Orwell"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_update_delete_user() {
    let app = app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com"})).await;
    post(&app, "/users", json!({"name": "Bob", "email": "b@x.com"})).await;

    let (status, body) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@x.com");

    let (status, body) = send(&app, Method::PUT, "/users/1", Some(json!({"name": "Anne"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Anne", "email": "a@x.com"}));

    let (status, body) =
        send(&app, Method::PUT, "/users/1", Some(json!({"email": "b@x.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already in use");

    let (status, body) = send(&app, Method::PUT, "/users/9", Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, body) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    let (status, _) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_authors_and_books() {
    let app = app().await;

    let (status, body) = post(&app, "/authors", json!({"name": "Orwell"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "Orwell"}));

    let (status, body) = post(&app, "/books", json!({"title": "1984", "author_id": 1})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "title": "1984", "author_id": 1}));

    let (status, body) = post(&app, "/books", json!({"title": "X", "author_id": 99})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Author not found");

    let (status, body) = get(&app, "/authors/1/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"author": "Orwell", "books": [{"id": 1, "title": "1984"}]}));

    let (status, body) = get(&app, "/books/author/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"books": [{"id": 1, "title": "1984"}]}));

    let (_, first) = get(&app, "/books").await;
    let (_, second) = get(&app, "/books").await;
    assert_eq!(first, second);
    assert_eq!(first, json!({"books": [{"id": 1, "title": "1984", "author_id": 1}]}));

    let (status, body) = send(&app, Method::DELETE, "/books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book deleted");
}

#[tokio::test]
async fn test_not_found_and_empty_result_differ_by_message() {
    let app = app().await;
    post(&app, "/authors", json!({"name": "Orwell"})).await;

    let (status, missing) = get(&app, "/authors/99/books").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, empty) = get(&app, "/books/author/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(empty["message"], "No books found for this author");
    assert_ne!(missing["message"], empty["message"]);

    // The author_id is not checked on this route
    let (status, body) = get(&app, "/books/author/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No books found for this author");
}

#[tokio::test]
async fn test_borrow_flow() {
    let app = app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com"})).await;
    post(&app, "/authors", json!({"name": "Orwell"})).await;
    post(&app, "/books", json!({"title": "1984", "author_id": 1})).await;

    let (status, body) = post(&app, "/borrow", json!({"user_id": 1, "book_id": 1})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["book_id"], 1);
    let borrow_date = body["borrow_date"].as_str().expect("borrow_date is a string");
    let parsed = chrono::DateTime::parse_from_rfc3339(borrow_date).expect("ISO 8601 timestamp");
    assert_eq!(parsed.offset().local_minus_utc(), 0);

    let (status, body) = get(&app, "/borrow/user/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["borrows"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["borrows"][0]["book_id"], 1);

    let (status, body) = get(&app, "/borrow/book/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["borrows"][0]["user_id"], 1);

    let (status, body) = get(&app, "/borrow/user/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No borrow records found for this user");

    let (status, body) = get(&app, "/borrow/book/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No borrow records found for this book");
}

#[tokio::test]
async fn test_rejected_borrows_record_nothing() {
    let app = app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com"})).await;

    let (status, body) = post(&app, "/borrow", json!({"user_id": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MissingField");

    let (status, body) = post(&app, "/borrow", json!({"user_id": 1, "book_id": 5})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book not found");

    let (status, body) = post(&app, "/borrow", json!({"user_id": 3, "book_id": 5})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, _) = get(&app, "/borrow/user/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_ids_are_unknown_routes() {
    let app = app().await;

    for uri in ["/users/abc", "/borrow/user/abc", "/books/author/1.5"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "NotFound", "{uri}");
        assert!(body["message"].is_string(), "{uri}");
    }

    let (status, body) = send(&app, Method::DELETE, "/books/x", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_update_unknown_user_reported_before_bad_body() {
    let app = app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com"})).await;

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/users/99")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/users/1")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
