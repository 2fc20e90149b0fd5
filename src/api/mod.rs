//! API handlers for the lending REST endpoints

pub mod authors;
pub mod books;
pub mod borrows;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    extract::Path,
    routing::{delete, get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body whose parse failures are reported in the service's error shape
pub type JsonBody<T> = WithRejection<Json<T>, AppError>;

/// Numeric id path segment; anything else is an unknown route
pub type IdPath = WithRejection<Path<i64>, AppError>;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Users
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Authors
        .route("/authors", post(authors::create_author).get(authors::list_authors))
        .route("/authors/:id/books", get(authors::list_author_books))
        // Books
        .route("/books", post(books::create_book).get(books::list_books))
        .route("/books/author/:id", get(books::list_books_by_author))
        .route("/books/:id", delete(books::delete_book))
        // Borrows
        .route("/borrow", post(borrows::create_borrow))
        .route("/borrow/user/:id", get(borrows::list_borrows_by_user))
        .route("/borrow/book/:id", get(borrows::list_borrows_by_book))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
