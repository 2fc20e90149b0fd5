//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, borrows, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lending API",
        version = "0.1.0",
        description = "Library lending records: users, authors, books and borrows"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        // Authors
        authors::create_author,
        authors::list_authors,
        authors::list_author_books,
        // Books
        books::create_book,
        books::list_books,
        books::list_books_by_author,
        books::delete_book,
        // Borrows
        borrows::create_borrow,
        borrows::list_borrows_by_user,
        borrows::list_borrows_by_book,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::UserList,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::AuthorList,
            crate::models::author::AuthorBooks,
            // Books
            crate::models::book::Book,
            crate::models::book::BookShort,
            crate::models::book::CreateBook,
            crate::models::book::BookList,
            crate::models::book::BookShortList,
            // Borrows
            crate::models::borrow::Borrow,
            crate::models::borrow::CreateBorrow,
            crate::models::borrow::UserBorrow,
            crate::models::borrow::BookBorrow,
            crate::models::borrow::UserBorrows,
            crate::models::borrow::BookBorrows,
            // Health
            health::HealthResponse,
            // Common
            crate::models::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "Reader management"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book catalog"),
        (name = "borrows", description = "Lending ledger")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
