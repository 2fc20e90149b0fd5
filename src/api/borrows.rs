//! Borrow endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::AppResult,
    models::borrow::{BookBorrows, Borrow, CreateBorrow, UserBorrows},
    AppState,
};

use super::{IdPath, JsonBody};

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "borrows",
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Book borrowed", body = Borrow),
        (status = 400, description = "user_id or book_id missing", body = crate::error::ErrorResponse),
        (status = 404, description = "User or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrow(
    State(state): State<AppState>,
    WithRejection(Json(request), _): JsonBody<CreateBorrow>,
) -> AppResult<(StatusCode, Json<Borrow>)> {
    let borrow = state.services.borrows.create_borrow(request).await?;
    Ok((StatusCode::CREATED, Json(borrow)))
}

/// Borrow history of a user
#[utoipa::path(
    get,
    path = "/borrow/user/{id}",
    tag = "borrows",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Borrows of the user", body = UserBorrows),
        (status = 404, description = "No borrow records found for this user", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_borrows_by_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): IdPath,
) -> AppResult<Json<UserBorrows>> {
    let borrows = state.services.borrows.borrows_by_user(user_id).await?;
    Ok(Json(UserBorrows { user_id, borrows }))
}

/// Borrow history of a book
#[utoipa::path(
    get,
    path = "/borrow/book/{id}",
    tag = "borrows",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Borrows of the book", body = BookBorrows),
        (status = 404, description = "No borrow records found for this book", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_borrows_by_book(
    State(state): State<AppState>,
    WithRejection(Path(book_id), _): IdPath,
) -> AppResult<Json<BookBorrows>> {
    let borrows = state.services.borrows.borrows_by_book(book_id).await?;
    Ok(Json(BookBorrows { book_id, borrows }))
}
