//! Author endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::AppResult,
    models::author::{Author, AuthorBooks, AuthorList, CreateAuthor},
    AppState,
};

use super::{IdPath, JsonBody};

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Name missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    WithRejection(Json(request), _): JsonBody<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let created = state.services.catalog.create_author(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "All authors", body = AuthorList)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<AuthorList>> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(Json(AuthorList { authors }))
}

/// An author's name and books
#[utoipa::path(
    get,
    path = "/authors/{id}/books",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author and books, possibly none", body = AuthorBooks),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_author_books(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<AuthorBooks>> {
    let listing = state.services.catalog.author_books(id).await?;
    Ok(Json(listing))
}
