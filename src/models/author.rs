//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::BookShort;

/// Author model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// Create author request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,
}

/// All authors
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorList {
    pub authors: Vec<Author>,
}

/// An author's name together with the books written by them
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorBooks {
    pub author: String,
    pub books: Vec<BookShort>,
}
