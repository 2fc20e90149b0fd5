//! Borrow (lending event) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Borrow record from database. Borrows are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Borrow {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    /// ISO 8601, UTC
    pub borrow_date: DateTime<Utc>,
}

/// Create borrow request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBorrow {
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
}

/// A borrow seen from the borrowing user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserBorrow {
    pub id: i64,
    pub book_id: i64,
    pub borrow_date: DateTime<Utc>,
}

/// A borrow seen from the borrowed book
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookBorrow {
    pub id: i64,
    pub user_id: i64,
    pub borrow_date: DateTime<Utc>,
}

impl From<Borrow> for UserBorrow {
    fn from(borrow: Borrow) -> Self {
        Self {
            id: borrow.id,
            book_id: borrow.book_id,
            borrow_date: borrow.borrow_date,
        }
    }
}

impl From<Borrow> for BookBorrow {
    fn from(borrow: Borrow) -> Self {
        Self {
            id: borrow.id,
            user_id: borrow.user_id,
            borrow_date: borrow.borrow_date,
        }
    }
}

/// Borrow history of one user
#[derive(Debug, Serialize, ToSchema)]
pub struct UserBorrows {
    pub user_id: i64,
    pub borrows: Vec<UserBorrow>,
}

/// Borrow history of one book
#[derive(Debug, Serialize, ToSchema)]
pub struct BookBorrows {
    pub book_id: i64,
    pub borrows: Vec<BookBorrow>,
}
