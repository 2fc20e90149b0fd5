//! Borrow ledger methods on Repository

use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use super::Repository;
use crate::{error::AppResult, models::borrow::Borrow};

impl Repository {
    /// Append a borrow record
    pub async fn borrows_create(
        &self,
        conn: &mut SqliteConnection,
        user_id: i64,
        book_id: i64,
        borrow_date: DateTime<Utc>,
    ) -> AppResult<Borrow> {
        let borrow = sqlx::query_as::<_, Borrow>(
            r#"
            INSERT INTO borrows (user_id, book_id, borrow_date)
            VALUES (?, ?, ?)
            RETURNING id, user_id, book_id, borrow_date
            "#,
        )
        .bind(user_id)
        .bind(book_id)
        .bind(borrow_date)
        .fetch_one(&mut *conn)
        .await?;
        Ok(borrow)
    }

    /// Borrows made by a user, oldest first
    pub async fn borrows_by_user(
        &self,
        conn: &mut SqliteConnection,
        user_id: i64,
    ) -> AppResult<Vec<Borrow>> {
        let borrows = sqlx::query_as::<_, Borrow>(
            "SELECT id, user_id, book_id, borrow_date FROM borrows WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(borrows)
    }

    /// Borrows of a book, oldest first
    pub async fn borrows_by_book(
        &self,
        conn: &mut SqliteConnection,
        book_id: i64,
    ) -> AppResult<Vec<Borrow>> {
        let borrows = sqlx::query_as::<_, Borrow>(
            "SELECT id, user_id, book_id, borrow_date FROM borrows WHERE book_id = ? ORDER BY id",
        )
        .bind(book_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(borrows)
    }

    /// Total number of borrow records
    #[cfg(test)]
    pub(crate) async fn borrows_count(&self, conn: &mut SqliteConnection) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrows")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }
}
