//! Author domain methods on Repository

use sqlx::SqliteConnection;

use super::Repository;
use crate::{error::AppResult, models::author::Author};

impl Repository {
    /// List all authors in id order
    pub async fn authors_list(&self, conn: &mut SqliteConnection) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(authors)
    }

    /// Get author by ID
    pub async fn authors_get_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(author)
    }

    /// Insert an author
    pub async fn authors_create(&self, conn: &mut SqliteConnection, name: &str) -> AppResult<Author> {
        let author = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;
        Ok(author)
    }
}
