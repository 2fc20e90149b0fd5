//! Book domain methods on Repository

use sqlx::SqliteConnection;

use super::Repository;
use crate::{error::AppResult, models::book::Book};

impl Repository {
    /// List all books in id order
    pub async fn books_list(&self, conn: &mut SqliteConnection) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT id, title, author_id FROM books ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn books_get_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT id, title, author_id FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(book)
    }

    /// All books whose author_id matches, whether or not that author exists
    pub async fn books_by_author(
        &self,
        conn: &mut SqliteConnection,
        author_id: i64,
    ) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author_id FROM books WHERE author_id = ? ORDER BY id",
        )
        .bind(author_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(books)
    }

    /// Insert a book
    pub async fn books_create(
        &self,
        conn: &mut SqliteConnection,
        title: &str,
        author_id: i64,
    ) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id)
            VALUES (?, ?)
            RETURNING id, title, author_id
            "#,
        )
        .bind(title)
        .bind(author_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(book)
    }

    /// Delete a book, returns whether a row was removed
    pub async fn books_delete(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
