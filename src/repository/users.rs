//! User domain methods on Repository

use sqlx::SqliteConnection;

use super::Repository;
use crate::{error::AppResult, models::user::User};

impl Repository {
    /// List all users in id order
    pub async fn users_list(&self, conn: &mut SqliteConnection) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(users)
    }

    /// Get user by ID
    pub async fn users_get_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    /// Get user by exact email
    pub async fn users_get_by_email(
        &self,
        conn: &mut SqliteConnection,
        email: &str,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    /// Insert a user. Unique violations on email surface as `sqlx::Error`.
    pub async fn users_create(
        &self,
        conn: &mut SqliteConnection,
        name: &str,
        email: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES (?, ?)
            RETURNING id, name, email
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&mut *conn)
        .await
    }

    /// Update the provided fields, leave `None` fields untouched
    pub async fn users_update(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE(?, name),
                email = COALESCE(?, email)
            WHERE id = ?
            RETURNING id, name, email
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Delete a user, returns whether a row was removed
    pub async fn users_delete(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
