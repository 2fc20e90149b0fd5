//! Shared preconditions consulted by services before any mutation
//!
//! Services apply them in a fixed order: required fields, then field limits,
//! then uniqueness and reference checks. A request missing a field therefore
//! always reports `MissingField`, even when its references are also invalid.

use sqlx::SqliteConnection;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::EntityKind,
    repository::Repository,
};

pub const EMAIL_EXISTS: &str = "User with this email already exists";
pub const EMAIL_IN_USE: &str = "Email already in use";

/// A request field that may be absent or empty
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for Option<String> {
    fn is_present(&self) -> bool {
        self.as_deref().is_some_and(|s| !s.is_empty())
    }
}

// Ids start at 1, so zero counts as empty
impl Presence for Option<i64> {
    fn is_present(&self) -> bool {
        self.is_some_and(|id| id != 0)
    }
}

/// Fail with `MissingField` unless every named field is present
pub fn required_fields(fields: &[(&str, &dyn Presence)]) -> AppResult<()> {
    if fields.iter().all(|(_, value)| value.is_present()) {
        return Ok(());
    }

    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    let message = match names.as_slice() {
        [single] => format!("{} is required", single),
        [init @ .., last] => format!("{} and {} are required", init.join(", "), last),
        [] => unreachable!("all() holds for an empty field list"),
    };
    Err(AppError::MissingField(message))
}

/// Run the request's declarative field limits
pub fn field_limits(request: &impl Validate) -> AppResult<()> {
    request.validate()?;
    Ok(())
}

/// Fail with `DuplicateEmail` if a user other than `excluding` holds `email`
pub async fn unique_email(
    repository: &Repository,
    conn: &mut SqliteConnection,
    email: &str,
    excluding: Option<i64>,
    message: &str,
) -> AppResult<()> {
    match repository.users_get_by_email(conn, email).await? {
        Some(existing) if Some(existing.id) != excluding => {
            Err(AppError::DuplicateEmail(message.to_string()))
        }
        _ => Ok(()),
    }
}

/// Fail with `NotFound(kind)` if no entity of that kind has this id
pub async fn reference_exists(
    repository: &Repository,
    conn: &mut SqliteConnection,
    kind: EntityKind,
    id: i64,
) -> AppResult<()> {
    let exists = match kind {
        EntityKind::User => repository.users_get_by_id(conn, id).await?.is_some(),
        EntityKind::Author => repository.authors_get_by_id(conn, id).await?.is_some(),
        EntityKind::Book => repository.books_get_by_id(conn, id).await?.is_some(),
    };

    if exists {
        Ok(())
    } else {
        Err(AppError::NotFound(kind))
    }
}

/// Translate a store-level unique violation on `users.email` into `DuplicateEmail`
pub fn email_conflict(err: sqlx::Error, message: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::DuplicateEmail(message.to_string())
        }
        other => AppError::Database(other),
    }
}
