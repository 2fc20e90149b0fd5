//! User management service

use crate::{
    error::{AppError, AppResult},
    models::{
        user::{CreateUser, UpdateUser, User},
        EntityKind,
    },
    repository::Repository,
    validation::{self, EMAIL_EXISTS, EMAIL_IN_USE},
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a user with a unique email
    pub async fn create_user(&self, request: CreateUser) -> AppResult<User> {
        validation::required_fields(&[("name", &request.name), ("email", &request.email)])?;
        validation::field_limits(&request)?;

        let name = request.name.unwrap_or_default();
        let email = request.email.unwrap_or_default();

        let mut tx = self.repository.begin_write().await?;
        validation::unique_email(&self.repository, &mut tx, &email, None, EMAIL_EXISTS).await?;

        let user = self
            .repository
            .users_create(&mut tx, &name, &email)
            .await
            .map_err(|e| validation::email_conflict(e, EMAIL_EXISTS))?;
        tx.commit().await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// List all users
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let mut conn = self.repository.acquire().await?;
        self.repository.users_list(&mut conn).await
    }

    /// Get user by ID
    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        let mut conn = self.repository.acquire().await?;
        self.repository
            .users_get_by_id(&mut conn, id)
            .await?
            .ok_or(AppError::NotFound(EntityKind::User))
    }

    /// Partially update a user: absent or empty fields are left untouched
    pub async fn update_user(&self, id: i64, request: UpdateUser) -> AppResult<User> {
        let mut tx = self.repository.begin_write().await?;
        validation::reference_exists(&self.repository, &mut tx, EntityKind::User, id).await?;
        validation::field_limits(&request)?;

        let name = request.name.as_deref().filter(|s| !s.is_empty());
        let email = request.email.as_deref().filter(|s| !s.is_empty());

        if let Some(email) = email {
            validation::unique_email(&self.repository, &mut tx, email, Some(id), EMAIL_IN_USE)
                .await?;
        }

        let user = self
            .repository
            .users_update(&mut tx, id, name, email)
            .await
            .map_err(|e| validation::email_conflict(e, EMAIL_IN_USE))?
            .ok_or(AppError::NotFound(EntityKind::User))?;
        tx.commit().await?;

        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    /// Delete a user. Their borrow records are kept.
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.begin_write().await?;
        validation::reference_exists(&self.repository, &mut tx, EntityKind::User, id).await?;
        self.repository.users_delete(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
