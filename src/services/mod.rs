//! Business logic services
//!
//! One method per operation. Each mutating method runs its validation and its
//! single mutation inside one write transaction: either everything commits or
//! nothing does.

pub mod borrows;
pub mod catalog;
pub mod users;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub borrows: borrows::BorrowsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            users: users::UsersService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            borrows: borrows::BorrowsService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the store answers queries
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
