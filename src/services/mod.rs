//! Business logic services

pub mod catalog;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database answers queries
    pub async fn check_database(&self) -> crate::error::AppResult<()> {
        self.repository.ping().await
    }
}
