use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::pickme::{CategoryFilter, Pickme, PickmeFields};

/// Repository trait for pickme items
#[async_trait]
pub trait PickmeRepository: Send + Sync {
    /// List pickmes passing `filter`, ordered by id, at most `limit` of them
    async fn find_all(&self, filter: CategoryFilter, limit: i64) -> RepositoryResult<Vec<Pickme>>;

    /// Find a pickme by its ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Pickme>>;

    /// Insert a new pickme and return it with its assigned id
    async fn create(&self, fields: &PickmeFields) -> RepositoryResult<Pickme>;

    /// Overwrite every mutable field of an existing pickme
    ///
    /// Returns `None` when no row has the given id.
    async fn update(&self, id: i64, fields: &PickmeFields) -> RepositoryResult<Option<Pickme>>;

    /// Delete a pickme by ID; deleting a missing id is not an error
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
