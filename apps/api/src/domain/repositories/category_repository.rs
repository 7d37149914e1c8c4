use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::category::{Category, CategoryFields};

/// Repository trait for categories
///
/// Defines the contract for persisting and retrieving categories.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List categories ordered by id, at most `limit` of them
    ///
    /// `limit` is passed through unchecked; stores may reject negative values.
    async fn find_all(&self, limit: i64) -> RepositoryResult<Vec<Category>>;

    /// Find a category by its ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>>;

    /// Insert a new category and return it with its assigned id
    async fn create(&self, fields: &CategoryFields) -> RepositoryResult<Category>;

    /// Overwrite every mutable field of an existing category
    ///
    /// Returns `None` when no row has the given id.
    async fn update(&self, id: i64, fields: &CategoryFields) -> RepositoryResult<Option<Category>>;

    /// Delete a category by ID; deleting a missing id is not an error
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
