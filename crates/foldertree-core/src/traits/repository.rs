//! Generic repository trait for store access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic read/delete repository trait.
///
/// Each entity gets a strongly typed repository. Entity-specific queries
/// and inserts live on the store traits that extend this one.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// List every entity, ascending by primary key.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if a row was removed.
    async fn delete(&self, id: &Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
