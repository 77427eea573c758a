use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, DeleteCount, Item, UpdateCounts, UpdateItem};

/// Repository trait for Item persistence
///
/// Ids cross this boundary as hex strings. Implementations reject a
/// malformed id with [`ItemError::InvalidId`](crate::ItemError::InvalidId)
/// before touching storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert one item, returning its generated id
    async fn insert_one(&self, input: CreateItem) -> ItemResult<String>;

    /// Insert a batch, returning generated ids in input order
    async fn insert_many(&self, inputs: Vec<CreateItem>) -> ItemResult<Vec<String>>;

    /// Get an item by ID
    async fn find_one(&self, id: &str) -> ItemResult<Option<Item>>;

    /// All items, in no particular order
    async fn find_all(&self) -> ItemResult<Vec<Item>>;

    /// Overwrite title and price. Zero matches is not an error here.
    async fn update_one(&self, id: &str, input: UpdateItem) -> ItemResult<UpdateCounts>;

    /// Delete an item by ID. Zero matches is not an error.
    async fn delete_one(&self, id: &str) -> ItemResult<DeleteCount>;
}
