//! Item Service - Business logic layer

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{
    CreateItem, DeleteCount, InsertedId, InsertedIds, Item, UpdateCounts, UpdateItem,
};
use crate::repository::ItemRepository;

/// Per-call deadline applied when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Item service providing business logic operations
///
/// Validates input, bounds every repository call with its own deadline and
/// turns "nothing matched" on update into [`ItemError::NotFound`].
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
    request_timeout: Duration,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Runs one repository call under a fresh deadline.
    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = ItemResult<T>>,
    ) -> ItemResult<T> {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_ms = self.request_timeout.as_millis() as u64,
                    "Repository call exceeded deadline"
                );
                Err(ItemError::Timeout(operation))
            }
        }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<InsertedId> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let inserted_id = self
            .bounded("insert item", self.repository.insert_one(input))
            .await?;
        Ok(InsertedId { inserted_id })
    }

    /// Validates the whole batch before writing anything.
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn create_items(&self, inputs: Vec<CreateItem>) -> ItemResult<InsertedIds> {
        if inputs.is_empty() {
            return Err(ItemError::Validation(
                "at least one item is required".to_string(),
            ));
        }

        for (index, input) in inputs.iter().enumerate() {
            input
                .validate()
                .map_err(|e| ItemError::Validation(format!("item {index}: {e}")))?;
        }

        let inserted_ids = self
            .bounded("insert items", self.repository.insert_many(inputs))
            .await?;
        Ok(InsertedIds { inserted_ids })
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> ItemResult<Item> {
        self.bounded("find item", self.repository.find_one(id))
            .await?
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.bounded("list items", self.repository.find_all())
            .await
    }

    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: &str, input: UpdateItem) -> ItemResult<UpdateCounts> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let counts = self
            .bounded("update item", self.repository.update_one(id, input))
            .await?;

        if counts.matched_count == 0 {
            return Err(ItemError::NotFound(id.to_string()));
        }
        Ok(counts)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> ItemResult<DeleteCount> {
        self.bounded("delete item", self.repository.delete_one(id))
            .await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            request_timeout: self.request_timeout,
        }
    }
}
