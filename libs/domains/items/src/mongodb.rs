//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc},
};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{
    CreateItem, DeleteCount, Item, ItemDocument, UpdateCounts, UpdateItem, parse_object_id,
};
use crate::repository::ItemRepository;

/// Default collection name
pub const DEFAULT_COLLECTION: &str = "items";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Repository over the `items` collection.
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(client.database("shop"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ItemDocument>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<ItemDocument> {
        &self.collection
    }

    /// Inserts go through the DTO so the driver assigns `_id`.
    fn insert_collection(&self) -> Collection<CreateItem> {
        self.collection.clone_with_type()
    }
}

fn object_id_hex(id: &Bson) -> ItemResult<String> {
    id.as_object_id()
        .map(|oid| oid.to_hex())
        .ok_or_else(|| ItemError::Database(format!("unexpected inserted id type: {id}")))
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn insert_one(&self, input: CreateItem) -> ItemResult<String> {
        let result = self.insert_collection().insert_one(&input).await?;
        let id = object_id_hex(&result.inserted_id)?;

        tracing::info!(item_id = %id, "Item created successfully");
        Ok(id)
    }

    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    async fn insert_many(&self, inputs: Vec<CreateItem>) -> ItemResult<Vec<String>> {
        let count = inputs.len();
        let result = self.insert_collection().insert_many(&inputs).await?;

        let ids = (0..count)
            .map(|index| {
                result
                    .inserted_ids
                    .get(&index)
                    .ok_or_else(|| ItemError::Database(format!("no id reported for item {index}")))
                    .and_then(object_id_hex)
            })
            .collect::<ItemResult<Vec<_>>>()?;

        tracing::info!(count = ids.len(), "Items created successfully");
        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, id: &str) -> ItemResult<Option<Item>> {
        let oid = parse_object_id(id)?;
        let item = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(item.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<ItemDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self, input))]
    async fn update_one(&self, id: &str, input: UpdateItem) -> ItemResult<UpdateCounts> {
        let oid = parse_object_id(id)?;
        let update = doc! { "$set": { "title": input.title, "price": input.price } };
        let result = self.collection.update_one(doc! { "_id": oid }, update).await?;

        tracing::info!(
            item_id = %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "Item update applied"
        );
        Ok(UpdateCounts {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, id: &str) -> ItemResult<DeleteCount> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        tracing::info!(item_id = %id, deleted = result.deleted_count, "Item delete applied");
        Ok(DeleteCount {
            deleted_count: result.deleted_count,
        })
    }
}
