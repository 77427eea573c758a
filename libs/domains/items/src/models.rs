use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{ItemError, ItemResult};

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: u64 = 200;

/// Item as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// 24-character hex ObjectId
    #[schema(example = "6553a1b2c3d4e5f6a7b8c9d0")]
    pub id: String,
    #[schema(example = "Test Item")]
    pub title: String,
    #[schema(example = 69.69)]
    pub price: f64,
}

/// Stored shape of an item: `{ _id: ObjectId, title, price }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub price: f64,
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            price: doc.price,
        }
    }
}

/// DTO for creating a new item.
///
/// Serialized as-is on insert; `_id` is left to the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(
        length(max = MAX_TITLE_LEN, message = "title must be at most 200 characters"),
        custom(function = "validate_title")
    )]
    #[schema(example = "Test Item", max_length = 200)]
    pub title: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(example = 69.69)]
    pub price: f64,
}

/// DTO for replacing the title and price of an existing item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(
        length(max = MAX_TITLE_LEN, message = "title must be at most 200 characters"),
        custom(function = "validate_title")
    )]
    #[schema(example = "Renamed Item", max_length = 200)]
    pub title: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(example = 12.5)]
    pub price: f64,
}

impl CreateItem {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

impl UpdateItem {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("title must not be empty".into()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(
            ValidationError::new("range").with_message("price must be greater than zero".into())
        );
    }
    Ok(())
}

/// Response for `POST /items/create/one`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertedId {
    #[schema(example = "6553a1b2c3d4e5f6a7b8c9d0")]
    pub inserted_id: String,
}

/// Response for `POST /items/create/many`. Ids follow input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertedIds {
    pub inserted_ids: Vec<String>,
}

/// Response for `PUT /items/update/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCounts {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Response for `DELETE /items/delete/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCount {
    pub deleted_count: u64,
}

/// Parses a 24-character hex string into an ObjectId.
pub fn parse_object_id(id: &str) -> ItemResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| ItemError::InvalidId(id.to_string()))
}
