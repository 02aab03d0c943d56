//! Book model and request types

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::Availability;

/// Book record as stored in the `books` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[serde(
        rename = "_id",
        serialize_with = "mongodb::bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    #[schema(value_type = String, example = "65f1a0b2c3d4e5f6a7b8c9d0")]
    pub id: ObjectId,
    pub name: String,
    #[serde(rename = "type")]
    pub book_type: String,
    pub language: String,
    pub availability: Availability,
    pub quantity: i64,
}

/// Create book request; availability and quantity default when absent
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub book_type: String,
    #[validate(length(min = 1, message = "language must not be empty"))]
    pub language: String,
    pub availability: Option<Availability>,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: Option<i64>,
}

impl CreateBook {
    /// Apply creation defaults: availability "Available", quantity 1
    pub fn into_new_book(self) -> NewBook {
        NewBook {
            name: self.name,
            book_type: self.book_type,
            language: self.language,
            availability: self.availability.unwrap_or(Availability::Available),
            quantity: self.quantity.unwrap_or(1),
        }
    }
}

/// Book document ready for insertion (no identifier yet; MongoDB assigns it)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub name: String,
    #[serde(rename = "type")]
    pub book_type: String,
    pub language: String,
    pub availability: Availability,
    pub quantity: i64,
}

/// Update book request; all fields are overwritten by the merge update
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub book_type: String,
    #[validate(length(min = 1, message = "language must not be empty"))]
    pub language: String,
    pub availability: Availability,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i64,
}
