//! User model and request types

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User record as stored in the `users` collection.
///
/// Extra fields written by older dashboard versions are preserved through
/// the flattened document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(
        rename = "_id",
        serialize_with = "mongodb::bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    #[schema(value_type = String, example = "65f1a0b2c3d4e5f6a7b8c9d0")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

/// Create user request
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

/// Update user request.
///
/// name, email and username are all required for an update; they are
/// optional here only so the handler can answer 400 instead of a
/// deserialization rejection when one is missing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

impl UpdateUser {
    /// All of name, email and username present and non-empty?
    pub fn has_required_fields(&self) -> bool {
        fn present(field: &Option<String>) -> bool {
            field.as_deref().map_or(false, |s| !s.is_empty())
        }
        present(&self.name) && present(&self.email) && present(&self.username)
    }

    /// Convert into the `$set` document for the merge update.
    ///
    /// A client-supplied `_id` is stripped first: identifiers are immutable.
    pub fn into_set_document(self) -> Result<Document, mongodb::bson::ser::Error> {
        let mut doc = mongodb::bson::to_document(&self)?;
        doc.remove("_id");
        Ok(doc)
    }
}
