//! Admin model

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::AdminStatus;

/// Admin record from the `admins` collection.
///
/// Read-only in this service: the dashboard's status toggle is client-local
/// and has no backing endpoint here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Admin {
    #[serde(
        rename = "_id",
        serialize_with = "mongodb::bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    #[schema(value_type = String, example = "65f1a0b2c3d4e5f6a7b8c9d0")]
    pub id: ObjectId,
    pub name: String,
    pub status: AdminStatus,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}
