//! Borrowed-book record model
//!
//! Records are written by the borrowing flow outside this service; here they
//! are only read for overdue detection, so the shape is deserialize-oriented.

use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Borrowed-book record from the `borrowedBooks` collection.
///
/// `name` is the borrower's name. The due date is stored as a BSON datetime
/// and serialized to JSON as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowedBook {
    #[serde(
        rename = "_id",
        serialize_with = "mongodb::bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    #[schema(value_type = String, example = "65f1a0b2c3d4e5f6a7b8c9d0")]
    pub id: ObjectId,
    pub name: String,
    #[serde(
        rename = "dueDate",
        deserialize_with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime::deserialize"
    )]
    pub due_date: DateTime<Utc>,
    pub returned: bool,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn deserializes_from_bson_document() {
        let due = mongodb::bson::DateTime::now();
        let record: BorrowedBook = mongodb::bson::from_document(doc! {
            "_id": ObjectId::new(),
            "name": "Grace Hopper",
            "dueDate": due,
            "returned": false,
            "bookName": "Dune",
        })
        .unwrap();

        assert_eq!(record.name, "Grace Hopper");
        assert!(!record.returned);
        assert_eq!(record.due_date, due.to_chrono());
        assert_eq!(record.extra.get_str("bookName").unwrap(), "Dune");
    }

    #[test]
    fn serializes_due_date_as_rfc3339() {
        let record: BorrowedBook = mongodb::bson::from_document(doc! {
            "_id": ObjectId::parse_str("65f1a0b2c3d4e5f6a7b8c9d0").unwrap(),
            "name": "Grace Hopper",
            "dueDate": mongodb::bson::DateTime::from_millis(1_700_000_000_000),
            "returned": true,
        })
        .unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["_id"], "65f1a0b2c3d4e5f6a7b8c9d0");
        assert!(value["dueDate"].as_str().unwrap().starts_with("2023-11-14T"));
    }

    #[test]
    fn extra_fields_survive_bson_to_json() {
        let record: BorrowedBook = mongodb::bson::from_document(doc! {
            "_id": ObjectId::new(),
            "name": "Grace Hopper",
            "dueDate": mongodb::bson::DateTime::from_millis(1_700_000_000_000),
            "returned": false,
            "bookName": "Dune",
            "renewals": 2,
        })
        .unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["bookName"], "Dune");
        assert_eq!(value["renewals"], 2);
        assert!(value["dueDate"].is_string());
    }
}
