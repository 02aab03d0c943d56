//! Books repository

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};

use crate::{
    error::AppResult,
    models::{
        book::{Book, NewBook},
        enums::Availability,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<Book>,
}

impl BooksRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("books"),
        }
    }

    /// List the full collection in natural order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Book>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Insert a book and return the assigned identifier
    pub async fn insert(&self, book: &NewBook) -> AppResult<ObjectId> {
        let result = self
            .collection
            .clone_with_type::<NewBook>()
            .insert_one(book)
            .await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            crate::error::AppError::Internal("insert did not return an ObjectId".to_string())
        })
    }

    /// `$set` the given fields on the matching document; returns the matched count
    pub async fn update(&self, id: ObjectId, fields: Document) -> AppResult<u64> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result.matched_count)
    }

    /// Delete by identifier; returns the deleted count
    pub async fn delete(&self, id: ObjectId) -> AppResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    /// Total number of books
    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    /// Number of books with the given availability
    pub async fn count_by_availability(&self, availability: Availability) -> AppResult<u64> {
        Ok(self
            .collection
            .count_documents(doc! { "availability": availability.as_str() })
            .await?)
    }
}
