//! Users repository

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};

use crate::{
    error::AppResult,
    models::user::{CreateUser, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    collection: Collection<User>,
}

impl UsersRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    /// List the full collection in natural order
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a user and return the assigned identifier
    pub async fn insert(&self, user: &CreateUser) -> AppResult<ObjectId> {
        let result = self
            .collection
            .clone_with_type::<CreateUser>()
            .insert_one(user)
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

    /// Total number of users
    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
