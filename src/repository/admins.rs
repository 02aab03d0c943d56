//! Admins repository (read-only)

use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

use crate::{error::AppResult, models::admin::Admin};

#[derive(Clone)]
pub struct AdminsRepository {
    collection: Collection<Admin>,
}

impl AdminsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("admins"),
        }
    }

    /// List the full collection unfiltered
    pub async fn list(&self) -> AppResult<Vec<Admin>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}
