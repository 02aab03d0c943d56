//! Borrowed-books repository (read-only)

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    Collection, Database,
};

use crate::{error::AppResult, models::borrowed_book::BorrowedBook};

/// Filter matching records strictly past due and not yet returned
fn overdue_filter(as_of: DateTime) -> Document {
    doc! {
        "dueDate": { "$lt": as_of },
        "returned": false,
    }
}

#[derive(Clone)]
pub struct BorrowedBooksRepository {
    collection: Collection<BorrowedBook>,
}

impl BorrowedBooksRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("borrowedBooks"),
        }
    }

    /// List records overdue as of the given instant
    pub async fn overdue(&self, as_of: DateTime) -> AppResult<Vec<BorrowedBook>> {
        let cursor = self.collection.find(overdue_filter(as_of)).await?;
        Ok(cursor.try_collect().await?)
    }
}
