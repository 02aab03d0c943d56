//! Dashboard aggregates service

use mongodb::bson::DateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{admin::Admin, borrowed_book::BorrowedBook, enums::Availability},
    repository::Repository,
};

/// Dashboard counters.
///
/// Computed as four independent count queries with no snapshot isolation;
/// concurrent writes can make the counters mutually inconsistent.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total number of users
    pub user_count: u64,
    /// Total number of books
    pub book_count: u64,
    /// Books currently marked Borrowed
    pub borrowed_books: u64,
    /// Books currently marked Available
    pub returned_books: u64,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute the dashboard counters
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let user_count = self.repository.users.count().await?;
        let book_count = self.repository.books.count().await?;
        let borrowed_books = self
            .repository
            .books
            .count_by_availability(Availability::Borrowed)
            .await?;
        let returned_books = self
            .repository
            .books
            .count_by_availability(Availability::Available)
            .await?;

        Ok(DashboardStats {
            user_count,
            book_count,
            borrowed_books,
            returned_books,
        })
    }

    /// List records overdue as of the current server time
    pub async fn overdue(&self) -> AppResult<Vec<BorrowedBook>> {
        self.repository.borrowed_books.overdue(DateTime::now()).await
    }

    /// List all admins
    pub async fn admins(&self) -> AppResult<Vec<Admin>> {
        self.repository.admins.list().await
    }
}
