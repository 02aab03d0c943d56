//! Business logic services

pub mod books;
pub mod dashboard;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub books: books::BooksService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            users: users::UsersService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
