//! Repository layer for database operations
//!
//! One MongoDB client connected at startup, with typed collection handles
//! passed explicitly to the services (no process-wide mutable state).

pub mod admins;
pub mod books;
pub mod borrowed_books;
pub mod users;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Main repository struct holding the database client and collection handles
#[derive(Clone)]
pub struct Repository {
    client: Client,
    pub users: users::UsersRepository,
    pub books: books::BooksRepository,
    pub borrowed_books: borrowed_books::BorrowedBooksRepository,
    pub admins: admins::AdminsRepository,
}

impl Repository {
    /// Connect to MongoDB and build the collection handles.
    ///
    /// Issues a ping so a bad connection string fails at startup instead of
    /// on the first request.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some("LibSys".to_string());
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self {
            users: users::UsersRepository::new(&db),
            books: books::BooksRepository::new(&db),
            borrowed_books: borrowed_books::BorrowedBooksRepository::new(&db),
            admins: admins::AdminsRepository::new(&db),
            client,
        })
    }

    /// Release the client's resources on shutdown
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
