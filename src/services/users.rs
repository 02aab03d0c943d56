//! Users service

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Create a user and return the assigned identifier
    pub async fn create(&self, user: CreateUser) -> AppResult<ObjectId> {
        user.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.users.insert(&user).await
    }

    /// Merge-update the named fields of a user.
    ///
    /// name, email and username must all be present; a client-supplied
    /// identifier is stripped before the update. A malformed identifier on
    /// user routes surfaces as a 500.
    pub async fn update(&self, id: &str, user: UpdateUser) -> AppResult<()> {
        if !user.has_required_fields() {
            return Err(AppError::Validation(
                "Please provide all necessary fields.".to_string(),
            ));
        }

        let id = ObjectId::parse_str(id)
            .map_err(|e| AppError::Internal(format!("malformed user id: {}", e)))?;
        let fields = user.into_set_document()?;

        let matched = self.repository.users.update(id, fields).await?;
        if matched == 0 {
            return Err(AppError::NotFound("User not found.".to_string()));
        }
        Ok(())
    }

    /// Delete a user; returns the deleted count.
    ///
    /// Deleting an unknown identifier is not an error on this route: the
    /// caller receives the acknowledgment with a zero count.
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let id = ObjectId::parse_str(id)
            .map_err(|e| AppError::Internal(format!("malformed user id: {}", e)))?;
        self.repository.users.delete(id).await
    }
}
