//! API handlers for LibSys REST endpoints

pub mod books;
pub mod dashboard;
pub mod health;
pub mod openapi;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

/// Plain success message body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
