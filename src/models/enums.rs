//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether a book is currently lent out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Availability {
    Available,
    Borrowed,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Borrowed => "Borrowed",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Admin account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AdminStatus {
    Active,
    Inactive,
}

impl AdminStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminStatus::Active => "Active",
            AdminStatus::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
