//! LibSys Admin Server
//!
//! REST JSON API backing the LibSys library-administration dashboard:
//! CRUD over users and books, plus dashboard aggregates (statistics,
//! overdue borrowers, admin list) stored in MongoDB.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
