//! Data models for LibSys
//!
//! Explicit record shapes for the four MongoDB collections. Required fields
//! are typed; arbitrary extra fields that the dashboard may have stored are
//! preserved through flattened BSON documents.

pub mod admin;
pub mod book;
pub mod borrowed_book;
pub mod enums;
pub mod user;

// Re-export commonly used types
pub use admin::Admin;
pub use book::{Book, CreateBook, NewBook, UpdateBook};
pub use borrowed_book::BorrowedBook;
pub use enums::{AdminStatus, Availability};
pub use user::{CreateUser, UpdateUser, User};
