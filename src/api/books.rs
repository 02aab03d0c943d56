//! Book management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::MessageResponse;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.books.create(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a book by ID
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier (24-char hex)")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid input or identifier", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(book): Json<UpdateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update(&id, book).await?;
    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier (24-char hex)")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Invalid identifier", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
