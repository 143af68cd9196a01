//! Book (catalog) endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book::{Book, BookCreated, CreateBookRequest, SampleBookCreated},
    AppState,
};

use super::JsonBody;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in the catalog", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookCreated),
        (status = 400, description = "Invalid input or duplicate ISBN", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookCreated>)> {
    let book_id = state.services.catalog.create_book(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreated {
            message: "Book created".to_string(),
            book_id,
        }),
    ))
}

/// Add a placeholder book (debug helper, not safe under concurrent calls)
#[utoipa::path(
    get,
    path = "/books/add",
    tag = "books",
    responses(
        (status = 201, description = "Sample book created", body = SampleBookCreated)
    )
)]
pub async fn add_sample_book(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<SampleBookCreated>)> {
    let (book_id, isbn) = state.services.catalog.add_sample_book().await?;

    Ok((
        StatusCode::CREATED,
        Json(SampleBookCreated {
            message: "Sample book created".to_string(),
            book_id,
            isbn,
        }),
    ))
}
