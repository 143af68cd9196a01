//! Catalog management service

use validator::{Validate, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBookRequest, NewBook, RequiredBookFields},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

/// First human-readable message carried by a validation failure
fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|list| list.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    /// Create a book from a client request.
    ///
    /// Checks run in a fixed order: required fields, ISBN uniqueness,
    /// copy count coercion, then copy count range.
    pub async fn create_book(&self, request: CreateBookRequest) -> AppResult<i64> {
        let RequiredBookFields {
            title,
            author,
            isbn,
            total_copies,
            category,
        } = request.require_fields().map_err(|field| {
            AppError::Validation(format!("Missing required field: {}", field))
        })?;

        if self.repository.books_find_by_isbn(&isbn).await?.is_some() {
            return Err(AppError::Validation(format!(
                "A book with ISBN '{}' already exists",
                isbn
            )));
        }

        let total_copies = total_copies.coerce().ok_or_else(|| {
            AppError::Validation("total_copies must be an integer".to_string())
        })?;

        let book = NewBook {
            title,
            author,
            isbn,
            category,
            total_copies,
        };
        book.validate()
            .map_err(|e| AppError::Validation(first_message(&e)))?;

        let id = self.repository.books_create(&book).await?;
        tracing::info!(book_id = id, isbn = %book.isbn, "Book created");
        Ok(id)
    }

    /// Insert a placeholder book numbered after the current row count.
    ///
    /// The count and the insert are not isolated: concurrent callers can
    /// compute the same ISBN and the second insert then fails on the unique
    /// constraint.
    pub async fn add_sample_book(&self) -> AppResult<(i64, String)> {
        let count = self.repository.books_count().await?;
        let book = NewBook::sample(count + 1);

        let id = self.repository.books_create(&book).await?;
        tracing::info!(book_id = id, isbn = %book.isbn, "Sample book created");
        Ok((id, book.isbn))
    }
}
