//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record as exposed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Unique across the catalog
    pub isbn: String,
    pub category: Option<String>,
    pub total_copies: i64,
    /// Set to `total_copies` when the book is created
    pub available_copies: i64,
}

/// Row of the `books` table
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: Option<String>,
    pub total_copies: i64,
    pub available_copies: i64,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            isbn: row.isbn,
            category: row.category,
            total_copies: row.total_copies,
            available_copies: row.available_copies,
        }
    }
}

/// Copy count as submitted by a client: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CopyCount {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl CopyCount {
    /// Integer value of the count, `None` when it is not numeric.
    /// Decimals are truncated toward zero; values outside the i64 range
    /// are not numeric.
    pub fn coerce(&self) -> Option<i64> {
        match self {
            CopyCount::Integer(n) => Some(*n),
            CopyCount::Decimal(f) => {
                let whole = f.trunc();
                // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
                (whole >= i64::MIN as f64 && whole < i64::MAX as f64).then(|| whole as i64)
            }
            CopyCount::Text(s) => s.trim().parse().ok(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, CopyCount::Text(s) if s.trim().is_empty())
    }
}

/// Create book request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub total_copies: Option<CopyCount>,
    pub category: Option<String>,
}

/// Create book request after the presence check
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredBookFields {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: CopyCount,
    pub category: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl CreateBookRequest {
    /// Unwrap the required fields, checked in order title, author, isbn,
    /// total_copies. Absent, null and blank values count as missing; the
    /// error is the name of the first missing field.
    pub fn require_fields(self) -> Result<RequiredBookFields, &'static str> {
        let title = present(self.title).ok_or("title")?;
        let author = present(self.author).ok_or("author")?;
        let isbn = present(self.isbn).ok_or("isbn")?;
        let total_copies = self
            .total_copies
            .filter(|count| !count.is_blank())
            .ok_or("total_copies")?;

        Ok(RequiredBookFields {
            title,
            author,
            isbn,
            total_copies,
            category: self.category,
        })
    }
}

/// Book ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "isbn must not be empty"))]
    pub isbn: String,
    pub category: Option<String>,
    #[validate(range(min = 1, message = "total_copies must be at least 1"))]
    pub total_copies: i64,
}

impl NewBook {
    /// Placeholder book produced by the sample generator, `sequence` starting at 1
    pub fn sample(sequence: i64) -> Self {
        Self {
            title: format!("Sample Book {}", sequence),
            author: "Sample Author".to_string(),
            isbn: format!("TEST-{:03}", sequence),
            category: Some("Sample".to_string()),
            total_copies: 3,
        }
    }
}

/// Response to a book creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookCreated {
    pub message: String,
    pub book_id: i64,
}

/// Response to a sample book creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SampleBookCreated {
    pub message: String,
    pub book_id: i64,
    pub isbn: String,
}
