//! Books domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::book::{Book, BookRow, NewBook},
};

impl Repository {
    /// List every book, oldest first
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, isbn, category, total_copies, available_copies
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Find a book by its ISBN
    pub async fn books_find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, isbn, category, total_copies, available_copies
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Book::from))
    }

    pub async fn books_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a book with all copies available and commit. Returns the new id.
    pub async fn books_create(&self, book: &NewBook) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, author, isbn, category, total_copies, available_copies)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(&book.category)
        .bind(book.total_copies)
        .bind(book.total_copies)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }
}
