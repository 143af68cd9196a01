//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Inventory API",
        version = "0.1.0",
        description = "Book inventory REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::create_book,
        books::add_sample_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBookRequest,
            crate::models::book::BookCreated,
            crate::models::book::SampleBookCreated,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book inventory")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/ready", "/books", "/books/add"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
