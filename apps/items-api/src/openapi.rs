//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service-level metadata; paths come from the domain docs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "CRUD API for items stored in DynamoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Items", description = "Item CRUD endpoints (DynamoDB)")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for all APIs
///
/// Item paths are already absolute, so the domain document is merged rather
/// than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_items::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_item_paths() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Items API");
        assert!(doc.paths.paths.contains_key("/items"));
        assert!(doc.paths.paths.contains_key("/items/{item_id}"));
    }
}
