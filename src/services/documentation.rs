use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the greeting service.
#[openapi(
    paths(
        crate::routes::root::greeting,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::dto::health::HealthStatus,
            crate::dto::error::ErrorBody,
        )
    ),
    tags(
        (name = "root", description = "Welcome message"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
