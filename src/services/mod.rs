/// Greeting and health logic.
pub mod app_service;
/// OpenAPI documentation generation.
pub mod documentation;
