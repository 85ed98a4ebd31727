//! `OpenAPI` documentation for the portfolio API.
//!
//! This module assembles the OpenAPI document from utoipa handler
//! annotations across the API crates and serves it as JSON.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::health;
use crate::state::AppState;

/// `OpenAPI` documentation for the portfolio API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "folio API",
        version = "0.1.0",
        description = "Portfolio backend: contact intake and public content"
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server")
    ),
    paths(
        health::health_handler,
        health::livez_handler,
        health::readyz_handler,
        folio_api_contact::handlers::submit::submit_contact_handler,
        folio_api_content::handlers::portfolio::list_projects_handler,
        folio_api_content::handlers::portfolio::list_skills_handler,
        folio_api_content::handlers::portfolio::list_certifications_handler,
        folio_api_content::handlers::portfolio::list_achievements_handler,
        folio_api_content::handlers::blog::list_blog_posts_handler,
        folio_api_content::handlers::blog::get_blog_post_handler,
        folio_api_content::handlers::resume::get_resume_handler,
    ),
    components(schemas(
        health::HealthStatus,
        health::DependencyCheck,
        health::HealthResponse,
        health::LivenessResponse,
        folio_api_contact::models::SubmissionInput,
        folio_api_contact::models::SubmitResponse,
        folio_api_contact::error::ErrorBody,
        folio_db::models::Project,
        folio_db::models::Skill,
        folio_db::models::ProficiencyLevel,
        folio_db::models::Certification,
        folio_db::models::Achievement,
        folio_db::models::BlogPost,
        folio_db::models::ResumeFile,
    )),
    tags(
        (name = "health", description = "Service health and status"),
        (name = "contact", description = "Contact form intake"),
        (name = "content", description = "Public portfolio content")
    )
)]
pub struct ApiDoc;

/// Routes serving the `OpenAPI` document.
pub fn docs_routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("Should serialize to JSON");
        assert!(json.contains("folio API"));
        assert!(json.contains("/health"));
    }

    #[test]
    fn test_openapi_contains_all_endpoints() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/health"), "Missing /health endpoint");
        assert!(paths.contains_key("/livez"), "Missing /livez endpoint");
        assert!(paths.contains_key("/readyz"), "Missing /readyz endpoint");
        assert!(
            paths.contains_key("/api/contact"),
            "Missing /api/contact endpoint"
        );
        assert!(
            paths.contains_key("/api/projects"),
            "Missing /api/projects endpoint"
        );
        assert!(
            paths.contains_key("/api/skills"),
            "Missing /api/skills endpoint"
        );
        assert!(
            paths.contains_key("/api/certifications"),
            "Missing /api/certifications endpoint"
        );
        assert!(
            paths.contains_key("/api/achievements"),
            "Missing /api/achievements endpoint"
        );
        assert!(paths.contains_key("/api/blog"), "Missing /api/blog endpoint");
        assert!(
            paths.contains_key("/api/blog/{slug}"),
            "Missing /api/blog/{{slug}} endpoint"
        );
        assert!(
            paths.contains_key("/api/resume"),
            "Missing /api/resume endpoint"
        );
    }

    #[test]
    fn test_openapi_has_components() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("HealthResponse"));
        assert!(schemas.contains_key("SubmissionInput"));
        assert!(schemas.contains_key("SubmitResponse"));
        assert!(schemas.contains_key("Project"));
        assert!(schemas.contains_key("BlogPost"));
        assert!(schemas.contains_key("ResumeFile"));
    }

    #[test]
    fn test_openapi_has_expected_tags() {
        let doc = ApiDoc::openapi();
        let tags = doc.tags.as_ref().expect("tags should be set");
        for tag_name in ["health", "contact", "content"] {
            assert!(
                tags.iter().any(|t| t.name == tag_name),
                "Missing tag: {tag_name}"
            );
        }
    }
}
