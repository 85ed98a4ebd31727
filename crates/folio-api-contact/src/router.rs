//! Router assembly for contact intake.

use std::sync::Arc;

use axum::{middleware, routing::post, Extension, Router};

use crate::handlers::submit_contact_handler;
use crate::middleware::rate_limit::{rate_limit_middleware, RateLimiter};
use crate::service::ContactService;

/// Shared state for the contact routes.
#[derive(Clone)]
pub struct ContactState {
    /// Submission pipeline.
    pub service: Arc<ContactService>,
    /// Per-client request limiter.
    pub limiter: Arc<RateLimiter>,
}

impl ContactState {
    /// Wrap a service and limiter for router injection.
    #[must_use]
    pub fn new(service: ContactService, limiter: RateLimiter) -> Self {
        Self {
            service: Arc::new(service),
            limiter: Arc::new(limiter),
        }
    }
}

/// Build the contact intake router, mounted under `/api` by the
/// application.
///
/// The rate limiter runs before body parsing, so malformed requests
/// still count against the client's window.
pub fn contact_router(state: ContactState) -> Router {
    Router::new()
        .route("/contact", post(submit_contact_handler))
        .layer(middleware::from_fn(rate_limit_middleware))
        .layer(Extension(state.service))
        .layer(Extension(state.limiter))
}
