//! Public read endpoints for portfolio content.
//!
//! Serves the sections a portfolio frontend renders: projects, skills,
//! certifications, achievements, published blog posts, and the current
//! resume. All endpoints are unauthenticated reads.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::ContentApiError;
pub use router::{content_router, ContentState};
