//! Contact form intake for the portfolio backend.
//!
//! The pipeline behind `POST /api/contact`: per-client fixed-window rate
//! limiting, field validation, a per-sender cap over stored submissions,
//! persistence, and best-effort admin notification email.

pub mod email;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod notify;
pub mod router;
pub mod service;
pub mod validation;

pub use email::{
    EmailError, EmailSender, MockEmailSender, ResendEmailSender, DEFAULT_FROM_ADDRESS,
};
pub use error::ContactApiError;
pub use middleware::rate_limit::{RateLimitConfig, RateLimiter};
pub use router::{contact_router, ContactState};
pub use service::ContactService;
