//! HTTP middleware for contact intake.

pub mod rate_limit;

pub use rate_limit::{
    client_identifier, rate_limit_middleware, RateLimitConfig, RateLimitDecision, RateLimiter,
};
