//! Rate limiting middleware for the contact endpoint.
//!
//! Implements in-memory rate limiting with a fixed window per client
//! identifier. Each entry holds a request count and a reset instant; a
//! full window rejects with 429 until the reset passes, then a fresh
//! window starts. Requests are keyed by the forwarded client address
//! headers set by the fronting proxy.

use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
    Extension,
};
use parking_lot::Mutex;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use crate::error::ContactApiError;

/// Default maximum requests per window.
pub const DEFAULT_MAX_REQUESTS: usize = 5;

/// Default window duration in seconds (1 hour).
pub const DEFAULT_WINDOW_SECS: u64 = 3600;

/// Identifier used when no client address header is present.
pub const ANONYMOUS_IDENTIFIER: &str = "anonymous";

/// Configuration for the rate limiter.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum number of requests allowed within the window.
    pub max_requests: usize,
    /// Duration of the fixed window.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
        }
    }
}

/// Entry tracking requests from a single client within one window.
#[derive(Debug, Clone)]
struct WindowEntry {
    /// Requests counted in the current window.
    count: usize,
    /// When the current window ends.
    reset_at: Instant,
}

/// Outcome of checking a request against the limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// The request fits in the current window and was counted.
    Allowed,
    /// The window is full.
    Limited {
        /// Seconds until the window resets, rounded up.
        retry_after_secs: u64,
    },
}

/// In-memory fixed-window rate limiter keyed by client identifier.
///
/// Thread-safe; clones share the same entry map.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Configuration for rate limiting.
    config: RateLimitConfig,
    /// Window entries keyed by client identifier.
    entries: Arc<Mutex<HashMap<String, WindowEntry>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration.
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a new rate limiter with default configuration (5 requests/hour).
    #[must_use]
    pub fn default_config() -> Self {
        Self::new(RateLimitConfig::default())
    }

    /// Check a request from `identifier` against the current window.
    ///
    /// Counts the request when allowed. A missing or expired entry starts
    /// a fresh window with a count of one.
    pub fn check(&self, identifier: &str) -> RateLimitDecision {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        match entries.get_mut(identifier) {
            Some(entry) if now <= entry.reset_at => {
                if entry.count >= self.config.max_requests {
                    RateLimitDecision::Limited {
                        retry_after_secs: self.retry_after_secs(entry.reset_at - now),
                    }
                } else {
                    entry.count += 1;
                    RateLimitDecision::Allowed
                }
            }
            _ => {
                entries.insert(
                    identifier.to_string(),
                    WindowEntry {
                        count: 1,
                        reset_at: now + self.config.window,
                    },
                );
                RateLimitDecision::Allowed
            }
        }
    }

    /// Remove entries whose window has ended.
    ///
    /// Should be called periodically to prevent memory growth. Returns
    /// the number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let before = entries.len();
        entries.retain(|_, entry| now <= entry.reset_at);
        before - entries.len()
    }

    /// Number of tracked identifiers, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether no identifiers are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Get the current configuration.
    #[must_use]
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Seconds until reset, rounded up, never zero.
    fn retry_after_secs(&self, remaining: Duration) -> u64 {
        let mut secs = remaining.as_secs();
        if remaining.subsec_nanos() > 0 {
            secs += 1;
        }
        if secs == 0 {
            secs = self.config.window.as_secs();
        }
        secs
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Extract the rate-limit key for a request.
///
/// Takes the first address in `X-Forwarded-For`, then `X-Real-IP`, then
/// a shared anonymous bucket. The values are used verbatim; the fronting
/// proxy is trusted to set them.
#[must_use]
pub fn client_identifier(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            return first.trim().to_string();
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|value| value.to_str().ok()) {
        return real_ip.to_string();
    }

    ANONYMOUS_IDENTIFIER.to_string()
}

/// Rate limiting middleware layer for the contact endpoint.
///
/// Runs before body parsing, so malformed requests still count against
/// the client's window.
pub async fn rate_limit_middleware(
    Extension(limiter): Extension<Arc<RateLimiter>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let identifier = client_identifier(request.headers());

    match limiter.check(&identifier) {
        RateLimitDecision::Allowed => next.run(request).await,
        RateLimitDecision::Limited { retry_after_secs } => {
            tracing::warn!(
                identifier = %identifier,
                retry_after_secs,
                "Rate limit exceeded for contact intake"
            );
            ContactApiError::TooManyRequests { retry_after_secs }.into_response()
        }
    }
}
