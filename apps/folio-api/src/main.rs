//! Portfolio API server.
//!
//! Wires configuration, the database pool, contact intake, and public
//! content routes into a single Axum application with health probes and
//! graceful shutdown.

mod config;
mod health;
mod logging;
mod openapi;
mod state;

use axum::{routing::get, Router};
use config::Config;
use folio_api_contact::{
    contact_router, ContactService, ContactState, RateLimitConfig, RateLimiter, ResendEmailSender,
};
use folio_api_content::{content_router, ContentState};
use folio_db::DbPool;
use health::{health_handler, livez_handler, readyz_handler};
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        env = %config.app_env,
        "Starting folio API"
    );

    // Validate security configuration
    match config.validate_security_config() {
        Ok(warnings) => {
            for warning in &warnings {
                tracing::warn!(target: "security", "{}", warning);
            }
            if !warnings.is_empty() {
                tracing::warn!(
                    target: "security",
                    count = warnings.len(),
                    "Insecure default values detected (allowed in {} mode)",
                    config.app_env
                );
            }
        }
        Err(errors) => {
            for error in &errors {
                tracing::error!(target: "security", "{}", error);
            }
            eprintln!(
                "FATAL: {} insecure default(s) detected in production mode. \
                 Set explicit values or use APP_ENV=development.",
                errors.len()
            );
            std::process::exit(1);
        }
    }

    for warning in config.notification_warnings() {
        tracing::warn!("{}", warning);
    }

    // Create database connection pool
    let pool = match DbPool::connect_with(
        &config.database_url,
        config.db_max_connections,
        folio_db::pool::DEFAULT_ACQUIRE_TIMEOUT,
    )
    .await
    {
        Ok(pool) => {
            info!("Database connection established");
            pool
        }
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    // Apply pending migrations before accepting traffic
    if let Err(e) = folio_db::run_migrations(&pool).await {
        eprintln!("Failed to run database migrations: {e}");
        std::process::exit(1);
    }
    info!("Database migrations applied");

    // Contact intake pipeline. The same window and cap drive both the
    // per-client limiter and the per-sender stored-submission check.
    let sender_window = Duration::from_secs(config.contact_rate_limit.window_secs);
    let mut contact_service = ContactService::new(pool.clone())
        .with_sender_window(sender_window, config.contact_rate_limit.max_per_sender());

    if let (Some(api_key), Some(admin_email)) = (&config.resend_api_key, &config.admin_email) {
        let sender = ResendEmailSender::new(api_key.clone(), config.notification_from.clone());
        contact_service = contact_service.with_notifier(Arc::new(sender), admin_email.clone());
        info!("Contact notifications enabled");
    } else {
        info!("Resend API key or admin email not configured; contact notifications disabled");
    }

    let limiter = RateLimiter::new(RateLimitConfig {
        max_requests: config.contact_rate_limit.max_requests,
        window: Duration::from_secs(config.contact_rate_limit.window_secs),
    });

    let contact_state = ContactState::new(contact_service, limiter);
    let content_state = ContentState::new(pool.clone());

    let app_state = AppState::new(pool.inner().clone(), config.health_check);
    let shutting_down = app_state.shutting_down.clone();

    let cors = build_cors_layer(&config.cors_origins);

    // Spawn background sweep task for expired rate limit windows
    {
        let sweep_limiter = contact_state.limiter.clone();
        let interval = Duration::from_secs(config.contact_rate_limit.sweep_interval_secs);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let removed = sweep_limiter.sweep_expired();
                if removed > 0 {
                    tracing::debug!(removed, "Swept expired rate limit windows");
                }
            }
        });
    }

    // Build the router
    let api_routes = contact_router(contact_state).merge(content_router(content_state));

    let app = Router::new()
        // Health check endpoint (no auth required)
        .route("/health", get(health_handler))
        // Kubernetes health probes (no auth required)
        .route("/livez", get(livez_handler))
        .route("/readyz", get(readyz_handler))
        // OpenAPI spec
        .merge(openapi::docs_routes())
        .with_state(app_state)
        // Public API surface
        .nest("/api", api_routes)
        // Body size limit (default 1MB)
        .layer(RequestBodyLimitLayer::new(config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Bind and serve
    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutting_down))
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Build CORS layer from configured origins.
///
/// When explicit origins are configured (non-wildcard), enables
/// `allow_credentials(true)` and logs rejected origins as structured
/// security events.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    use tower_http::cors::AllowOrigin;

    let is_wildcard = origins.len() == 1 && origins[0] == "*";

    let allow_origin = if is_wildcard {
        AllowOrigin::any()
    } else {
        // Use a predicate that logs CORS rejections
        let allowed: Vec<axum::http::HeaderValue> =
            origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _req: &axum::http::request::Parts| {
                let is_allowed = allowed.contains(origin);
                if !is_allowed {
                    let origin_str = origin.to_str().unwrap_or("<non-utf8>");
                    tracing::warn!(
                        target: "security",
                        event_type = "cors_rejected",
                        origin = %origin_str,
                        outcome = "rejected",
                        "CORS origin rejected"
                    );
                }
                is_allowed
            },
        )
    };

    let mut layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .max_age(Duration::from_secs(3600));

    // Only enable credentials for non-wildcard origins (browser requirement).
    // When credentials are enabled, `Any` cannot be used for headers or
    // methods per the CORS spec, so list what the frontend actually needs.
    if is_wildcard {
        layer = layer.allow_methods(Any).allow_headers(Any);
    } else {
        use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
        use axum::http::Method;
        layer = layer
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, ACCEPT, ORIGIN])
            .allow_credentials(true);
    }

    layer
}

/// Graceful shutdown signal handler.
///
/// Sets the `shutting_down` flag before returning so the readiness probe
/// returns 503 to drain traffic before Axum stops accepting connections.
async fn shutdown_signal(shutting_down: Arc<std::sync::atomic::AtomicBool>) {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                // Fall through - we still want to wait for terminate signal
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                // Wait forever if we can't install the handler
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    // Flip the flag before Axum starts draining connections, so the
    // readiness probe reports 503 and load balancers stop routing here.
    shutting_down.store(true, std::sync::atomic::Ordering::Release);
    info!("Readiness probe set to unhealthy; draining traffic");
}
