//! Suitebox Forwarding API
//!
//! Parcel-forwarding service providing consolidation, rate quotes, and the
//! standalone package lifecycle over REST.
//!
//! ## REST Endpoints
//!
//! - `POST /api/v1/consolidate` - Consolidate packages into one shipment
//! - `POST /api/v1/rates/quote` - Tiered rate quote (four-method model)
//! - `POST /api/v1/packages` - Receive a parcel at the warehouse
//! - `GET /api/v1/packages` - List all parcels
//! - `GET /api/v1/packages/:id` - Get a parcel
//! - `DELETE /api/v1/packages/:id` - Remove a parcel
//! - `GET /api/v1/users/:id/packages` - List a user's parcels
//! - `PUT /api/v1/packages/:id/status` - Overwrite a parcel's status
//! - `POST /api/v1/packages/:id/forward` - Forward a parcel (two-method model)
//! - `POST /api/v1/packages/quote` - Region-multiplier freight quote
//! - `POST /api/v1/notify` - Admin-gated package-received email
//!
//! ## Health Endpoints
//!
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics

mod config;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;

use axum::extract::connect_info::IntoMakeServiceWithConnectInfo;
use axum::routing::{get, post, put};
use axum::Router;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use suitebox_db::Repositories;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handlers::{health, ready};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("forwarding_api=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Suitebox Forwarding API");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(http_port = config.http_port, "Configuration loaded");

    // Initialize metrics
    let metrics_handle = if config.metrics_enabled {
        Some(setup_metrics()?)
    } else {
        None
    };

    // Create database pool
    let pool = suitebox_db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Create repositories and application state
    let repos = Repositories::new(pool.clone());
    let state = AppState::new(repos, pool, config.clone());

    // Build HTTP router
    let app = build_router(state, metrics_handle);

    let http_addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    run_http_server(app, http_addr).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let request_timeout = state.request_timeout();

    // API v1 routes
    let api_v1 = Router::new()
        // Consolidation + tiered rates
        .route("/consolidate", post(handlers::consolidate))
        .route("/rates/quote", post(handlers::quote_rate))
        // Standalone package lifecycle
        .route(
            "/packages",
            post(handlers::receive_package).get(handlers::list_packages),
        )
        // Static segment before the {id} routes so it never captures
        .route("/packages/quote", post(handlers::quote_freight))
        .route(
            "/packages/{id}",
            get(handlers::get_package).delete(handlers::delete_package),
        )
        .route("/packages/{id}/status", put(handlers::update_package_status))
        .route("/packages/{id}/forward", post(handlers::forward_package))
        .route("/users/{id}/packages", get(handlers::list_user_packages))
        // Notifications
        .route("/notify", post(handlers::notify_received));

    // Health routes (no timeout - must always respond quickly)
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    // Metrics route (no timeout)
    let metrics_route = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    // Build middleware stack (order matters - outermost first)
    let middleware = ServiceBuilder::new()
        // Request ID propagation (outermost)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        // Tracing with request details
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Request timeout (innermost - closest to handler)
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .nest("/api/v1", api_v1)
        .layer(middleware)
        .merge(health_routes) // Health routes without timeout
        .merge(metrics_route) // Metrics route without timeout
        .with_state(state)
}

async fn run_http_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("HTTP server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let service: IntoMakeServiceWithConnectInfo<Router, SocketAddr> =
        app.into_make_service_with_connect_info();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn setup_metrics() -> anyhow::Result<PrometheusHandle> {
    // Latency buckets for forwarding operations; consolidation does several
    // sequential writes so the tail reaches into seconds
    let latency_buckets = &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.2, 0.5, 1.0, 2.5];

    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            latency_buckets,
        )?
        .set_buckets_for_metric(
            Matcher::Full("forwarding_operation_duration_seconds".to_string()),
            latency_buckets,
        )?;

    let handle = builder.install_recorder()?;

    // Register metrics with descriptions
    metrics::describe_counter!(
        "forwarding_consolidations_total",
        "Total consolidated shipments created"
    );
    metrics::describe_counter!(
        "forwarding_rate_quotes_total",
        "Total rate quotes served by method"
    );
    metrics::describe_counter!(
        "forwarding_parcels_received_total",
        "Total parcels received at the warehouse"
    );
    metrics::describe_counter!(
        "forwarding_parcels_forwarded_total",
        "Total parcels forwarded by method"
    );
    metrics::describe_counter!(
        "forwarding_notifications_sent_total",
        "Total package-received notifications sent"
    );
    metrics::describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request latency in seconds"
    );
    metrics::describe_histogram!(
        "forwarding_operation_duration_seconds",
        "Forwarding operation latency in seconds by operation type"
    );

    Ok(handle)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
