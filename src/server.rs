//! HTTP server
//!
//! Builds the router with its middleware stack and runs it until a
//! shutdown signal arrives.

use std::time::Duration;

use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router, ServiceExt,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::handlers::{event_routes, meta, report_routes};
use crate::middleware::{attach_error_detail, enforce_timeout, handle_panic, log_requests};
use crate::state::AppContext;
use crate::utils::errors::Result;

/// The routed application; trailing slashes are trimmed before routing
pub type AppService = NormalizePath<Router>;

/// Assemble every route and middleware around the shared context
pub fn build_router(ctx: AppContext) -> AppService {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let timeout = Duration::from_secs(ctx.settings.server.request_timeout_seconds);

    let router = Router::new()
        .route("/", get(meta::index))
        .route("/health", get(meta::health))
        .nest("/events", event_routes())
        .nest("/reports", report_routes())
        .method_not_allowed_fallback(meta::not_found)
        .fallback(meta::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn_with_state(ctx.clone(), attach_error_detail))
        .layer(from_fn_with_state(timeout, enforce_timeout))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(ctx);

    NormalizePath::trim_trailing_slash(router)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(ctx: AppContext) -> Result<()> {
    let address = ctx.settings.server.bind_address();
    let environment = ctx.settings.server.environment.clone();
    let app = build_router(ctx);

    info!(address = %address, "Binding listener");
    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, environment = %environment, "Server running");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
