//! HTTP server for the CropGuard frontend
//!
//! Exposes the widget backend via REST endpoints:
//! - GET  /api/status - Health check
//! - POST /api/chat/send - Dispatch one user message
//! - GET  /api/chat/messages - Full conversation history
//! - GET  /api/chat/session - Widget/session state snapshot
//! - POST /api/chat/widget - Widget open/close/minimize transitions
//! - PUT  /api/providers/active - Select the active provider
//! - PUT  /api/providers/key - Save a provider credential
//! - POST /api/scan - Run the leaf scan classifier
//! - CRUD under /api/admin/{users,courses,analytics}

mod handlers;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::admin::AdminRegistry;
use crate::chat::Dispatcher;
use crate::config::CONFIG;
use crate::scan::LeafClassifier;

// ============================================================================
// Server State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub classifier: Arc<dyn LeafClassifier>,
    pub admin: Arc<AdminRegistry>,
}

// ============================================================================
// Routes
// ============================================================================

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            CONFIG
                .cors_origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("*")),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/status", get(handlers::status_handler))
        .route("/api/chat/send", post(handlers::chat_send_handler))
        .route("/api/chat/messages", get(handlers::chat_messages_handler))
        .route("/api/chat/session", get(handlers::chat_session_handler))
        .route("/api/chat/widget", post(handlers::chat_widget_handler))
        .route(
            "/api/providers/active",
            put(handlers::select_provider_handler),
        )
        .route("/api/providers/key", put(handlers::save_credential_handler))
        .route("/api/scan", post(handlers::scan_handler))
        .route(
            "/api/admin/users",
            get(handlers::list_users_handler).post(handlers::create_user_handler),
        )
        .route(
            "/api/admin/users/{id}",
            put(handlers::update_user_handler).delete(handlers::delete_user_handler),
        )
        .route(
            "/api/admin/courses",
            get(handlers::list_courses_handler).post(handlers::create_course_handler),
        )
        .route(
            "/api/admin/courses/{id}",
            put(handlers::update_course_handler).delete(handlers::delete_course_handler),
        )
        .route(
            "/api/admin/analytics",
            get(handlers::list_analytics_handler).post(handlers::create_analytic_handler),
        )
        .route(
            "/api/admin/analytics/{id}",
            put(handlers::update_analytic_handler).delete(handlers::delete_analytic_handler),
        )
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);
    let bind_address = CONFIG.bind_address();

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
