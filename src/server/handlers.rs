// src/server/handlers.rs
// HTTP handlers and the ChatError -> status mapping

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::AppState;
use crate::admin::{AnalyticDraft, CourseDraft, UserDraft};
use crate::chat::provider::ProviderId;
use crate::config::CONFIG;
use crate::error::ChatError;

/// One JSON error shape everywhere. `MissingCredential` additionally tells
/// the frontend to open the settings panel.
fn chat_error_response(err: ChatError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        ChatError::MissingCredential(_) => StatusCode::CONFLICT,
        ChatError::EmptyCredential => StatusCode::BAD_REQUEST,
        ChatError::Busy => StatusCode::TOO_MANY_REQUESTS,
        ChatError::Transport { .. } => StatusCode::BAD_GATEWAY,
        ChatError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let mut body = json!({ "error": err.to_string() });
    if matches!(err, ChatError::MissingCredential(_)) {
        body["action"] = json!("open_settings");
    }
    (status, Json(body))
}

// ============================================================================
// Status
// ============================================================================

/// Health check and status endpoint
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    let ui = state.dispatcher.ui_state().await;
    Json(json!({
        "status": "ok",
        "active_provider": ui.active_provider,
        "pending_request": ui.pending_request,
        "openai_model": CONFIG.openai_model,
        "deepseek_model": CONFIG.deepseek_model,
    }))
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub message: String,
}

pub async fn chat_send_handler(
    State(state): State<AppState>,
    Json(req): Json<SendRequest>,
) -> Response {
    match state.dispatcher.send(&req.message).await {
        Ok(Some(reply)) => (StatusCode::OK, Json(json!({ "reply": reply }))).into_response(),
        // Empty input is a no-op, not an error
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => chat_error_response(err).into_response(),
    }
}

pub async fn chat_messages_handler(State(state): State<AppState>) -> Json<Value> {
    let messages = state.dispatcher.history().await;
    Json(json!({ "messages": messages }))
}

pub async fn chat_session_handler(State(state): State<AppState>) -> Response {
    Json(state.dispatcher.ui_state().await).into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetOp {
    Open,
    Close,
    ToggleMinimized,
}

#[derive(Debug, Deserialize)]
pub struct WidgetRequest {
    pub op: WidgetOp,
}

pub async fn chat_widget_handler(
    State(state): State<AppState>,
    Json(req): Json<WidgetRequest>,
) -> Response {
    let ui = state
        .dispatcher
        .with_widget(|widget| match req.op {
            WidgetOp::Open => widget.open(),
            WidgetOp::Close => widget.close(),
            WidgetOp::ToggleMinimized => widget.toggle_minimized(),
        })
        .await;
    Json(ui).into_response()
}

// ============================================================================
// Providers
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectProviderRequest {
    pub provider: ProviderId,
}

/// Activate a provider and echo its stored key for the settings field.
pub async fn select_provider_handler(
    State(state): State<AppState>,
    Json(req): Json<SelectProviderRequest>,
) -> Json<Value> {
    let api_key = state.dispatcher.select_provider(req.provider).await;
    Json(json!({ "provider": req.provider, "api_key": api_key }))
}

#[derive(Debug, Deserialize)]
pub struct SaveCredentialRequest {
    pub provider: ProviderId,
    pub api_key: String,
}

pub async fn save_credential_handler(
    State(state): State<AppState>,
    Json(req): Json<SaveCredentialRequest>,
) -> Response {
    match state
        .dispatcher
        .save_credential(req.provider, &req.api_key)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => chat_error_response(err).into_response(),
    }
}

// ============================================================================
// Scan
// ============================================================================

pub async fn scan_handler(State(state): State<AppState>) -> Response {
    Json(state.classifier.analyze()).into_response()
}

// ============================================================================
// Admin
// ============================================================================

fn not_found(entity: &str, id: i64) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{entity} {id} not found") })),
    )
}

pub async fn list_users_handler(State(state): State<AppState>) -> Response {
    Json(state.admin.list_users().await).into_response()
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> Response {
    let user = state.admin.create_user(draft).await;
    (StatusCode::CREATED, Json(user)).into_response()
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<UserDraft>,
) -> Response {
    match state.admin.update_user(id, draft).await {
        Some(user) => Json(user).into_response(),
        None => not_found("user", id).into_response(),
    }
}

pub async fn delete_user_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    if state.admin.delete_user(id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("user", id).into_response()
    }
}

pub async fn list_courses_handler(State(state): State<AppState>) -> Response {
    Json(state.admin.list_courses().await).into_response()
}

pub async fn create_course_handler(
    State(state): State<AppState>,
    Json(draft): Json<CourseDraft>,
) -> Response {
    let course = state.admin.create_course(draft).await;
    (StatusCode::CREATED, Json(course)).into_response()
}

pub async fn update_course_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<CourseDraft>,
) -> Response {
    match state.admin.update_course(id, draft).await {
        Some(course) => Json(course).into_response(),
        None => not_found("course", id).into_response(),
    }
}

pub async fn delete_course_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    if state.admin.delete_course(id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("course", id).into_response()
    }
}

pub async fn list_analytics_handler(State(state): State<AppState>) -> Response {
    Json(state.admin.list_analytics().await).into_response()
}

pub async fn create_analytic_handler(
    State(state): State<AppState>,
    Json(draft): Json<AnalyticDraft>,
) -> Response {
    let analytic = state.admin.create_analytic(draft).await;
    (StatusCode::CREATED, Json(analytic)).into_response()
}

pub async fn update_analytic_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<AnalyticDraft>,
) -> Response {
    match state.admin.update_analytic(id, draft).await {
        Some(analytic) => Json(analytic).into_response(),
        None => not_found("analytic", id).into_response(),
    }
}

pub async fn delete_analytic_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    if state.admin.delete_analytic(id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("analytic", id).into_response()
    }
}
