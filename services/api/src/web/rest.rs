//! services/api/src/web/rest.rs
//!
//! Contains the session and health handlers, the error mapping shared by every
//! handler, and the master definition for the OpenAPI specification.

use crate::web::protocol::{HealthResponse, OpenSessionRequest, OpenSessionResponse};
use crate::web::state::AppState;
use crate::web::{patient, protocol, researcher};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use curalink_core::{ForumError, ValidationError};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::OpenApi;
use uuid::Uuid;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        open_session_handler,
        health_handler,
        patient::conditions_handler,
        patient::submit_profile_handler,
        patient::dashboard_handler,
        patient::experts_handler,
        patient::list_favorites_handler,
        patient::add_favorite_handler,
        patient::forum_handler,
        patient::post_question_handler,
        researcher::submit_profile_handler,
        researcher::dashboard_handler,
        researcher::collaborators_handler,
        researcher::list_favorites_handler,
        researcher::add_favorite_handler,
        researcher::list_trials_handler,
        researcher::add_trial_handler,
        researcher::forum_handler,
        researcher::post_topic_handler,
        researcher::reply_handler,
    ),
    components(
        schemas(
            protocol::OpenSessionRequest,
            protocol::OpenSessionResponse,
            protocol::PatientProfileRequest,
            protocol::ResearcherProfileRequest,
            protocol::NewTrialRequest,
            protocol::AddFavoriteRequest,
            protocol::PostQuestionRequest,
            protocol::PostTopicRequest,
            protocol::ReplyRequest,
            protocol::PatientProfileResponse,
            protocol::ResearcherProfileResponse,
            protocol::FavoriteAddedResponse,
            protocol::FavoritesResponse,
            protocol::ConditionsResponse,
            protocol::ExpertsResponse,
            protocol::CollaboratorsResponse,
            protocol::TrialsResponse,
            protocol::ForumResponse,
            protocol::PatientDashboardResponse,
            protocol::ResearcherDashboardResponse,
            protocol::HealthResponse,
        )
    ),
    tags(
        (name = "CuraLink API", description = "Dashboards, recommendations, favorites and forums for patients and researchers.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Shared Error Mapping
//=========================================================================================

pub type HandlerResult<T> = Result<T, (StatusCode, String)>;

pub(crate) fn session_not_found(session_id: Uuid) -> (StatusCode, String) {
    warn!(%session_id, "request for unknown session");
    (
        StatusCode::NOT_FOUND,
        format!("Session {} not found", session_id),
    )
}

pub(crate) fn validation_failed(err: ValidationError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}

pub(crate) fn forum_failed(err: ForumError) -> (StatusCode, String) {
    match err {
        ForumError::IndexOutOfRange { .. } => (StatusCode::NOT_FOUND, err.to_string()),
    }
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Start a new session, or resume one whose id the client kept.
#[utoipa::path(
    post,
    path = "/sessions",
    request_body = OpenSessionRequest,
    responses(
        (status = 201, description = "Session ready", body = OpenSessionResponse)
    )
)]
pub async fn open_session_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<OpenSessionRequest>,
) -> impl IntoResponse {
    let session_id = app_state.open_session(req.session_id).await;
    (StatusCode::CREATED, Json(OpenSessionResponse { session_id }))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = app_state.session_count().await;
    debug!(sessions, "health check");
    Json(HealthResponse {
        status: "ok".to_string(),
        sessions,
        checked_at: chrono::Utc::now(),
    })
}
