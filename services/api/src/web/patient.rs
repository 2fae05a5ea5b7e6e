//! services/api/src/web/patient.rs
//!
//! Handlers behind the patient onboarding form and dashboard.

use crate::web::protocol::{
    AddFavoriteRequest, ConditionsResponse, ExpertsResponse, FavoriteAddedResponse, FavoritesResponse, ForumResponse,
    ListQuery, PatientDashboardResponse, PatientProfileRequest, PatientProfileResponse,
    PostQuestionRequest,
};
use crate::web::rest::{session_not_found, validation_failed, HandlerResult};
use crate::web::state::{encode, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use curalink_core::catalog::COMMON_CONDITIONS;
use curalink_core::favorites::confirmation;
use curalink_core::{ForumCategory, PatientDashboard, StorageKey};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

fn forum_view(dashboard: &PatientDashboard, category: ForumCategory) -> ForumResponse {
    ForumResponse {
        category: Some(category),
        threads: dashboard.forum(category).into_iter().cloned().collect(),
    }
}

/// Common conditions the onboarding form suggests.
#[utoipa::path(
    get,
    path = "/patient/conditions",
    responses(
        (status = 200, description = "Suggested conditions", body = ConditionsResponse)
    )
)]
pub async fn conditions_handler() -> Json<ConditionsResponse> {
    Json(ConditionsResponse {
        conditions: COMMON_CONDITIONS.iter().map(|c| c.to_string()).collect(),
    })
}

/// Submit the patient onboarding form.
///
/// Replaces the stored profile and refreshes the recommendations.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/patient/profile",
    request_body = PatientProfileRequest,
    responses(
        (status = 200, description = "Profile accepted", body = PatientProfileResponse),
        (status = 400, description = "A required field is missing"),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn submit_profile_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<PatientProfileRequest>,
) -> HandlerResult<impl IntoResponse> {
    let mut session = app_state
        .session(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;
    let (next_route, profile) = session
        .patient
        .submit_profile(req.into())
        .map_err(validation_failed)?;
    let response = PatientProfileResponse {
        profile: profile.clone(),
        next_route,
    };
    let document = encode(StorageKey::PatientData, &response.profile);
    let bundle = session.patient.recommendations().kind;

    info!(%session_id, ?bundle, "patient profile submitted");
    app_state
        .persist(session_id, StorageKey::PatientData, document)
        .await;
    Ok(Json(response))
}

/// Everything the patient dashboard renders in one snapshot.
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/patient/dashboard",
    responses(
        (status = 200, description = "Dashboard snapshot", body = PatientDashboardResponse),
        (status = 404, description = "Unknown session")
    ),
    params(
        ("session_id" = Uuid, Path, description = "The session id."),
        ("q" = Option<String>, Query, description = "Expert search text."),
        ("category" = Option<String>, Query, description = "Forum category to show.")
    )
)]
pub async fn dashboard_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<Json<PatientDashboardResponse>> {
    let category = query.category.unwrap_or_default();
    app_state
        .with_session(session_id, |s| {
            let dashboard = &s.patient;
            Json(PatientDashboardResponse {
                profile: dashboard.profile().cloned(),
                recommendations: dashboard.recommendations().clone(),
                experts: dashboard.experts(&query.q).into_iter().cloned().collect(),
                favorites: dashboard.favorites().to_vec(),
                forum: forum_view(dashboard, category),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

/// Recommended experts filtered by name or specialty.
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/patient/experts",
    responses(
        (status = 200, description = "Matching experts", body = ExpertsResponse),
        (status = 404, description = "Unknown session")
    ),
    params(
        ("session_id" = Uuid, Path, description = "The session id."),
        ("q" = Option<String>, Query, description = "Search text; empty returns all.")
    )
)]
pub async fn experts_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<Json<ExpertsResponse>> {
    app_state
        .with_session(session_id, |s| {
            Json(ExpertsResponse {
                experts: s.patient.experts(&query.q).into_iter().cloned().collect(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/patient/favorites",
    responses(
        (status = 200, description = "Saved favorites in insertion order", body = FavoritesResponse),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn list_favorites_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<FavoritesResponse>> {
    app_state
        .with_session(session_id, |s| {
            Json(FavoritesResponse {
                favorites: s.patient.favorites().to_vec(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

/// Save a trial, publication or expert. Saving the same item twice keeps both.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/patient/favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Favorite saved", body = FavoriteAddedResponse),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn add_favorite_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<AddFavoriteRequest>,
) -> HandlerResult<impl IntoResponse> {
    let mut session = app_state
        .session(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;
    let entry = session.patient.add_favorite(req.item).clone();
    let favorites = session.patient.favorites();
    let document = encode(StorageKey::Favorites, favorites);
    let response = FavoriteAddedResponse {
        message: confirmation(&entry),
        total: favorites.len(),
        entry,
    };

    info!(%session_id, kind = response.entry.kind().as_str(), "patient favorite saved");
    app_state
        .persist(session_id, StorageKey::Favorites, document)
        .await;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/patient/forum",
    responses(
        (status = 200, description = "Threads in the category", body = ForumResponse),
        (status = 404, description = "Unknown session")
    ),
    params(
        ("session_id" = Uuid, Path, description = "The session id."),
        ("category" = Option<String>, Query, description = "Defaults to Cancer Research.")
    )
)]
pub async fn forum_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<Json<ForumResponse>> {
    let category = query.category.unwrap_or_default();
    app_state
        .with_session(session_id, |s| Json(forum_view(&s.patient, category)))
        .await
        .ok_or_else(|| session_not_found(session_id))
}

/// Ask a question in a category. Blank questions are ignored.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/patient/forum",
    request_body = PostQuestionRequest,
    responses(
        (status = 200, description = "The category after posting", body = ForumResponse),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn post_question_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<PostQuestionRequest>,
) -> HandlerResult<Json<ForumResponse>> {
    app_state
        .with_session(session_id, |s| {
            if s.patient.post_question(req.category, &req.question).is_some() {
                info!(%session_id, category = req.category.as_str(), "question posted");
            }
            Json(forum_view(&s.patient, req.category))
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}
