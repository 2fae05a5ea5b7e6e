//! services/api/src/web/researcher.rs
//!
//! Handlers behind the researcher onboarding form and dashboard.

use crate::web::protocol::{
    AddFavoriteRequest, CollaboratorsResponse, FavoriteAddedResponse, FavoritesResponse,
    ForumResponse, ListQuery, NewTrialRequest, PostTopicRequest, ReplyRequest,
    ResearcherDashboardResponse, ResearcherProfileRequest, ResearcherProfileResponse,
    TrialsResponse,
};
use crate::web::rest::{forum_failed, session_not_found, validation_failed, HandlerResult};
use crate::web::state::{encode, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use curalink_core::favorites::confirmation;
use curalink_core::{ForumError, ResearcherDashboard, StorageKey, ValidationError};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

fn forum_view(dashboard: &ResearcherDashboard) -> ForumResponse {
    ForumResponse {
        category: None,
        threads: dashboard.forum().to_vec(),
    }
}

/// Submit the researcher onboarding form.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/researcher/profile",
    request_body = ResearcherProfileRequest,
    responses(
        (status = 200, description = "Profile accepted", body = ResearcherProfileResponse),
        (status = 400, description = "A required field is missing"),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn submit_profile_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<ResearcherProfileRequest>,
) -> HandlerResult<impl IntoResponse> {
    let mut session = app_state
        .session(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;
    let (next_route, profile) = session
        .researcher
        .submit_profile(req.into())
        .map_err(validation_failed)?;
    let response = ResearcherProfileResponse {
        profile: profile.clone(),
        next_route,
    };
    let document = encode(StorageKey::ResearcherData, &response.profile);

    info!(%session_id, available = response.profile.available, "researcher profile submitted");
    app_state
        .persist(session_id, StorageKey::ResearcherData, document)
        .await;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/researcher/dashboard",
    responses(
        (status = 200, description = "Dashboard snapshot", body = ResearcherDashboardResponse),
        (status = 404, description = "Unknown session")
    ),
    params(
        ("session_id" = Uuid, Path, description = "The session id."),
        ("q" = Option<String>, Query, description = "Collaborator search text.")
    )
)]
pub async fn dashboard_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<Json<ResearcherDashboardResponse>> {
    app_state
        .with_session(session_id, |s| {
            let dashboard = &s.researcher;
            Json(ResearcherDashboardResponse {
                profile: dashboard.profile().cloned(),
                collaborators: dashboard
                    .collaborators(&query.q)
                    .into_iter()
                    .cloned()
                    .collect(),
                trials: dashboard.trials().to_vec(),
                favorites: dashboard.favorites().to_vec(),
                forum: forum_view(dashboard),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

/// The collaborator directory filtered by name, field or interests.
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/researcher/collaborators",
    responses(
        (status = 200, description = "Matching collaborators", body = CollaboratorsResponse),
        (status = 404, description = "Unknown session")
    ),
    params(
        ("session_id" = Uuid, Path, description = "The session id."),
        ("q" = Option<String>, Query, description = "Search text; empty returns all.")
    )
)]
pub async fn collaborators_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<Json<CollaboratorsResponse>> {
    app_state
        .with_session(session_id, |s| {
            Json(CollaboratorsResponse {
                collaborators: s
                    .researcher
                    .collaborators(&query.q)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/researcher/favorites",
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
                favorites: s.researcher.favorites().to_vec(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

/// Save a collaborator, trial or publication to the researcher's list.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/researcher/favorites",
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
    let entry = session.researcher.add_favorite(req.item).clone();
    let favorites = session.researcher.favorites();
    let document = encode(StorageKey::ResearcherFavorites, favorites);
    let response = FavoriteAddedResponse {
        message: confirmation(&entry),
        total: favorites.len(),
        entry,
    };

    info!(%session_id, kind = response.entry.kind().as_str(), "researcher favorite saved");
    app_state
        .persist(session_id, StorageKey::ResearcherFavorites, document)
        .await;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/researcher/trials",
    responses(
        (status = 200, description = "Managed trials", body = TrialsResponse),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn list_trials_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<TrialsResponse>> {
    app_state
        .with_session(session_id, |s| {
            Json(TrialsResponse {
                trials: s.researcher.trials().to_vec(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

/// Add a trial to the managed list. Title and phase are required.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/researcher/trials",
    request_body = NewTrialRequest,
    responses(
        (status = 201, description = "The list after adding", body = TrialsResponse),
        (status = 400, description = "Title or phase is missing"),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn add_trial_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<NewTrialRequest>,
) -> HandlerResult<impl IntoResponse> {
    let response = app_state
        .with_session(session_id, |s| {
            let added = s.researcher.add_trial(req.into())?;
            info!(%session_id, title = %added.title, "trial added");
            Ok::<_, ValidationError>(TrialsResponse {
                trials: s.researcher.trials().to_vec(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?
        .map_err(validation_failed)?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/researcher/forum",
    responses(
        (status = 200, description = "All researcher threads", body = ForumResponse),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn forum_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<ForumResponse>> {
    app_state
        .with_session(session_id, |s| Json(forum_view(&s.researcher)))
        .await
        .ok_or_else(|| session_not_found(session_id))
}

/// Open a new topic. Blank topics are ignored.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/researcher/forum",
    request_body = PostTopicRequest,
    responses(
        (status = 200, description = "The board after posting", body = ForumResponse),
        (status = 404, description = "Unknown session")
    ),
    params(("session_id" = Uuid, Path, description = "The session id."))
)]
pub async fn post_topic_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<PostTopicRequest>,
) -> HandlerResult<Json<ForumResponse>> {
    app_state
        .with_session(session_id, |s| {
            if s.researcher.post_topic(&req.topic).is_some() {
                info!(%session_id, "topic posted");
            }
            Json(forum_view(&s.researcher))
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

/// Reply to the thread at `index`. Blank replies are ignored.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/researcher/forum/{index}/replies",
    request_body = ReplyRequest,
    responses(
        (status = 200, description = "The board after replying", body = ForumResponse),
        (status = 404, description = "Unknown session or no thread at the index")
    ),
    params(
        ("session_id" = Uuid, Path, description = "The session id."),
        ("index" = usize, Path, description = "Zero-based thread position.")
    )
)]
pub async fn reply_handler(
    State(app_state): State<Arc<AppState>>,
    Path((session_id, index)): Path<(Uuid, usize)>,
    Json(req): Json<ReplyRequest>,
) -> HandlerResult<Json<ForumResponse>> {
    app_state
        .with_session(session_id, |s| {
            if s.researcher.add_reply(index, &req.text)?.is_some() {
                info!(%session_id, index, "reply added");
            }
            Ok::<_, ForumError>(Json(forum_view(&s.researcher)))
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?
        .map_err(forum_failed)
}
