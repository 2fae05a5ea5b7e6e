pub mod patient;
pub mod protocol;
pub mod researcher;
pub mod rest;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::web::state::AppState;

pub use rest::{health_handler, open_session_handler};

/// Builds the API router. CORS and the Swagger UI are layered on by the binary.
pub fn router(app_state: Arc<AppState>) -> Router {
    let patient_routes = Router::new()
        .route("/profile", post(patient::submit_profile_handler))
        .route("/dashboard", get(patient::dashboard_handler))
        .route("/experts", get(patient::experts_handler))
        .route(
            "/favorites",
            get(patient::list_favorites_handler).post(patient::add_favorite_handler),
        )
        .route(
            "/forum",
            get(patient::forum_handler).post(patient::post_question_handler),
        );

    let researcher_routes = Router::new()
        .route("/profile", post(researcher::submit_profile_handler))
        .route("/dashboard", get(researcher::dashboard_handler))
        .route("/collaborators", get(researcher::collaborators_handler))
        .route(
            "/favorites",
            get(researcher::list_favorites_handler).post(researcher::add_favorite_handler),
        )
        .route(
            "/trials",
            get(researcher::list_trials_handler).post(researcher::add_trial_handler),
        )
        .route(
            "/forum",
            get(researcher::forum_handler).post(researcher::post_topic_handler),
        )
        .route("/forum/{index}/replies", post(researcher::reply_handler));

    Router::new()
        .route("/health", get(health_handler))
        .route("/sessions", post(open_session_handler))
        .route("/patient/conditions", get(patient::conditions_handler))
        .nest("/sessions/{session_id}/patient", patient_routes)
        .nest("/sessions/{session_id}/researcher", researcher_routes)
        .with_state(app_state)
}
