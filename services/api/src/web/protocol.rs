//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the browser views and the API.
//! Domain types from `curalink_core` are embedded as-is and documented as
//! opaque objects in the OpenAPI schema.

use curalink_core::{
    Collaborator, Expert, FavoriteItem, ForumCategory, NewTrial, PatientForm, PatientProfile,
    RecommendationBundle, ResearcherForm, ResearcherProfile, Route, Thread, Trial,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//=========================================================================================
// Sessions
//=========================================================================================

#[derive(Deserialize, Default, ToSchema)]
pub struct OpenSessionRequest {
    /// Resume a previously issued session instead of starting a new one.
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct OpenSessionResponse {
    pub session_id: Uuid,
}

//=========================================================================================
// Requests
//=========================================================================================

/// Query parameters shared by the listing endpoints.
#[derive(Deserialize, Default, Debug)]
pub struct ListQuery {
    /// Search text for the expert or collaborator directory.
    #[serde(default)]
    pub q: String,
    /// Patient forum category to show.
    #[serde(default)]
    pub category: Option<ForumCategory>,
}

/// The patient onboarding form. Empty strings count as missing.
#[derive(Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct PatientProfileRequest {
    pub name: String,
    pub condition: String,
    pub location: String,
}

impl From<PatientProfileRequest> for PatientForm {
    fn from(req: PatientProfileRequest) -> Self {
        PatientForm {
            name: req.name,
            condition: req.condition,
            location: req.location,
        }
    }
}

/// The researcher onboarding form. Empty strings count as missing.
#[derive(Deserialize, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ResearcherProfileRequest {
    pub name: String,
    pub specialty: String,
    pub interests: String,
    pub orcid: String,
    pub research_gate: String,
    pub available: bool,
}

impl From<ResearcherProfileRequest> for ResearcherForm {
    fn from(req: ResearcherProfileRequest) -> Self {
        ResearcherForm {
            name: req.name,
            specialty: req.specialty,
            interests: req.interests,
            orcid: req.orcid,
            research_gate: req.research_gate,
            available: req.available,
        }
    }
}

#[derive(Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct NewTrialRequest {
    pub title: String,
    pub phase: String,
    pub status: String,
    pub description: String,
    pub eligibility: String,
}

impl From<NewTrialRequest> for NewTrial {
    fn from(req: NewTrialRequest) -> Self {
        NewTrial {
            title: req.title,
            phase: req.phase,
            status: req.status,
            description: req.description,
            eligibility: req.eligibility,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct AddFavoriteRequest {
    /// The item's own fields plus a `type` tag.
    #[schema(value_type = Object)]
    pub item: FavoriteItem,
}

#[derive(Deserialize, ToSchema)]
pub struct PostQuestionRequest {
    #[serde(default)]
    #[schema(value_type = String)]
    pub category: ForumCategory,
    pub question: String,
}

#[derive(Deserialize, ToSchema)]
pub struct PostTopicRequest {
    pub topic: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ReplyRequest {
    pub text: String,
}

//=========================================================================================
// Responses
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct PatientProfileResponse {
    #[schema(value_type = Object)]
    pub profile: PatientProfile,
    #[schema(value_type = String)]
    pub next_route: Route,
}

#[derive(Serialize, ToSchema)]
pub struct ResearcherProfileResponse {
    #[schema(value_type = Object)]
    pub profile: ResearcherProfile,
    #[schema(value_type = String)]
    pub next_route: Route,
}

#[derive(Serialize, ToSchema)]
pub struct FavoriteAddedResponse {
    /// The acknowledgement to show the user.
    pub message: String,
    #[schema(value_type = Object)]
    pub entry: FavoriteItem,
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct FavoritesResponse {
    #[schema(value_type = Vec<Object>)]
    pub favorites: Vec<FavoriteItem>,
}

/// Suggestions offered beside the condition field of the onboarding form.
#[derive(Serialize, ToSchema)]
pub struct ConditionsResponse {
    pub conditions: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ExpertsResponse {
    #[schema(value_type = Vec<Object>)]
    pub experts: Vec<Expert>,
}

#[derive(Serialize, ToSchema)]
pub struct CollaboratorsResponse {
    #[schema(value_type = Vec<Object>)]
    pub collaborators: Vec<Collaborator>,
}

#[derive(Serialize, ToSchema)]
pub struct TrialsResponse {
    #[schema(value_type = Vec<Object>)]
    pub trials: Vec<Trial>,
}

#[derive(Serialize, ToSchema)]
pub struct ForumResponse {
    /// Absent for the researcher board.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub category: Option<ForumCategory>,
    #[schema(value_type = Vec<Object>)]
    pub threads: Vec<Thread>,
}

#[derive(Serialize, ToSchema)]
pub struct PatientDashboardResponse {
    #[schema(value_type = Option<Object>)]
    pub profile: Option<PatientProfile>,
    #[schema(value_type = Object)]
    pub recommendations: RecommendationBundle,
    /// Recommended experts after applying the search text.
    #[schema(value_type = Vec<Object>)]
    pub experts: Vec<Expert>,
    #[schema(value_type = Vec<Object>)]
    pub favorites: Vec<FavoriteItem>,
    pub forum: ForumResponse,
}

#[derive(Serialize, ToSchema)]
pub struct ResearcherDashboardResponse {
    #[schema(value_type = Option<Object>)]
    pub profile: Option<ResearcherProfile>,
    #[schema(value_type = Vec<Object>)]
    pub collaborators: Vec<Collaborator>,
    #[schema(value_type = Vec<Object>)]
    pub trials: Vec<Trial>,
    #[schema(value_type = Vec<Object>)]
    pub favorites: Vec<FavoriteItem>,
    pub forum: ForumResponse,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}
