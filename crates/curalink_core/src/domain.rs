//! crates/curalink_core/src/domain.rs
//!
//! Defines the core data structures shared by both dashboards.
//! These structs carry serde derives so the service can persist them, but they
//! know nothing about where or how they are stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Profiles
//=========================================================================================

/// The onboarding profile of a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    /// Free-text description of the condition, the sole recommendation input.
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The onboarding profile of a researcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearcherProfile {
    pub name: String,
    pub specialty: String,
    pub interests: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_gate: Option<String>,
    #[serde(default)]
    pub available: bool,
}

//=========================================================================================
// Catalogue Items
//=========================================================================================

/// A clinical trial. Recommended trials only carry a title and status; trials
/// managed by researchers fill in the remaining fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    pub title: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
}

impl Trial {
    /// A trial with only the fields the recommender fills in.
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
            phase: None,
            description: None,
            eligibility: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expert {
    pub name: String,
    pub specialty: String,
    /// Inactive experts can be saved but not followed or met.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub year: u16,
}

/// A researcher who may be contacted for collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub name: String,
    pub field: String,
    pub interests: String,
    pub publications: u32,
}

/// The fixed set of items the recommender hands back for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub kind: BundleKind,
    pub trials: Vec<Trial>,
    pub experts: Vec<Expert>,
    pub publications: Vec<Publication>,
}

/// Which preset a bundle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleKind {
    Heart,
    Oncology,
    General,
}

//=========================================================================================
// Favorites
//=========================================================================================

/// The origin tag of a saved favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Trial,
    Publication,
    Expert,
    Collaborator,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Trial => "trial",
            FavoriteKind::Publication => "publication",
            FavoriteKind::Expert => "expert",
            FavoriteKind::Collaborator => "collaborator",
        }
    }
}

/// A saved copy of a catalogue item, tagged with where it came from.
///
/// Serialises as the item's own fields plus a `type` field, e.g.
/// `{"type":"trial","title":"...","status":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FavoriteItem {
    Trial(Trial),
    Publication(Publication),
    Expert(Expert),
    Collaborator(Collaborator),
}

impl FavoriteItem {
    pub fn kind(&self) -> FavoriteKind {
        match self {
            FavoriteItem::Trial(_) => FavoriteKind::Trial,
            FavoriteItem::Publication(_) => FavoriteKind::Publication,
            FavoriteItem::Expert(_) => FavoriteKind::Expert,
            FavoriteItem::Collaborator(_) => FavoriteKind::Collaborator,
        }
    }

    /// The title for trials and publications, the name for people.
    pub fn display_label(&self) -> &str {
        match self {
            FavoriteItem::Trial(t) => &t.title,
            FavoriteItem::Publication(p) => &p.title,
            FavoriteItem::Expert(e) => &e.name,
            FavoriteItem::Collaborator(c) => &c.name,
        }
    }
}

impl From<Trial> for FavoriteItem {
    fn from(trial: Trial) -> Self {
        FavoriteItem::Trial(trial)
    }
}

impl From<Publication> for FavoriteItem {
    fn from(publication: Publication) -> Self {
        FavoriteItem::Publication(publication)
    }
}

impl From<Expert> for FavoriteItem {
    fn from(expert: Expert) -> Self {
        FavoriteItem::Expert(expert)
    }
}

impl From<Collaborator> for FavoriteItem {
    fn from(collaborator: Collaborator) -> Self {
        FavoriteItem::Collaborator(collaborator)
    }
}

//=========================================================================================
// Forum
//=========================================================================================

/// The fixed categories of the patient forum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForumCategory {
    #[default]
    #[serde(rename = "Cancer Research")]
    CancerResearch,
    #[serde(rename = "Clinical Trials Insights")]
    ClinicalTrialsInsights,
}

impl ForumCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForumCategory::CancerResearch => "Cancer Research",
            ForumCategory::ClinicalTrialsInsights => "Clinical Trials Insights",
        }
    }
}

/// One discussion: an opening question or topic followed by ordered replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Set on the patient board, absent on the researcher board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ForumCategory>,
    pub posted_at: DateTime<Utc>,
    pub entries: Vec<Entry>,
}

/// A reply within a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub text: String,
}

//=========================================================================================
// Navigation
//=========================================================================================

/// The view routes the core hands back after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "/")]
    Landing,
    #[serde(rename = "/patient-onboarding")]
    PatientOnboarding,
    #[serde(rename = "/researcher-onboarding")]
    ResearcherOnboarding,
    #[serde(rename = "/patient-dashboard")]
    PatientDashboard,
    #[serde(rename = "/researcher-dashboard")]
    ResearcherDashboard,
}

impl Route {
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::PatientOnboarding => "/patient-onboarding",
            Route::ResearcherOnboarding => "/researcher-onboarding",
            Route::PatientDashboard => "/patient-dashboard",
            Route::ResearcherDashboard => "/researcher-dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_serialises_with_type_tag_and_item_fields() {
        let item = FavoriteItem::from(Trial::new("Heart Disease AI Study", "Recruiting"));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "trial");
        assert_eq!(json["title"], "Heart Disease AI Study");
        assert_eq!(json["status"], "Recruiting");
        assert!(json.get("phase").is_none());
    }

    #[test]
    fn favorite_reads_the_flat_shape() {
        let raw = r#"{"name":"Dr. Kavya Mehta","field":"Oncology","interests":"Immunotherapy, Cancer Genomics","publications":12,"type":"collaborator"}"#;
        let item: FavoriteItem = serde_json::from_str(raw).unwrap();

        assert_eq!(item.kind(), FavoriteKind::Collaborator);
        assert_eq!(item.display_label(), "Dr. Kavya Mehta");
    }

    #[test]
    fn forum_category_uses_display_names_on_the_wire() {
        let json = serde_json::to_string(&ForumCategory::ClinicalTrialsInsights).unwrap();
        assert_eq!(json, "\"Clinical Trials Insights\"");
        assert_eq!(ForumCategory::ClinicalTrialsInsights.as_str(), "Clinical Trials Insights");
    }

    #[test]
    fn route_paths_match_serde_names() {
        for route in [
            Route::Landing,
            Route::PatientOnboarding,
            Route::ResearcherOnboarding,
            Route::PatientDashboard,
            Route::ResearcherDashboard,
        ] {
            let json = serde_json::to_string(&route).unwrap();
            assert_eq!(json, format!("\"{}\"", route.as_path()));
        }
    }
}
