//! crates/curalink_core/src/dashboard.rs
//!
//! The per-session state behind each dashboard. Each struct owns its stores
//! outright; callers hold one instance per session and pass it by reference.

use crate::catalog;
use crate::domain::{
    Collaborator, Expert, FavoriteItem, ForumCategory, PatientProfile, RecommendationBundle,
    ResearcherProfile, Route, Thread, Trial,
};
use crate::favorites::FavoritesStore;
use crate::forum::{ForumError, ForumStore};
use crate::profile::{PatientForm, ProfileStore, ResearcherForm, ValidationResult};
use crate::recommender::Recommendations;
use crate::search;
use crate::trials::{NewTrial, TrialRegistry};

//=========================================================================================
// Patient Dashboard
//=========================================================================================

#[derive(Debug, Clone)]
pub struct PatientDashboard {
    profile: ProfileStore<PatientProfile>,
    recommendations: Recommendations,
    favorites: FavoritesStore,
    forum: ForumStore,
}

impl Default for PatientDashboard {
    fn default() -> Self {
        Self::restore(None, Vec::new())
    }
}

impl PatientDashboard {
    /// Rebuilds the dashboard from whatever was persisted for the session.
    pub fn restore(profile: Option<PatientProfile>, favorites: Vec<FavoriteItem>) -> Self {
        let descriptor = profile.as_ref().map(|p| p.condition.as_str()).unwrap_or("");
        let recommendations = Recommendations::new(descriptor);
        Self {
            profile: ProfileStore::with_profile(profile),
            recommendations,
            favorites: FavoritesStore::from_entries(favorites),
            forum: ForumStore::seeded_patient_board(),
        }
    }

    /// Accepts an onboarding form and refreshes the recommendations if the
    /// condition changed.
    pub fn submit_profile(&mut self, form: PatientForm) -> ValidationResult<(Route, &PatientProfile)> {
        let (route, profile) = self.profile.submit(form)?;
        self.recommendations.sync(&profile.condition);
        Ok((route, profile))
    }

    pub fn profile(&self) -> Option<&PatientProfile> {
        self.profile.current()
    }

    pub fn recommendations(&self) -> &RecommendationBundle {
        self.recommendations.bundle()
    }

    /// The recommended experts matching `query` on name or specialty.
    pub fn experts(&self, query: &str) -> Vec<&Expert> {
        search::search(&self.recommendations.bundle().experts, query)
    }

    pub fn add_favorite(&mut self, item: impl Into<FavoriteItem>) -> &FavoriteItem {
        self.favorites.add(item)
    }

    pub fn favorites(&self) -> &[FavoriteItem] {
        self.favorites.list()
    }

    pub fn post_question(&mut self, category: ForumCategory, question: &str) -> Option<&Thread> {
        self.forum.post_question(category, question)
    }

    pub fn forum(&self, category: ForumCategory) -> Vec<&Thread> {
        self.forum.threads_in(category)
    }
}

//=========================================================================================
// Researcher Dashboard
//=========================================================================================

#[derive(Debug, Clone)]
pub struct ResearcherDashboard {
    profile: ProfileStore<ResearcherProfile>,
    collaborators: Vec<Collaborator>,
    trials: TrialRegistry,
    favorites: FavoritesStore,
    forum: ForumStore,
}

impl Default for ResearcherDashboard {
    fn default() -> Self {
        Self::restore(None, Vec::new())
    }
}

impl ResearcherDashboard {
    pub fn restore(profile: Option<ResearcherProfile>, favorites: Vec<FavoriteItem>) -> Self {
        Self {
            profile: ProfileStore::with_profile(profile),
            collaborators: catalog::collaborators(),
            trials: TrialRegistry::seeded(),
            favorites: FavoritesStore::from_entries(favorites),
            forum: ForumStore::seeded_researcher_board(),
        }
    }

    pub fn submit_profile(
        &mut self,
        form: ResearcherForm,
    ) -> ValidationResult<(Route, &ResearcherProfile)> {
        self.profile.submit(form)
    }

    pub fn profile(&self) -> Option<&ResearcherProfile> {
        self.profile.current()
    }

    /// Collaborators matching `query` on name, field or interests.
    pub fn collaborators(&self, query: &str) -> Vec<&Collaborator> {
        search::search(&self.collaborators, query)
    }

    pub fn add_trial(&mut self, new_trial: NewTrial) -> ValidationResult<&Trial> {
        self.trials.add(new_trial)
    }

    pub fn trials(&self) -> &[Trial] {
        self.trials.list()
    }

    pub fn add_favorite(&mut self, item: impl Into<FavoriteItem>) -> &FavoriteItem {
        self.favorites.add(item)
    }

    pub fn favorites(&self) -> &[FavoriteItem] {
        self.favorites.list()
    }

    /// Opens a topic authored by the current researcher.
    pub fn post_topic(&mut self, topic: &str) -> Option<&Thread> {
        let author = self.profile.current().map(|p| p.name.clone());
        self.forum.post_topic(topic, author.as_deref())
    }

    pub fn add_reply(&mut self, index: usize, text: &str) -> Result<Option<&Thread>, ForumError> {
        self.forum.add_reply(index, None, text)
    }

    pub fn forum(&self) -> &[Thread] {
        self.forum.threads()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BundleKind, FavoriteKind};

    #[test]
    fn glioma_scenario_end_to_end() {
        let mut dashboard = PatientDashboard::default();
        assert_eq!(dashboard.recommendations().kind, BundleKind::General);

        let (route, profile) = dashboard
            .submit_profile(PatientForm {
                name: "Asha".to_string(),
                condition: "I have Glioma".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(route, Route::PatientDashboard);
        assert_eq!(profile.name, "Asha");

        let titles: Vec<&str> = dashboard
            .recommendations()
            .trials
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, ["Glioma Immunotherapy Study", "Lung Cancer Drug Phase II"]);
    }

    #[test]
    fn rejected_resubmission_keeps_recommendations() {
        let mut dashboard = PatientDashboard::restore(
            Some(PatientProfile {
                name: "Asha".to_string(),
                condition: "Heart Disease".to_string(),
                location: None,
            }),
            Vec::new(),
        );
        assert_eq!(dashboard.recommendations().kind, BundleKind::Heart);

        assert!(dashboard.submit_profile(PatientForm::default()).is_err());
        assert_eq!(dashboard.recommendations().kind, BundleKind::Heart);

        dashboard
            .submit_profile(PatientForm {
                name: "Asha".to_string(),
                condition: "Lung Cancer".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(dashboard.recommendations().kind, BundleKind::Oncology);
    }

    #[test]
    fn expert_search_runs_over_the_current_bundle() {
        let dashboard = PatientDashboard::default();
        let hits = dashboard.experts("internal");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dr. Rahul Sen");
        assert_eq!(dashboard.experts("").len(), 2);
    }

    #[test]
    fn saving_a_recommended_trial() {
        let mut dashboard = PatientDashboard::default();
        let trial = dashboard.recommendations().trials[0].clone();
        dashboard.add_favorite(trial.clone());
        dashboard.add_favorite(trial);

        assert_eq!(dashboard.favorites().len(), 2);
        assert!(dashboard
            .favorites()
            .iter()
            .all(|f| f.kind() == FavoriteKind::Trial));
    }

    #[test]
    fn researcher_topics_are_authored_by_the_profile() {
        let mut dashboard = ResearcherDashboard::default();
        dashboard
            .submit_profile(ResearcherForm {
                name: "Rahul Menon".to_string(),
                specialty: "AI in Medicine".to_string(),
                interests: "Clinical AI".to_string(),
                ..Default::default()
            })
            .unwrap();

        let topic = dashboard.post_topic("Federated learning for EHRs").unwrap();
        assert_eq!(topic.author.as_deref(), Some("Rahul Menon"));
        assert_eq!(dashboard.forum().len(), 2);
    }

    #[test]
    fn researcher_reply_scenario() {
        let mut dashboard = ResearcherDashboard::default();
        dashboard.add_reply(0, "Interesting!").unwrap();
        assert_eq!(dashboard.forum()[0].entries[1].text, "Interesting!");

        assert!(matches!(
            dashboard.add_reply(5, "x"),
            Err(ForumError::IndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn collaborators_and_favorites() {
        let mut dashboard = ResearcherDashboard::default();
        let found: Vec<Collaborator> = dashboard
            .collaborators("predictive")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(found.len(), 1);

        dashboard.add_favorite(found[0].clone());
        assert_eq!(dashboard.favorites()[0].display_label(), "Dr. Rahul Menon");
        assert_eq!(dashboard.favorites()[0].kind(), FavoriteKind::Collaborator);
    }
}
