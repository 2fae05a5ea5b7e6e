//! crates/curalink_core/src/recommender.rs
//!
//! Maps a free-text descriptor to one of three fixed recommendation bundles.

use crate::catalog;
use crate::domain::{BundleKind, RecommendationBundle};

/// Keyword rules, checked in order. The first rule with a matching keyword wins.
const RULES: &[(&[&str], BundleKind)] = &[
    (&["heart"], BundleKind::Heart),
    (&["cancer", "glioma"], BundleKind::Oncology),
];

/// Picks the preset for a descriptor without building it.
pub fn classify(descriptor: &str) -> BundleKind {
    let descriptor = descriptor.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| descriptor.contains(k)))
        .map(|(_, kind)| *kind)
        .unwrap_or(BundleKind::General)
}

/// Returns the bundle for a descriptor. Total over all strings, including "".
pub fn recommend(descriptor: &str) -> RecommendationBundle {
    catalog::bundle(classify(descriptor))
}

/// Caches the bundle for the last descriptor seen so recomputation only
/// happens when the descriptor actually changes.
#[derive(Debug, Clone)]
pub struct Recommendations {
    descriptor: String,
    bundle: RecommendationBundle,
}

impl Recommendations {
    pub fn new(descriptor: &str) -> Self {
        Self {
            descriptor: descriptor.to_string(),
            bundle: recommend(descriptor),
        }
    }

    /// Recomputes the bundle if `descriptor` differs from the cached one.
    /// Returns `true` when a recomputation happened.
    pub fn sync(&mut self, descriptor: &str) -> bool {
        if self.descriptor == descriptor {
            return false;
        }
        self.descriptor = descriptor.to_string();
        self.bundle = recommend(descriptor);
        true
    }

    pub fn bundle(&self) -> &RecommendationBundle {
        &self.bundle
    }
}

impl Default for Recommendations {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_titles(bundle: &RecommendationBundle) -> Vec<&str> {
        bundle.trials.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn heart_wins_regardless_of_case_or_surrounding_text() {
        for descriptor in ["heart", "Heart Disease", "my HEART hurts", "heart and cancer"] {
            assert_eq!(recommend(descriptor).kind, BundleKind::Heart, "{descriptor}");
        }
    }

    #[test]
    fn cancer_or_glioma_without_heart_is_oncology() {
        for descriptor in ["Lung Cancer", "glioma", "Brain CANCER", "I have Glioma"] {
            assert_eq!(recommend(descriptor).kind, BundleKind::Oncology, "{descriptor}");
        }
    }

    #[test]
    fn anything_else_is_general() {
        for descriptor in ["", "   ", "Diabetes", "hear", "cancr"] {
            assert_eq!(recommend(descriptor).kind, BundleKind::General, "{descriptor:?}");
        }
    }

    #[test]
    fn glioma_patient_gets_the_two_oncology_trials() {
        let bundle = recommend("I have Glioma");
        assert_eq!(
            trial_titles(&bundle),
            ["Glioma Immunotherapy Study", "Lung Cancer Drug Phase II"]
        );
    }

    #[test]
    fn bundles_are_never_empty() {
        for kind in [BundleKind::Heart, BundleKind::Oncology, BundleKind::General] {
            let bundle = catalog::bundle(kind);
            assert!(!bundle.trials.is_empty());
            assert!(!bundle.experts.is_empty());
            assert!(!bundle.publications.is_empty());
        }
    }

    #[test]
    fn cache_only_recomputes_on_change() {
        let mut recs = Recommendations::default();
        assert_eq!(recs.bundle().kind, BundleKind::General);

        assert!(!recs.sync(""));
        assert!(recs.sync("Heart Disease"));
        assert_eq!(recs.bundle().kind, BundleKind::Heart);
        assert!(!recs.sync("Heart Disease"));
        assert!(recs.sync("Glioma"));
        assert_eq!(recs.bundle().kind, BundleKind::Oncology);
    }
}
