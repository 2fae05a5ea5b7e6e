//! crates/curalink_core/src/trials.rs
//!
//! The researcher's list of managed clinical trials.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::domain::Trial;
use crate::profile::{optional, require, ValidationResult};

/// The "Add New Trial" form. Only title and phase are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTrial {
    pub title: String,
    pub phase: String,
    pub status: String,
    pub description: String,
    pub eligibility: String,
}

impl NewTrial {
    fn into_trial(self) -> ValidationResult<Trial> {
        require("title", &self.title)?;
        require("phase", &self.phase)?;
        Ok(Trial {
            title: self.title,
            status: self.status,
            phase: Some(self.phase),
            description: optional(self.description),
            eligibility: optional(self.eligibility),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrialRegistry {
    trials: Vec<Trial>,
}

impl TrialRegistry {
    pub fn seeded() -> Self {
        Self {
            trials: catalog::researcher_trials(),
        }
    }

    pub fn add(&mut self, new_trial: NewTrial) -> ValidationResult<&Trial> {
        let trial = new_trial.into_trial()?;
        self.trials.push(trial);
        let last = self.trials.len() - 1;
        Ok(&self.trials[last])
    }

    pub fn list(&self) -> &[Trial] {
        &self.trials
    }

    pub fn get(&self, index: usize) -> Option<&Trial> {
        self.trials.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ValidationError;

    #[test]
    fn trial_without_phase_is_rejected() {
        let mut registry = TrialRegistry::seeded();
        let err = registry
            .add(NewTrial {
                title: "CAR-T Follow-up".to_string(),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, ValidationError::MissingField("phase"));
        assert_eq!(registry.list().len(), 2);
    }

    #[test]
    fn added_trial_goes_last_with_its_details() {
        let mut registry = TrialRegistry::seeded();
        registry
            .add(NewTrial {
                title: "CAR-T Follow-up".to_string(),
                phase: "Phase II".to_string(),
                status: "Recruiting".to_string(),
                description: String::new(),
                eligibility: "Adults".to_string(),
            })
            .unwrap();

        let last = registry.list().last().unwrap();
        assert_eq!(last.title, "CAR-T Follow-up");
        assert_eq!(last.phase.as_deref(), Some("Phase II"));
        assert_eq!(last.eligibility.as_deref(), Some("Adults"));
        assert_eq!(last.description, None);
        assert_eq!(registry.get(0).unwrap().title, "Gene Therapy in Glioma");
    }
}
