//! crates/curalink_core/src/profile.rs
//!
//! Onboarding forms and the store that keeps the resulting profile.

use serde::{Deserialize, Serialize};

use crate::domain::{PatientProfile, ResearcherProfile, Route};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fails with `MissingField(field)` when `value` is empty.
pub(crate) fn require(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Empty text is stored as absent.
pub(crate) fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

//=========================================================================================
// Forms
//=========================================================================================

/// A submitted onboarding form that can be turned into a profile.
pub trait ProfileForm {
    type Profile;

    /// Where the view goes once the form has been accepted.
    const NEXT_ROUTE: Route;

    fn into_profile(self) -> ValidationResult<Self::Profile>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    pub name: String,
    pub condition: String,
    pub location: String,
}

impl ProfileForm for PatientForm {
    type Profile = PatientProfile;
    const NEXT_ROUTE: Route = Route::PatientDashboard;

    fn into_profile(self) -> ValidationResult<PatientProfile> {
        require("name", &self.name)?;
        require("condition", &self.condition)?;
        Ok(PatientProfile {
            name: self.name,
            condition: self.condition,
            location: optional(self.location),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResearcherForm {
    pub name: String,
    pub specialty: String,
    pub interests: String,
    pub orcid: String,
    pub research_gate: String,
    pub available: bool,
}

impl ProfileForm for ResearcherForm {
    type Profile = ResearcherProfile;
    const NEXT_ROUTE: Route = Route::ResearcherDashboard;

    fn into_profile(self) -> ValidationResult<ResearcherProfile> {
        require("name", &self.name)?;
        require("specialty", &self.specialty)?;
        require("interests", &self.interests)?;
        Ok(ResearcherProfile {
            name: self.name,
            specialty: self.specialty,
            interests: self.interests,
            orcid: optional(self.orcid),
            research_gate: optional(self.research_gate),
            available: self.available,
        })
    }
}

//=========================================================================================
// Store
//=========================================================================================

/// The profile most recently accepted for a session, if any.
#[derive(Debug, Clone)]
pub struct ProfileStore<P> {
    current: Option<P>,
}

impl<P> Default for ProfileStore<P> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<P> ProfileStore<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Option<P>) -> Self {
        Self { current: profile }
    }

    /// Validates `form` and, on success, replaces the stored profile wholesale.
    /// A rejected form leaves the previous profile in place.
    pub fn submit<F>(&mut self, form: F) -> ValidationResult<(Route, &P)>
    where
        F: ProfileForm<Profile = P>,
    {
        let profile = form.into_profile()?;
        Ok((F::NEXT_ROUTE, self.current.insert(profile)))
    }

    pub fn current(&self) -> Option<&P> {
        self.current.as_ref()
    }
}
