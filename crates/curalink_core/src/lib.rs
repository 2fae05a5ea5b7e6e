pub mod catalog;
pub mod dashboard;
pub mod domain;
pub mod favorites;
pub mod forum;
pub mod ports;
pub mod profile;
pub mod recommender;
pub mod search;
pub mod trials;

pub use dashboard::{PatientDashboard, ResearcherDashboard};
pub use domain::{
    BundleKind, Collaborator, Entry, Expert, FavoriteItem, FavoriteKind, ForumCategory,
    PatientProfile, Publication, RecommendationBundle, ResearcherProfile, Route, Thread, Trial,
};
pub use forum::ForumError;
pub use ports::{PortError, PortResult, StorageKey, StorageService};
pub use profile::{PatientForm, ResearcherForm, ValidationError};
pub use trials::NewTrial;
