//! crates/curalink_core/src/catalog.rs
//!
//! The pre-authored mock data both dashboards start from.

use crate::domain::{
    BundleKind, Collaborator, Entry, Expert, ForumCategory, Publication, RecommendationBundle,
    Trial,
};

fn expert(name: &str, specialty: &str, active: bool) -> Expert {
    Expert {
        name: name.to_string(),
        specialty: specialty.to_string(),
        active,
    }
}

fn publication(title: &str, year: u16) -> Publication {
    Publication {
        title: title.to_string(),
        year,
    }
}

/// Builds the preset bundle for `kind`.
pub fn bundle(kind: BundleKind) -> RecommendationBundle {
    let (trials, experts, publications) = match kind {
        BundleKind::Heart => (
            vec![
                Trial::new("Heart Disease AI Study", "Recruiting"),
                Trial::new("Cardiology Clinical Trial", "Ongoing"),
            ],
            vec![
                expert("Dr. Meena Patel", "Cardiology", true),
                expert("Dr. Ramesh Iyer", "Cardiovascular Medicine", false),
            ],
            vec![
                publication("AI-Powered Heart Disease Detection", 2024),
                publication("Advances in Cardiac Imaging", 2023),
            ],
        ),
        BundleKind::Oncology => (
            vec![
                Trial::new("Glioma Immunotherapy Study", "Recruiting"),
                Trial::new("Lung Cancer Drug Phase II", "Completed"),
            ],
            vec![
                expert("Dr. Priya Sharma", "Oncology", true),
                expert("Dr. Arjun Rao", "Neurology", false),
            ],
            vec![
                publication("AI in Oncology: Next-Gen Cancer Care", 2024),
                publication("Brain Tumor Research: A Deep Dive", 2023),
            ],
        ),
        BundleKind::General => (
            vec![
                Trial::new("General Wellness Study", "Recruiting"),
                Trial::new("Nutrition and Health Trial", "Completed"),
            ],
            vec![
                expert("Dr. Sneha Verma", "General Medicine", true),
                expert("Dr. Rahul Sen", "Internal Medicine", true),
            ],
            vec![
                publication("AI in Preventive Healthcare", 2024),
                publication("Modern Health Research Overview", 2023),
            ],
        ),
    };

    RecommendationBundle {
        kind,
        trials,
        experts,
        publications,
    }
}

/// Common conditions offered on the patient onboarding form.
pub const COMMON_CONDITIONS: [&str; 5] = [
    "Brain Cancer",
    "Glioma",
    "Lung Cancer",
    "Diabetes",
    "Heart Disease",
];

pub fn collaborators() -> Vec<Collaborator> {
    [
        ("Dr. Kavya Mehta", "Oncology", "Immunotherapy, Cancer Genomics", 12),
        ("Dr. Rahul Menon", "AI in Medicine", "Clinical AI, Predictive Diagnostics", 8),
        ("Dr. Sneha Verma", "Neurology", "Brain Imaging, Neuro AI", 5),
    ]
    .into_iter()
    .map(|(name, field, interests, publications)| Collaborator {
        name: name.to_string(),
        field: field.to_string(),
        interests: interests.to_string(),
        publications,
    })
    .collect()
}

pub fn researcher_trials() -> Vec<Trial> {
    vec![
        Trial {
            title: "Gene Therapy in Glioma".to_string(),
            status: "Recruiting".to_string(),
            phase: Some("Phase III".to_string()),
            description: Some("Exploring gene therapy efficacy for glioma patients.".to_string()),
            eligibility: Some("Adults aged 18–65".to_string()),
        },
        Trial {
            title: "AI-Based Diagnosis Study".to_string(),
            status: "Ongoing".to_string(),
            phase: Some("Phase I".to_string()),
            description: Some("Developing AI tools for early disease detection.".to_string()),
            eligibility: Some("Open for medical institutions".to_string()),
        },
    ]
}

/// Seed questions for the patient board: `(category, question, replies)`.
pub fn patient_forum_seed() -> Vec<(ForumCategory, &'static str, Vec<Entry>)> {
    vec![
        (
            ForumCategory::CancerResearch,
            "How effective is immunotherapy for glioma?",
            vec![Entry {
                user: Some("Dr. Rao".to_string()),
                text: "Ongoing trials show 60% response rate.".to_string(),
            }],
        ),
        (
            ForumCategory::ClinicalTrialsInsights,
            "How long does Phase II usually last?",
            vec![Entry {
                user: Some("Dr. Priya".to_string()),
                text: "Usually between 6 – 12 months.".to_string(),
            }],
        ),
    ]
}

/// Seed topics for the researcher board: `(topic, author, replies)`.
pub fn researcher_forum_seed() -> Vec<(&'static str, &'static str, Vec<Entry>)> {
    vec![(
        "AI in Cancer Diagnosis",
        "Dr. Kavya Mehta",
        vec![Entry {
            user: None,
            text: "Promising results in clinical prediction models!".to_string(),
        }],
    )]
}
