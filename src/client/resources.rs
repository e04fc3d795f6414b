//! Resource Models
//!
//! Typed shapes for the content the backend API serves. Deserialization
//! doubles as response validation: a body that does not match the expected
//! shape is rejected before anything reaches the cache.

use serde::{Deserialize, Serialize};

// == Experience ==
/// One professional experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub location: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub company_logo: Option<String>,
    pub company_url: Option<String>,
    /// Human-readable duration, filled in from `company_durations`
    pub duration: Option<String>,
    pub period: Option<String>,
}

// == Company Duration ==
/// Aggregated time spent at one company, pre-formatted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDuration {
    pub name: String,
    pub duration: String,
}

// == Total Duration ==
/// Total career time, pre-formatted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalDuration {
    pub total_duration: String,
}

// == Project ==
/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub featured: bool,
}

// == Education ==
/// The education bundle: formal courses plus certifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub formations: Vec<Formation>,
    pub certifications: Vec<Certification>,
}

/// One formal course or degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub id: String,
    pub course: String,
    pub institution: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub period: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub current: bool,
}

/// One certification with its credential link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub institution: String,
    #[serde(rename = "issueDate")]
    pub issue_date: Option<String>,
    pub credential_url: String,
    pub description: Option<String>,
}

// == Social Link ==
/// One social media link for the contact section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
}
