//! Client Module
//!
//! Resource loaders composing the cache-aside store with the resilient
//! invoker and the backend HTTP API.

mod http;
mod portfolio;
mod resources;

// Re-export public types
pub use http::{ApiFetcher, HttpFetcher};
pub use portfolio::{PortfolioClient, ResourceData};
pub use resources::{
    Certification, CompanyDuration, Education, Experience, Formation, Project, SocialLink,
    TotalDuration,
};

// == Resource Key ==
/// The content resources served by the backend, each cached under its own
/// key so one resource's invalidation or expiration never affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Experiences,
    CompanyDurations,
    TotalDuration,
    Projects,
    Education,
    SocialLinks,
}

impl ResourceKey {
    /// Every resource, in the order the binary loads them.
    pub const ALL: [ResourceKey; 6] = [
        ResourceKey::Experiences,
        ResourceKey::CompanyDurations,
        ResourceKey::TotalDuration,
        ResourceKey::Projects,
        ResourceKey::Education,
        ResourceKey::SocialLinks,
    ];

    /// The logical cache key for this resource (pre-namespacing).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKey::Experiences => "experiences",
            ResourceKey::CompanyDurations => "company_durations",
            ResourceKey::TotalDuration => "total_duration",
            ResourceKey::Projects => "projects",
            ResourceKey::Education => "education",
            ResourceKey::SocialLinks => "social_links",
        }
    }

    /// The backend path this resource is fetched from.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKey::Experiences => "/experiences",
            ResourceKey::CompanyDurations => "/experiences?company_duration=true",
            ResourceKey::TotalDuration => "/experiences?total_duration=true",
            ResourceKey::Projects => "/projects",
            ResourceKey::Education => "/education",
            ResourceKey::SocialLinks => "/social-media-links",
        }
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
