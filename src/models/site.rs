//! Page content model.
//!
//! Everything the page displays, deserialized from the embedded
//! `assets/site.toml` document.

use serde::Deserialize;
use thiserror::Error;

/// Failure to load the embedded content document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid site content: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    /// Phrases cycled by the hero typing animation, in order.
    pub phrases: Vec<String>,
    /// External CV document opened by the download button.
    pub cv_url: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub sections: Vec<NavSection>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact: ContactCopy,
}

/// A page section reachable from the navbar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavSection {
    /// Element id of the section, without `#`.
    pub id: String,
    pub label: String,
}

impl NavSection {
    /// Hash link pointing at this section.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Target fill, 0..=100.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineItem {
    pub period: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub intro: String,
}

impl Default for ContactCopy {
    fn default() -> Self {
        Self {
            heading: "Contact".to_string(),
            intro: String::new(),
        }
    }
}

impl SiteContent {
    pub fn parse(source: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            owner: "Portfolio".to_string(),
            tagline: String::new(),
            phrases: vec!["Web Developer.".to_string()],
            cv_url: String::new(),
            about: Vec::new(),
            sections: Vec::new(),
            skills: Vec::new(),
            timeline: Vec::new(),
            projects: Vec::new(),
            contact: ContactCopy::default(),
        }
    }
}
