use serde::{Deserialize, Serialize};

use super::project::ImageRef;

/// Profile header and "about" content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub about: String,
    pub avatar: ImageRef,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

/// Named group of skills shown on the profile view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

/// Work experience entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub period: String,
    pub role: String,
    #[serde(default)]
    pub duties: Vec<String>,
}

/// Outbound contact link.
///
/// `url` may be an https link, a mailto address or a messaging deep-link;
/// it is rendered as-is, never validated or rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    pub url: String,
}
