use serde::{Deserialize, Serialize};

use super::project::ImageRef;

/// Certificate gallery entry.
///
/// Certificates have no id: selection holds the full record by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    /// Display string, e.g. "2022 - 2025". Not parsed.
    pub period: String,
    pub image: ImageRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
