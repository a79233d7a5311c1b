use serde::{Deserialize, Serialize};

/// Learning dashboard entry with a completion percentage and skill list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTopic {
    pub topic: String,
    /// Completion percentage, 0..=100 inclusive (validated at load)
    pub progress: u8,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One point in the weekly study-hours series.
///
/// The series order is chronological and meaningful; samples carry no
/// other invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySample {
    pub label: String,
    pub hours: u32,
}
