//! Experience level classification by keyword buckets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

/// Buckets are tested in this order; the first with any hit wins.
const LEVEL_KEYWORDS: &[(ExperienceLevel, &[&str])] = &[
    (ExperienceLevel::Entry, &["entry", "junior", "0-2", "0-1", "1-2"]),
    (ExperienceLevel::Mid, &["mid", "intermediate", "2-5", "3-5", "3-7"]),
    (
        ExperienceLevel::Senior,
        &["senior", "lead", "5+", "7+", "10+", "principal", "architect"],
    ),
];

/// First-match classification over the raw resume text. Falls back to `Mid`.
pub fn classify_experience_level(text: &str) -> ExperienceLevel {
    let text_lower = text.to_lowercase();

    LEVEL_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text_lower.contains(k)))
        .map(|(level, _)| *level)
        .unwrap_or_default()
}
