//! Assembles the full resume analysis from extracted text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::experience::{classify_experience_level, ExperienceLevel};
use crate::analysis::gaps::{identify_skill_gaps, GapEntry};
use crate::analysis::matching::{get_job_matches, ScoredJob};
use crate::analysis::recommendations::{generate_upgrade_recommendations, Recommendation};
use crate::analysis::skills::{analyze_skills, extract_skills, SkillAnalysis};

const PREVIEW_CHARS: usize = 500;

const EDUCATION_MARKERS: &[&str] = &[
    "education",
    "university",
    "college",
    "degree",
    "bachelor",
    "master",
    "phd",
];

const EXPERIENCE_MARKERS: &[&str] = &["experience", "work", "employment", "job", "position"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub filename: String,
    pub file_size: usize,
    pub text_length: usize,
    pub word_count: usize,
    pub skills: Vec<String>,
    pub skill_analysis: SkillAnalysis,
    pub skill_gaps: Vec<GapEntry>,
    pub upgrade_recommendations: Vec<Recommendation>,
    pub experience_level: ExperienceLevel,
    pub has_education: bool,
    pub has_experience: bool,
    pub job_matches: Vec<ScoredJob>,
    pub extracted_text: String,
    pub timestamp: DateTime<Utc>,
}

/// Metadata about the uploaded file the text came from.
#[derive(Debug, Clone)]
pub struct UploadMeta {
    pub filename: String,
    pub file_size: usize,
}

/// Runs the whole pipeline over one resume's text.
pub fn analyze_resume_text(meta: UploadMeta, text: &str) -> ResumeAnalysis {
    let skills = extract_skills(text);
    let experience_level = classify_experience_level(text);

    let text_lower = text.to_lowercase();
    let has_education = mentions_any(&text_lower, EDUCATION_MARKERS);
    let has_experience = mentions_any(&text_lower, EXPERIENCE_MARKERS);

    ResumeAnalysis {
        filename: meta.filename,
        file_size: meta.file_size,
        text_length: text.chars().count(),
        word_count: text.split_whitespace().count(),
        skill_analysis: analyze_skills(&skills),
        skill_gaps: identify_skill_gaps(&skills),
        upgrade_recommendations: generate_upgrade_recommendations(&skills, experience_level),
        job_matches: get_job_matches(&skills, experience_level),
        experience_level,
        has_education,
        has_experience,
        extracted_text: preview(text),
        skills,
        timestamp: Utc::now(),
    }
}

fn mentions_any(text_lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text_lower.contains(m))
}

fn preview(text: &str) -> String {
    let mut head: String = text.chars().take(PREVIEW_CHARS).collect();
    head.push_str("...");
    head
}
