//! Resume builder: accepts a structured draft and returns it with a review.
//! Nothing is stored; the draft is echoed back with an id and timestamps.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::AppError;

pub const REQUIRED_SECTIONS: &[&str] = &["personalInfo", "experience", "education"];

/// Sections that lift the review score when present and non-empty.
const OPTIONAL_SECTIONS: &[&str] = &["summary", "skills", "projects", "certifications", "achievements"];

/// Keys the server always stamps; a draft's own values for them are dropped.
const SERVER_KEYS: &[&str] = &["createdAt", "updatedAt", "status"];

const BASE_SCORE: u32 = 70;
const SECTION_BONUS: u32 = 6;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResume {
    /// The draft's own `id` when it has one, otherwise a generated one.
    pub id: Value,
    #[serde(flatten)]
    pub sections: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReview {
    pub score: u32,
    pub suggestions: Vec<&'static str>,
    pub strengths: Vec<&'static str>,
    pub areas_for_improvement: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct BuiltResume {
    pub resume: SavedResume,
    pub analysis: ResumeReview,
}

fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(_) => true,
    }
}

pub fn build_resume(draft: Value) -> Result<BuiltResume, AppError> {
    let Value::Object(mut sections) = draft else {
        return Err(AppError::Validation(
            "Resume draft must be a JSON object".to_string(),
        ));
    };

    if !REQUIRED_SECTIONS
        .iter()
        .all(|key| is_filled(sections.get(*key)))
    {
        return Err(AppError::Validation(
            "Missing required resume sections".to_string(),
        ));
    }

    let analysis = review(&sections);
    let now = Utc::now();

    for key in SERVER_KEYS {
        sections.remove(*key);
    }
    let id = sections.remove("id").unwrap_or_else(|| {
        let suffix = Uuid::new_v4().simple().to_string();
        Value::String(format!("resume_{}_{}", now.timestamp_millis(), &suffix[..9]))
    });

    Ok(BuiltResume {
        resume: SavedResume {
            id,
            sections,
            created_at: now,
            updated_at: now,
            status: "draft",
        },
        analysis,
    })
}

fn review(sections: &Map<String, Value>) -> ResumeReview {
    let filled = OPTIONAL_SECTIONS
        .iter()
        .filter(|key| is_filled(sections.get(**key)))
        .count() as u32;

    ResumeReview {
        score: (BASE_SCORE + filled * SECTION_BONUS).min(100),
        suggestions: vec![
            "Consider adding quantifiable achievements to experience section",
            "Include relevant certifications and training",
            "Add a professional summary at the top",
            "Ensure consistent formatting throughout",
        ],
        strengths: vec![
            "Clear work history progression",
            "Relevant technical skills listed",
            "Professional formatting",
        ],
        areas_for_improvement: vec![
            "Add measurable accomplishments",
            "Include industry-specific keywords",
            "Consider adding a skills section",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_draft() -> Value {
        json!({
            "personalInfo": { "name": "Asha Rao", "email": "asha@example.com" },
            "experience": [{ "company": "Infosys", "role": "Engineer" }],
            "education": [{ "institution": "IIT Bombay" }]
        })
    }

    #[test]
    fn test_minimal_draft_accepted() {
        let built = build_resume(minimal_draft()).unwrap();
        assert!(built.resume.id.as_str().unwrap().starts_with("resume_"));
        assert_eq!(built.resume.status, "draft");
        assert_eq!(built.analysis.score, BASE_SCORE);
    }

    #[test]
    fn test_missing_section_rejected() {
        let mut draft = minimal_draft();
        draft.as_object_mut().unwrap().remove("education");
        assert!(matches!(build_resume(draft), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_empty_section_rejected() {
        let mut draft = minimal_draft();
        draft["experience"] = json!([]);
        assert!(matches!(build_resume(draft), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(build_resume(json!(["not", "a", "resume"])).is_err());
    }

    #[test]
    fn test_optional_sections_raise_score() {
        let mut draft = minimal_draft();
        draft["summary"] = json!("Backend engineer");
        draft["skills"] = json!(["Rust", "Go"]);
        let built = build_resume(draft).unwrap();
        assert_eq!(built.analysis.score, BASE_SCORE + 2 * SECTION_BONUS);
    }

    #[test]
    fn test_score_never_exceeds_100() {
        let mut draft = minimal_draft();
        for key in OPTIONAL_SECTIONS {
            draft[*key] = json!("filled");
        }
        assert!(build_resume(draft).unwrap().analysis.score <= 100);
    }

    #[test]
    fn test_sections_flattened_into_resume() {
        let built = build_resume(minimal_draft()).unwrap();
        let value = serde_json::to_value(&built.resume).unwrap();
        assert_eq!(value["personalInfo"]["name"], "Asha Rao");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_draft_id_kept_and_server_fields_win() {
        let mut draft = minimal_draft();
        draft["id"] = json!("mine");
        draft["status"] = json!("final");
        draft["createdAt"] = json!("1999-01-01T00:00:00Z");

        let built = build_resume(draft).unwrap();
        let raw = serde_json::to_string(&built.resume).unwrap();

        assert_eq!(raw.matches("\"id\":").count(), 1);
        assert_eq!(raw.matches("\"status\":").count(), 1);
        assert_eq!(raw.matches("\"createdAt\":").count(), 1);

        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["id"], "mine");
        assert_eq!(value["status"], "draft");
        assert_ne!(value["createdAt"], "1999-01-01T00:00:00Z");
    }
}
