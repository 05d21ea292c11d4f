//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::analysis::experience::ExperienceLevel;
use crate::analysis::report::{analyze_resume_text, ResumeAnalysis, UploadMeta};
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::response::ApiResponse;
use crate::resume::builder::{build_resume, BuiltResume};
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const UPLOAD_FIELD: &str = "resume";
const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, Serialize)]
pub struct ResumeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
    pub category: &'static str,
}

const TEMPLATES: &[ResumeTemplate] = &[
    ResumeTemplate {
        id: "modern",
        name: "Modern Professional",
        description: "Clean, contemporary design for Indian tech professionals",
        preview: "modern-template.png",
        category: "Technology",
    },
    ResumeTemplate {
        id: "creative",
        name: "Creative Portfolio",
        description: "Bold design for creative and design roles in Indian companies",
        preview: "creative-template.png",
        category: "Creative",
    },
    ResumeTemplate {
        id: "classic",
        name: "Classic Corporate",
        description: "Traditional format for Indian corporate environments",
        preview: "classic-template.png",
        category: "Corporate",
    },
    ResumeTemplate {
        id: "minimal",
        name: "Minimalist",
        description: "Simple, focused design for any Indian industry",
        preview: "minimal-template.png",
        category: "Universal",
    },
    ResumeTemplate {
        id: "indian-tech",
        name: "Indian Tech",
        description: "Optimized for Indian IT companies and startups",
        preview: "indian-tech-template.png",
        category: "Technology",
    },
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u32,
    pub filename: &'static str,
    pub skills: &'static [&'static str],
    pub experience_level: ExperienceLevel,
    pub uploaded_at: DateTime<Utc>,
}

/// POST /api/resume/upload
///
/// Accepts one PDF in the `resume` field, extracts its text and returns the
/// full analysis. The file never outlives the request.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ResumeAnalysis>>, AppError> {
    let limit = state.config.max_upload_bytes;
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if field.content_type() != Some(PDF_MIME) {
            return Err(AppError::Validation(
                "Only PDF files are allowed".to_string(),
            ));
        }
        let filename = field.file_name().unwrap_or("resume.pdf").to_string();
        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
        if bytes.len() > limit {
            return Err(file_too_large(limit));
        }
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    let file_size = bytes.len();
    info!("Analyzing resume '{filename}' ({file_size} bytes)");

    let text = state.extractor.extract(bytes).await?;
    let analysis = analyze_resume_text(UploadMeta { filename, file_size }, &text);

    info!(
        "Resume analyzed: {} skills, level {}, {} job matches",
        analysis.skills.len(),
        analysis.experience_level.as_str(),
        analysis.job_matches.len()
    );

    Ok(Json(
        ApiResponse::ok(analysis).message("Resume parsed and analyzed successfully"),
    ))
}

fn file_too_large(limit: usize) -> AppError {
    AppError::Validation(format!("File too large: limit is {limit} bytes"))
}

/// Body-limit overruns surface as the same 400 as the per-file size check.
fn multipart_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        file_too_large(limit)
    } else {
        err.into()
    }
}

/// POST /api/resume/builder
pub async fn handle_builder(
    AppJson(draft): AppJson<Value>,
) -> Result<Json<ApiResponse<BuiltResume>>, AppError> {
    let built = build_resume(draft)?;
    Ok(Json(
        ApiResponse::ok(built).message("Resume created successfully"),
    ))
}

/// GET /api/resume/templates
pub async fn handle_templates() -> Json<ApiResponse<&'static [ResumeTemplate]>> {
    Json(ApiResponse::ok(TEMPLATES).message("Resume templates retrieved successfully"))
}

/// GET /api/resume/history
pub async fn handle_history() -> Json<ApiResponse<Vec<HistoryEntry>>> {
    let now = Utc::now();
    Json(ApiResponse::ok(vec![
        HistoryEntry {
            id: 1,
            filename: "resume_john_doe.pdf",
            skills: &["React", "Node.js", "JavaScript"],
            experience_level: ExperienceLevel::Senior,
            uploaded_at: now - Duration::days(1),
        },
        HistoryEntry {
            id: 2,
            filename: "resume_jane_smith.pdf",
            skills: &["Python", "Machine Learning", "Data Science"],
            experience_level: ExperienceLevel::Mid,
            uploaded_at: now - Duration::days(2),
        },
    ]))
}
