pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::chatbot::handlers as chatbot;
use crate::errors::AppError;
use crate::market::{insights, jobs, skills, suggestions};
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Headroom above the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/api/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/resume/upload",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/resume/builder", post(resume::handle_builder))
        .route("/api/resume/templates", get(resume::handle_templates))
        .route("/api/resume/history", get(resume::handle_history))
        // Jobs API
        .route("/api/jobs/trends", get(jobs::handle_trends))
        .route("/api/jobs/listings", get(jobs::handle_listings))
        .route("/api/jobs/match/:user_id", get(jobs::handle_match_for_user))
        // Skills API (static segments take priority over :skill_name)
        .route("/api/skills/analysis", get(skills::handle_analysis))
        .route("/api/skills/:skill_name", get(skills::handle_skill_detail))
        .route(
            "/api/skills/category/:category",
            get(skills::handle_category),
        )
        .route("/api/skills/top/demand", get(skills::handle_top_demand))
        .route(
            "/api/skills/salary/:min/:max",
            get(skills::handle_salary_range),
        )
        .route(
            "/api/skills/suggestions/:user_id",
            get(suggestions::handle_suggestions),
        )
        // Market analysis API
        .route("/api/analysis/market", get(insights::handle_market))
        .route("/api/analysis/salary", get(insights::handle_salary))
        .route("/api/analysis/geographic", get(insights::handle_geographic))
        .route("/api/analysis/experience", get(insights::handle_experience))
        .route(
            "/api/analysis/skill-combinations",
            get(insights::handle_skill_combinations),
        )
        .route("/api/analysis/predictions", get(insights::handle_predictions))
        // Chatbot API
        .route("/api/chatbot/message", post(chatbot::handle_message))
        .route(
            "/api/chatbot/quick-replies",
            get(chatbot::handle_quick_replies),
        )
        .fallback(route_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use bytes::Bytes;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::resume::extract::TextExtractor;

    const BOUNDARY: &str = "jobtrend-test-boundary";

    /// Treats the uploaded bytes as the resume text.
    struct PlainTextExtractor;

    #[async_trait]
    impl TextExtractor for PlainTextExtractor {
        async fn extract(&self, bytes: Bytes) -> Result<String, AppError> {
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }

    struct BrokenExtractor;

    #[async_trait]
    impl TextExtractor for BrokenExtractor {
        async fn extract(&self, _bytes: Bytes) -> Result<String, AppError> {
            Err(AppError::ResumeParse("xref table missing".to_string()))
        }
    }

    fn app_with(extractor: Arc<dyn TextExtractor>) -> Router {
        let config = Config {
            chatbot_reply_delay: Duration::ZERO,
            ..Config::default()
        };
        build_router(AppState { config, extractor })
    }

    fn app() -> Router {
        app_with(Arc::new(PlainTextExtractor))
    }

    fn multipart_body(field: &str, filename: &str, content_type: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    fn upload_request(body: String) -> Request<Body> {
        Request::post("/api/resume/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(app(), Request::get(uri).body(Body::empty()).unwrap()).await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_upload_analyzes_resume() {
        let text = "Senior engineer. React, Node.js and MongoDB. Delhi University, 6 years experience.";
        let (status, body) = send(
            app(),
            upload_request(multipart_body("resume", "cv.pdf", "application/pdf", text)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Resume parsed and analyzed successfully");

        let data = &body["data"];
        assert_eq!(data["filename"], "cv.pdf");
        assert_eq!(data["fileSize"], text.len());
        assert_eq!(data["experienceLevel"], "senior");
        assert_eq!(data["hasEducation"], true);
        let skills: Vec<&str> = data["skills"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(skills.contains(&"React"));
        assert!(skills.contains(&"MongoDB"));
        assert!(data["jobMatches"].as_array().unwrap().len() <= 10);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let (status, body) = send(
            app(),
            upload_request(multipart_body("resume", "cv.txt", "text/plain", "React")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["message"], "Only PDF files are allowed");
    }

    #[tokio::test]
    async fn test_upload_without_resume_field() {
        let (status, body) = send(
            app(),
            upload_request(multipart_body("avatar", "me.pdf", "application/pdf", "React")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_upload_at_size_limit_accepted() {
        let limit = Config::default().max_upload_bytes;
        let content = "a".repeat(limit);
        let (status, _) = send(
            app(),
            upload_request(multipart_body("resume", "cv.pdf", "application/pdf", &content)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_one_byte_over_limit_rejected() {
        let limit = Config::default().max_upload_bytes;
        let content = "a".repeat(limit + 1);
        let (status, body) = send(
            app(),
            upload_request(multipart_body("resume", "cv.pdf", "application/pdf", &content)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            format!("File too large: limit is {limit} bytes")
        );
    }

    #[tokio::test]
    async fn test_upload_past_body_limit_rejected_the_same_way() {
        let limit = Config::default().max_upload_bytes;
        let content = "a".repeat(7 * 1024 * 1024);
        let (status, body) = send(
            app(),
            upload_request(multipart_body("resume", "cv.pdf", "application/pdf", &content)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"]["message"],
            format!("File too large: limit is {limit} bytes")
        );
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let request = Request::post("/api/chatbot/message")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"message\": "))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let request = Request::post("/api/resume/builder")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_bad_limit_query_uses_error_envelope() {
        let (status, body) = get_json("/api/skills/top/demand?limit=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_parse_failure_is_generic_500() {
        let (status, body) = send(
            app_with(Arc::new(BrokenExtractor)),
            upload_request(multipart_body("resume", "cv.pdf", "application/pdf", "%PDF")),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Failed to parse resume");
    }

    #[tokio::test]
    async fn test_builder_requires_sections() {
        let (status, body) = send(
            app(),
            json_request("/api/resume/builder", serde_json::json!({ "personalInfo": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_skill_routes() {
        let (status, body) = get_json("/api/skills/analysis").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 10);

        let (status, body) = get_json("/api/skills/Machine%20Learning").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["category"], "AI/ML");

        let (status, body) = get_json("/api/skills/Haskell").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Skill not found");

        let (status, body) = get_json("/api/skills/top/demand?limit=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["name"], "React");
        assert_eq!(body["limit"], 2);

        let (status, _) = get_json("/api/skills/salary/abc/100").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_jobs_carry_region() {
        let (status, body) = get_json("/api/jobs/trends").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["region"], "India");

        let (_, body) = get_json("/api/jobs/match/user-42").await;
        assert_eq!(body["userId"], "user-42");
    }

    #[tokio::test]
    async fn test_chatbot_routes() {
        let (status, body) = send(
            app(),
            json_request("/api/chatbot/message", serde_json::json!({ "message": "hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["response"].as_str().is_some_and(|r| !r.is_empty()));

        let (status, body) = send(
            app(),
            json_request("/api/chatbot/message", serde_json::json!({ "message": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Message is required");

        let (_, body) = get_json("/api/chatbot/quick-replies").await;
        assert_eq!(body["quickReplies"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get_json("/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Route not found");
    }
}
