use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chatbot::topics::reply_for;
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuickReply {
    pub text: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickRepliesResponse {
    pub success: bool,
    pub quick_replies: &'static [QuickReply],
}

const QUICK_REPLIES: &[QuickReply] = &[
    QuickReply { text: "How to upload resume?", icon: "FileText" },
    QuickReply { text: "Find matching jobs", icon: "Briefcase" },
    QuickReply { text: "Skill suggestions", icon: "Target" },
    QuickReply { text: "Market trends", icon: "TrendingUp" },
    QuickReply { text: "Track skill progress", icon: "Target" },
];

/// POST /api/chatbot/message
pub async fn handle_message(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    let (topic, response) = reply_for(&message);
    debug!("Chatbot routed message to {topic:?}");

    // Paced like a typing assistant.
    tokio::time::sleep(state.config.chatbot_reply_delay).await;

    Ok(Json(ChatResponse {
        success: true,
        response,
        timestamp: Utc::now(),
    }))
}

/// GET /api/chatbot/quick-replies
pub async fn handle_quick_replies() -> Json<QuickRepliesResponse> {
    Json(QuickRepliesResponse {
        success: true,
        quick_replies: QUICK_REPLIES,
    })
}
