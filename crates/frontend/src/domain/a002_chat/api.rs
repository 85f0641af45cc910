use contracts::domain::a002_chat::aggregate::{
    ChatHistoryResponse, ChatMessage, ChatRequest, ChatResponse,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{get_json, post_json};

/// Ask a question; the backend retrieves context and answers
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    post_json("/privategxt/chat", request).await
}

/// Exchanges stored by the backend, oldest first
pub async fn fetch_history() -> Result<Vec<ChatMessage>, ApiError> {
    let resp: ChatHistoryResponse = get_json("/privategxt/chat/history").await?;
    Ok(resp.history)
}
