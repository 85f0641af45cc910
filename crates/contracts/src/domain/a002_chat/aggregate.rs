use crate::string_id;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

string_id!(
    /// Identifier of one exchange; server-assigned or generated locally.
    ExchangeId
);

/// Provider name the client writes into exchanges that failed.
pub const ERROR_PROVIDER: &str = "error";

pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Model source the backend routes a question to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Local model; documents never leave the deployment.
    #[default]
    Ollama,
    Grok,
    Anthropic,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Ollama => "ollama",
            Provider::Grok => "grok",
            Provider::Anthropic => "anthropic",
        }
    }

    /// Translation key of the toggle label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Provider::Ollama => "privategxt_llm_local",
            Provider::Grok => "privategxt_llm_grok",
            Provider::Anthropic => "privategxt_llm_anthropic",
        }
    }

    /// Whether document content is sent to a hosted third-party model.
    pub fn is_external(&self) -> bool {
        !matches!(self, Provider::Ollama)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ollama" => Some(Provider::Ollama),
            "grok" => Some(Provider::Grok),
            "anthropic" => Some(Provider::Anthropic),
            _ => None,
        }
    }

    pub fn all() -> [Provider; 3] {
        [Provider::Ollama, Provider::Grok, Provider::Anthropic]
    }
}

/// Chunk of a document the backend used as context for an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub filename: String,
    /// Zero-based; rendered one-based.
    pub chunk_index: u32,
    #[serde(default)]
    pub doc_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// One question with its answer. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(deserialize_with = "lenient_id")]
    pub id: ExchangeId,
    pub timestamp: String,
    pub message: String,
    pub response: String,
    pub provider: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
    #[serde(default)]
    pub usage: TokenUsage,
}

impl ChatMessage {
    /// Exchange built from a successful round trip. Missing server fields
    /// fall back to `now`, `fallback_id`, no sources and zero usage.
    pub fn from_response(
        message: String,
        response: ChatResponse,
        now: DateTime<Utc>,
        fallback_id: ExchangeId,
    ) -> Self {
        Self {
            id: response.id.unwrap_or(fallback_id),
            timestamp: iso_timestamp(now),
            message,
            response: response.response,
            provider: response.provider,
            model: response.model,
            sources: response.sources.unwrap_or_default(),
            usage: response.usage.unwrap_or_default(),
        }
    }

    /// Exchange recording a failed round trip, styled apart by the view.
    pub fn failed(message: String, error_text: &str, now: DateTime<Utc>, id: ExchangeId) -> Self {
        Self {
            id,
            timestamp: iso_timestamp(now),
            message,
            response: format!("Error: {}", error_text),
            provider: ERROR_PROVIDER.to_string(),
            model: String::new(),
            sources: Vec::new(),
            usage: TokenUsage::default(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.provider == ERROR_PROVIDER
    }
}

/// `POST /privategxt/chat` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub temperature: f64,
}

impl ChatRequest {
    /// Request with the backend defaults: Anthropic at temperature 0.7.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            provider: Provider::Anthropic,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

/// `POST /privategxt/chat` reply. `id`, `sources` and `usage` may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    #[serde(default, deserialize_with = "lenient_opt_id")]
    pub id: Option<ExchangeId>,
    pub response: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub sources: Option<Vec<SourceCitation>>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl ChatResponse {
    /// Names of optional fields the backend left out.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push("id");
        }
        if self.sources.is_none() {
            missing.push("sources");
        }
        if self.usage.is_none() {
            missing.push("usage");
        }
        missing
    }
}

/// `GET /privategxt/chat/history`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatHistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    pub count: usize,
}

/// Same shape as JavaScript's `Date.toISOString()`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for ExchangeId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => ExchangeId(s),
            RawId::Number(n) => ExchangeId(n.to_string()),
        }
    }
}

// Older backend builds send numeric ids.
fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<ExchangeId, D::Error> {
    RawId::deserialize(d).map(ExchangeId::from)
}

fn lenient_opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ExchangeId>, D::Error> {
    Ok(Option::<RawId>::deserialize(d)?
        .map(ExchangeId::from)
        .filter(|id| !id.0.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_request_defaults_and_model_omitted() {
        let req = ChatRequest::new("Hallo");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Hallo",
                "provider": "anthropic",
                "temperature": 0.7
            })
        );

        let req = ChatRequest::new("Hallo")
            .with_provider(Provider::Ollama)
            .with_model(Some("llama3".into()));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["provider"], "ollama");
        assert_eq!(json["model"], "llama3");
    }

    #[test]
    fn test_full_response_is_used_verbatim() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{
                "id": "srv-1",
                "response": "The report covers Q1.",
                "provider": "ollama",
                "model": "llama3",
                "sources": [{"filename": "report.pdf", "chunk_index": 0, "doc_id": "d1"}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
            }"#,
        )
        .unwrap();
        assert!(resp.missing_fields().is_empty());

        let msg = ChatMessage::from_response(
            "What is in the report?".into(),
            resp,
            fixed_now(),
            ExchangeId::new("local"),
        );
        assert_eq!(msg.id.as_str(), "srv-1");
        assert_eq!(msg.message, "What is in the report?");
        assert_eq!(msg.sources.len(), 1);
        assert_eq!(msg.usage.total_tokens, 15);
        assert_eq!(msg.timestamp, "2024-05-01T12:30:00.000Z");
        assert!(!msg.is_error());
    }

    #[test]
    fn test_sparse_response_gets_defaults() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"response": "Hi", "provider": "grok", "model": "grok-2"}"#,
        )
        .unwrap();
        assert_eq!(resp.missing_fields(), vec!["id", "sources", "usage"]);

        let msg = ChatMessage::from_response("Hi?".into(), resp, fixed_now(), ExchangeId::new("local-7"));
        assert_eq!(msg.id.as_str(), "local-7");
        assert!(msg.sources.is_empty());
        assert_eq!(msg.usage, TokenUsage::default());
    }

    #[test]
    fn test_numeric_ids_are_accepted() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"id": 42, "response": "ok", "provider": "ollama", "model": "m"}"#)
                .unwrap();
        assert_eq!(resp.id, Some(ExchangeId::new("42")));

        let history: ChatHistoryResponse = serde_json::from_str(
            r#"{"success": true, "count": 1, "history": [
                {"id": 7, "timestamp": "2024-05-01T12:00:00Z", "message": "q", "response": "a", "provider": "ollama"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(history.history[0].id.as_str(), "7");
        assert_eq!(history.history[0].usage.total_tokens, 0);
    }

    #[test]
    fn test_failed_exchange_uses_error_sentinel() {
        let msg = ChatMessage::failed("q".into(), "Provider unavailable", fixed_now(), ExchangeId::new("e1"));
        assert!(msg.is_error());
        assert_eq!(msg.provider, ERROR_PROVIDER);
        assert_eq!(msg.response, "Error: Provider unavailable");
        assert!(msg.model.is_empty());
        assert!(msg.sources.is_empty());
    }

    #[test]
    fn test_only_local_provider_is_internal() {
        assert!(!Provider::Ollama.is_external());
        assert!(Provider::Grok.is_external());
        assert!(Provider::Anthropic.is_external());
        assert_eq!(Provider::default(), Provider::Ollama);
        for p in Provider::all() {
            assert_eq!(Provider::from_str(p.as_str()), Some(p));
        }
    }
}
