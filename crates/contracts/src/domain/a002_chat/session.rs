//! Chat send lifecycle: Idle -> Sending -> Idle.
//!
//! Every started send ends in exactly one appended exchange, either the
//! answer or a synthesized error exchange.

use super::aggregate::{ChatMessage, ChatResponse, ExchangeId, Provider};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
    provider: Provider,
    show_external_warning: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn show_external_warning(&self) -> bool {
        self.show_external_warning
    }

    /// Whether the send control should be enabled for `input`.
    pub fn can_send(&self, input: &str) -> bool {
        !self.pending && !input.trim().is_empty()
    }

    /// Starts a send. Returns the trimmed text to submit, or `None` when
    /// the input is blank or another send is still in flight.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if !self.can_send(input) {
            return None;
        }
        self.pending = true;
        Some(input.trim().to_string())
    }

    pub fn complete_success(
        &mut self,
        message: String,
        response: ChatResponse,
        now: DateTime<Utc>,
        fallback_id: ExchangeId,
    ) {
        self.messages
            .push(ChatMessage::from_response(message, response, now, fallback_id));
        self.pending = false;
    }

    pub fn complete_failure(
        &mut self,
        message: String,
        error_text: &str,
        now: DateTime<Utc>,
        id: ExchangeId,
    ) {
        self.messages
            .push(ChatMessage::failed(message, error_text, now, id));
        self.pending = false;
    }

    /// The warning follows the provider only, never the messages.
    pub fn select_provider(&mut self, provider: Provider) {
        self.provider = provider;
        self.show_external_warning = provider.is_external();
    }

    /// Installs history loaded from the backend in front of the exchanges
    /// appended since mount. Local exchanges whose id the history already
    /// carries are dropped, the rest keep their order.
    pub fn replace_history(&mut self, history: Vec<ChatMessage>) {
        let local = std::mem::replace(&mut self.messages, history);
        let known: HashSet<ExchangeId> = self.messages.iter().map(|m| m.id.clone()).collect();
        self.messages
            .extend(local.into_iter().filter(|m| !known.contains(&m.id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_chat::aggregate::ERROR_PROVIDER;

    fn answer(text: &str) -> ChatResponse {
        ChatResponse {
            id: None,
            response: text.to_string(),
            provider: "ollama".into(),
            model: "llama3".into(),
            sources: None,
            usage: None,
        }
    }

    fn local_id(n: usize) -> ExchangeId {
        ExchangeId::new(format!("local-{}", n))
    }

    #[test]
    fn test_blank_input_does_not_start_a_send() {
        let mut s = ChatSession::new();
        assert_eq!(s.begin_send("   \n\t"), None);
        assert!(!s.is_pending());
    }

    #[test]
    fn test_only_one_send_in_flight() {
        let mut s = ChatSession::new();
        assert_eq!(s.begin_send("first"), Some("first".to_string()));
        assert!(s.is_pending());
        assert!(!s.can_send("second"));
        assert_eq!(s.begin_send("second"), None);

        s.complete_success("first".into(), answer("a"), Utc::now(), local_id(0));
        assert!(!s.is_pending());
        assert_eq!(s.begin_send("second"), Some("second".to_string()));
    }

    #[test]
    fn test_successful_sends_append_in_order_with_trimmed_text() {
        let inputs = ["  one ", "two", "\tthree\n"];
        let mut s = ChatSession::new();
        for (i, input) in inputs.iter().enumerate() {
            let text = s.begin_send(input).unwrap();
            s.complete_success(text, answer("ok"), Utc::now(), local_id(i));
        }
        let texts: Vec<&str> = s.messages().iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(s.messages().len(), inputs.len());
    }

    #[test]
    fn test_failed_send_appends_one_error_exchange() {
        let mut s = ChatSession::new();
        let text = s.begin_send("What is in the report?").unwrap();
        s.complete_failure(text, "Chat error", Utc::now(), local_id(1));

        assert_eq!(s.messages().len(), 1);
        let msg = &s.messages()[0];
        assert_eq!(msg.provider, ERROR_PROVIDER);
        assert_eq!(msg.message, "What is in the report?");
        assert!(!s.is_pending());
    }

    #[test]
    fn test_external_warning_tracks_provider() {
        let mut s = ChatSession::new();
        assert!(!s.show_external_warning());

        s.select_provider(Provider::Grok);
        assert!(s.show_external_warning());
        s.select_provider(Provider::Anthropic);
        assert!(s.show_external_warning());
        s.select_provider(Provider::Ollama);
        assert!(!s.show_external_warning());
    }

    #[test]
    fn test_warning_independent_of_messages() {
        let mut s = ChatSession::new();
        s.select_provider(Provider::Anthropic);
        let text = s.begin_send("q").unwrap();
        s.complete_failure(text, "boom", Utc::now(), local_id(0));
        assert!(s.show_external_warning());
        s.replace_history(Vec::new());
        assert!(s.show_external_warning());
    }

    #[test]
    fn test_late_history_keeps_exchanges_sent_since_mount() {
        let mut s = ChatSession::new();
        let text = s.begin_send("fresh question").unwrap();
        s.complete_success(text, answer("fresh answer"), Utc::now(), local_id(7));

        s.replace_history(Vec::new());
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].message, "fresh question");

        let mut older = ChatSession::new();
        let text = older.begin_send("old question").unwrap();
        older.complete_success(text, answer("old answer"), Utc::now(), local_id(1));
        s.replace_history(older.messages().to_vec());

        let texts: Vec<&str> = s.messages().iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["old question", "fresh question"]);
    }

    #[test]
    fn test_history_already_holding_a_local_exchange_is_not_duplicated() {
        let mut s = ChatSession::new();
        let text = s.begin_send("q").unwrap();
        s.complete_success(text, answer("a"), Utc::now(), local_id(3));
        let history = s.messages().to_vec();

        s.replace_history(history);
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].id, local_id(3));
    }

    #[test]
    fn test_local_question_scenario() {
        let mut s = ChatSession::new();
        s.select_provider(Provider::Ollama);
        let text = s.begin_send("What is in the report?").unwrap();
        s.complete_success(text, answer("A quarterly summary."), Utc::now(), local_id(0));

        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].message, "What is in the report?");
        assert!(!s.show_external_warning());
    }
}
