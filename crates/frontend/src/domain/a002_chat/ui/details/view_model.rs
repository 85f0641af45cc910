//! Chat panel - View Model

use chrono::Utc;
use contracts::domain::a002_chat::aggregate::{ChatRequest, ExchangeId, Provider};
use contracts::domain::a002_chat::session::ChatSession;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use uuid::Uuid;

use crate::domain::a002_chat::api::{fetch_history, send_chat};

#[derive(Clone, Copy)]
pub struct ChatPanelVm {
    pub session: RwSignal<ChatSession>,
    pub input: RwSignal<String>,
}

fn local_exchange_id() -> ExchangeId {
    ExchangeId::new(Uuid::new_v4().to_string())
}

impl ChatPanelVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            input: RwSignal::new(String::new()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.session.with(|s| s.is_pending())
    }

    pub fn can_send(&self) -> bool {
        let input = self.input.get();
        self.session.with(|s| s.can_send(&input))
    }

    pub fn select_provider(&self, provider: Provider) {
        self.session.update(|s| s.select_provider(provider));
    }

    pub fn load_history(&self) {
        let session = self.session;
        spawn_local(async move {
            match fetch_history().await {
                Ok(history) => {
                    log::debug!("Loaded {} exchanges of chat history", history.len());
                    session.update(|s| s.replace_history(history));
                }
                Err(e) => log::error!("Failed to load chat history: {}", e),
            }
        });
    }

    /// Sends the current input. `error_fallback` is the localized text for
    /// failures without server detail. `on_settled` runs after the exchange
    /// was appended.
    pub fn send(&self, error_fallback: String, on_settled: impl FnOnce() + 'static) {
        let input = self.input.get_untracked();
        let Some(text) = self.session.try_update(|s| s.begin_send(&input)).flatten() else {
            return;
        };
        self.input.set(String::new());

        let provider = self.session.with_untracked(|s| s.provider());
        let request = ChatRequest::new(text.clone()).with_provider(provider);
        let session = self.session;
        spawn_local(async move {
            match send_chat(&request).await {
                Ok(response) => {
                    let missing = response.missing_fields();
                    if !missing.is_empty() {
                        log::debug!("Chat response without {}", missing.join(", "));
                    }
                    session.update(|s| {
                        s.complete_success(text, response, Utc::now(), local_exchange_id())
                    });
                }
                Err(e) => {
                    log::error!("Chat error: {}", e);
                    let detail = e.user_message(&error_fallback);
                    session.update(|s| {
                        s.complete_failure(text, &detail, Utc::now(), local_exchange_id())
                    });
                }
            }
            on_settled();
        });
    }
}

impl Default for ChatPanelVm {
    fn default() -> Self {
        Self::new()
    }
}
