//! Locale model and translation table.
//!
//! The table is fetched from the backend per locale. Lookups never fail:
//! an unknown key renders as the key itself.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported UI languages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
    Es,
}

impl Language {
    /// Locale code used in URLs and local storage.
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::De => "DE",
            Language::En => "EN",
            Language::Es => "ES",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::De => "🇩🇪",
            Language::En => "🇬🇧",
            Language::Es => "🇪🇸",
        }
    }

    /// Parses a stored locale code; unknown values fall back to the default.
    pub fn from_code(s: &str) -> Self {
        match s.trim() {
            "en" => Language::En,
            "es" => Language::Es,
            _ => Language::default(),
        }
    }

    pub fn all() -> [Language; 3] {
        [Language::De, Language::En, Language::Es]
    }
}

/// Flat key -> display string mapping for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self(entries)
    }

    /// Table used when the backend could not deliver one.
    pub fn fallback() -> Self {
        Self(HashMap::from([
            ("app_title".to_string(), "PrivateGxT".to_string()),
            ("error".to_string(), "Error loading translations".to_string()),
        ]))
    }

    /// Localized string for `key`, or `key` itself when missing.
    ///
    /// An empty translation counts as missing.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match self.0.get(key) {
            Some(value) if !value.is_empty() => value.as_str(),
            _ => key,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// `GET /translations/{language}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationsResponse {
    #[serde(default)]
    pub translations: TranslationTable,
}

/// Cache-buster query for the translations endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TranslationsQuery {
    pub t: i64,
}

/// Lifecycle of the translation table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoadState {
    /// First load has not settled yet; the app shows a loading screen.
    #[default]
    Pending,
    /// A table is installed. Later locale switches stay `Ready`.
    Ready,
}

/// Active locale together with its table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationStore {
    language: Language,
    table: TranslationTable,
    state: LoadState,
}

impl TranslationStore {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            table: TranslationTable::default(),
            state: LoadState::Pending,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Pending
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.t(key)
    }

    /// Switches the locale. The current table stays visible until the new
    /// one arrives. Returns `false` when the locale did not change.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        true
    }

    /// Installs the outcome of a fetch for `language`.
    ///
    /// Responses for a locale that is no longer active are dropped, so a
    /// slow response cannot overwrite a newer switch. Returns whether the
    /// result was applied.
    pub fn finish_load<E>(&mut self, language: Language, result: Result<TranslationTable, E>) -> bool {
        if language != self.language {
            return false;
        }
        self.table = result.unwrap_or_else(|_| TranslationTable::fallback());
        self.state = LoadState::Ready;
        true
    }
}
