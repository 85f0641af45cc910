//! Translation context.
//!
//! Holds the active locale and its table, loaded from the backend on mount
//! and after every locale switch. The locale is persisted in localStorage.
//! Views read strings through [`I18nContext::t`], which never fails.

mod api;
mod language_toggle;
mod storage;

pub use language_toggle::LanguageToggle;

use contracts::shared::i18n::{Language, TranslationStore};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Translation context type.
#[derive(Clone, Copy)]
pub struct I18nContext {
    store: RwSignal<TranslationStore>,
}

impl I18nContext {
    fn new(language: Language) -> Self {
        Self {
            store: RwSignal::new(TranslationStore::new(language)),
        }
    }

    /// Localized string for `key` (reactive).
    pub fn t(&self, key: &str) -> String {
        self.store.with(|s| s.t(key).to_string())
    }

    /// Same as [`Self::t`] without subscribing the caller.
    pub fn t_untracked(&self, key: &str) -> String {
        self.store.with_untracked(|s| s.t(key).to_string())
    }

    pub fn language(&self) -> Language {
        self.store.with(|s| s.language())
    }

    /// True only until the first table has been installed.
    pub fn is_loading(&self) -> bool {
        self.store.with(|s| s.is_loading())
    }

    /// Switch locale and persist the choice. Loading follows reactively.
    pub fn set_language(&self, language: Language) {
        let changed = self
            .store
            .try_update(|s| s.set_language(language))
            .unwrap_or(false);
        if changed {
            storage::save_language(language);
        }
    }

    fn load(&self, language: Language) {
        let store = self.store;
        spawn_local(async move {
            let result = api::fetch_translations(language).await;
            match &result {
                Ok(table) => log::debug!(
                    "Loaded {} translations for {}",
                    table.len(),
                    language.code()
                ),
                Err(e) => log::error!("Failed to load translations: {}", e),
            }
            store.update(|s| {
                if !s.finish_load(language, result) {
                    log::debug!("Dropped stale translations for {}", language.code());
                }
            });
        });
    }
}

/// Provides the translation context to children components.
#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let context = I18nContext::new(storage::load_language());
    provide_context(context);

    let language = Memo::new(move |_| context.store.with(|s| s.language()));
    Effect::new(move |_| {
        context.load(language.get());
    });

    children()
}

/// Hook to use the translation context.
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}
