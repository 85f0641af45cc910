use contracts::shared::i18n::Language;
use web_sys::window;

const LANGUAGE_KEY: &str = "language";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Stored locale, or the default when unset or unreadable
pub fn load_language() -> Language {
    get_local_storage()
        .and_then(|storage| storage.get_item(LANGUAGE_KEY).ok().flatten())
        .map(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn save_language(language: Language) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LANGUAGE_KEY, language.code());
    }
}
