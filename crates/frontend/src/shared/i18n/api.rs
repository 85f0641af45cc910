use contracts::shared::api_error::ApiError;
use contracts::shared::i18n::{Language, TranslationTable, TranslationsQuery, TranslationsResponse};

use crate::shared::api_utils::get_json;

/// Full table for `language`. The `t` query defeats HTTP caches so edited
/// translations show up without a hard reload.
pub async fn fetch_translations(language: Language) -> Result<TranslationTable, ApiError> {
    let query = TranslationsQuery {
        t: js_sys::Date::now() as i64,
    };
    let path = translations_path(language, &query)?;
    let resp: TranslationsResponse = get_json(&path).await?;
    Ok(resp.translations)
}

fn translations_path(language: Language, query: &TranslationsQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(format!("/translations/{}?{}", language.code(), qs))
}
