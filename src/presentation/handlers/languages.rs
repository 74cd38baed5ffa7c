use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::TargetLanguage;

#[derive(Serialize)]
pub struct LanguageEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// Lists the fixed set of target languages the pipeline can translate into.
pub async fn languages_handler() -> impl IntoResponse {
    let languages: Vec<LanguageEntry> = TargetLanguage::ALL
        .iter()
        .map(|lang| LanguageEntry {
            id: lang.slug(),
            label: lang.label(),
        })
        .collect();

    Json(languages)
}
