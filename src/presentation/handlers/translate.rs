use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{Transcoder, Transcriber, Translator};
use crate::domain::{AudioFormat, AudioUpload, TargetLanguage};
use crate::presentation::state::AppState;

pub const TRANSCRIPT_FILENAME: &str = "transcricao_original.txt";

#[derive(Serialize)]
pub struct TranslateResponse {
    pub transcript: String,
    pub translation: String,
    pub target_language: String,
    pub transcript_filename: String,
    pub translation_filename: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
    /// A transcript produced before a later stage failed is still returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

impl ErrorResponse {
    fn bad_request(error: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: error.into(),
                stage: None,
                transcript: None,
            }),
        )
    }
}

fn translation_filename(target: TargetLanguage) -> String {
    format!("traducao_{}.txt", target.label().to_lowercase())
}

#[tracing::instrument(skip(state, multipart))]
pub async fn translate_handler<T, S, L>(
    State(state): State<AppState<T, S, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    T: Transcoder + 'static,
    S: Transcriber + 'static,
    L: Translator + 'static,
{
    let mut upload: Option<AudioUpload> = None;
    let mut target: Option<TargetLanguage> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart body");
                return ErrorResponse::bad_request(format!("Failed to read multipart: {}", e))
                    .into_response();
            }
        };

        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                let format = match AudioFormat::from_mime(&mime) {
                    Some(f) => f,
                    None => {
                        tracing::warn!(content_type = %mime, "Rejected upload content type");
                        return (
                            StatusCode::UNSUPPORTED_MEDIA_TYPE,
                            Json(ErrorResponse {
                                error: format!("Unsupported audio type: {}", mime),
                                stage: None,
                                transcript: None,
                            }),
                        )
                            .into_response();
                    }
                };

                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read uploaded file");
                        return ErrorResponse::bad_request(format!("Failed to read file: {}", e))
                            .into_response();
                    }
                };

                tracing::debug!(filename = %filename, bytes = data.len(), "Audio upload received");
                upload = Some(AudioUpload::new(filename, format, data.to_vec()));
            }
            Some("target_language") => {
                let value = match field.text().await {
                    Ok(v) => v,
                    Err(e) => {
                        return ErrorResponse::bad_request(format!(
                            "Failed to read target language: {}",
                            e
                        ))
                        .into_response();
                    }
                };
                target = match TargetLanguage::parse(&value) {
                    Some(t) => Some(t),
                    None => {
                        return ErrorResponse::bad_request(format!(
                            "Unknown target language: {}",
                            value
                        ))
                        .into_response();
                    }
                };
            }
            _ => {}
        }
    }

    let (upload, target) = match (upload, target) {
        (Some(u), Some(t)) => (u, t),
        (None, _) => return ErrorResponse::bad_request("No audio file uploaded").into_response(),
        (_, None) => {
            return ErrorResponse::bad_request("No target language selected").into_response();
        }
    };

    let outcome = state.pipeline.run(upload, target).await;

    if let Some(failure) = &outcome.failure {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: failure.to_string(),
                stage: Some(failure.stage.label()),
                transcript: outcome.transcript,
            }),
        )
            .into_response();
    }

    let (transcript, translation) = match (outcome.transcript, outcome.translation) {
        (Some(transcript), Some(translation)) => (transcript, translation),
        // run() only omits a text when it also reports a failure.
        _ => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Pipeline produced no result".to_string(),
                    stage: None,
                    transcript: None,
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(TranslateResponse {
            transcript,
            translation,
            target_language: target.slug().to_string(),
            transcript_filename: TRANSCRIPT_FILENAME.to_string(),
            translation_filename: translation_filename(target),
        }),
    )
        .into_response()
}
