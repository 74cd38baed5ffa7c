use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use tradux::application::services::PipelineService;
use tradux::infrastructure::observability::{init_telemetry, TelemetryConfig};
use tradux::infrastructure::speech::GoogleSpeechTranscriber;
use tradux::infrastructure::storage::LocalScratchDir;
use tradux::infrastructure::transcode::FfmpegTranscoder;
use tradux::infrastructure::translate::GeminiTranslator;
use tradux::presentation::{create_router, AppState, Settings, StartupError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry(&TelemetryConfig::default());

    let settings = Settings::from_env();
    settings.validate()?;

    let transcoder = Arc::new(FfmpegTranscoder::new(settings.transcoder.command.clone()));
    // Both startup preconditions abort the process before the listener
    // binds; they never surface per-request.
    transcoder
        .probe()
        .await
        .map_err(|e| StartupError::TranscoderNotFound(e.to_string()))?;

    let transcriber = Arc::new(GoogleSpeechTranscriber::new(
        settings.speech.base_url.clone(),
        settings.speech.api_key.clone(),
        settings.speech.language.clone(),
    ));
    let translator = Arc::new(GeminiTranslator::new(
        settings.translation.base_url.clone(),
        settings.translation.api_key.clone(),
        settings.translation.model.clone(),
    ));
    let scratch = Arc::new(LocalScratchDir::new(PathBuf::from(
        &settings.storage.scratch_dir,
    ))?);

    let pipeline = Arc::new(PipelineService::new(
        transcoder, transcriber, translator, scratch,
    ));

    let state = AppState {
        pipeline,
        settings: settings.clone(),
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
