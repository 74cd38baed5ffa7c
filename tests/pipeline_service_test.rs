use std::sync::Arc;

use tradux::application::ports::{ScratchStore, TranscriptionError, TranslationError};
use tradux::application::services::PipelineService;
use tradux::domain::{AudioFormat, AudioUpload, Stage, TargetLanguage};
use tradux::infrastructure::speech::MockTranscriber;
use tradux::infrastructure::storage::LocalScratchDir;
use tradux::infrastructure::transcode::MockTranscoder;
use tradux::infrastructure::translate::MockTranslator;

fn upload() -> AudioUpload {
    AudioUpload::new("clip.mp3".to_string(), AudioFormat::Mp3, vec![0u8; 4096])
}

fn scratch_file_count(dir: &tempfile::TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

fn service(
    dir: &tempfile::TempDir,
    transcoder: MockTranscoder,
    transcriber: MockTranscriber,
    translator: MockTranslator,
) -> (
    Arc<MockTranscoder>,
    Arc<MockTranscriber>,
    Arc<MockTranslator>,
    PipelineService<MockTranscoder, MockTranscriber, MockTranslator>,
) {
    let scratch: Arc<dyn ScratchStore> =
        Arc::new(LocalScratchDir::new(dir.path().to_path_buf()).unwrap());
    let transcoder = Arc::new(transcoder);
    let transcriber = Arc::new(transcriber);
    let translator = Arc::new(translator);
    let pipeline = PipelineService::new(
        Arc::clone(&transcoder),
        Arc::clone(&transcriber),
        Arc::clone(&translator),
        scratch,
    );
    (transcoder, transcriber, translator, pipeline)
}

#[tokio::test]
async fn given_all_stages_succeed_when_running_then_outcome_is_complete() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_, _, _, pipeline) = service(
        &dir,
        MockTranscoder::succeeding(vec![0u8; 2048]),
        MockTranscriber::new(|| Ok("bom dia".to_string())),
        MockTranslator::new(|_, _| Ok("good morning".to_string())),
    );

    let outcome = pipeline.run(upload(), TargetLanguage::English).await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.transcript.as_deref(), Some("bom dia"));
    assert_eq!(outcome.translation.as_deref(), Some("good morning"));
    assert_eq!(outcome.target_language, TargetLanguage::English);
    assert_eq!(scratch_file_count(&dir), 0);
}

#[tokio::test]
async fn given_transcode_fails_when_running_then_later_stages_never_run_and_scratch_is_clean() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_, transcriber, translator, pipeline) = service(
        &dir,
        MockTranscoder::failing("Invalid data found when processing input"),
        MockTranscriber::new(|| Ok("unreachable".to_string())),
        MockTranslator::new(|_, _| Ok("unreachable".to_string())),
    );

    let outcome = pipeline.run(upload(), TargetLanguage::English).await;

    let failure = outcome.failure.expect("run should fail");
    assert_eq!(failure.stage, Stage::Transcode);
    assert!(failure.detail.contains("Invalid data found"));
    assert!(outcome.transcript.is_none());
    assert!(outcome.translation.is_none());
    assert_eq!(transcriber.calls(), 0);
    assert_eq!(translator.calls(), 0);
    assert_eq!(scratch_file_count(&dir), 0);
}

#[tokio::test]
async fn given_no_speech_when_running_then_translation_never_runs() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_, _, translator, pipeline) = service(
        &dir,
        MockTranscoder::succeeding(vec![0u8; 2048]),
        MockTranscriber::new(|| Err(TranscriptionError::NoSpeechDetected)),
        MockTranslator::new(|_, _| Ok("unreachable".to_string())),
    );

    let outcome = pipeline.run(upload(), TargetLanguage::English).await;

    let failure = outcome.failure.expect("run should fail");
    assert_eq!(failure.stage, Stage::Transcription);
    assert_eq!(translator.calls(), 0);
    assert_eq!(scratch_file_count(&dir), 0);
}

#[tokio::test]
async fn given_waveform_too_small_when_running_then_translation_never_runs() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_, _, translator, pipeline) = service(
        &dir,
        MockTranscoder::succeeding(vec![0u8; 512]),
        MockTranscriber::new(|| Err(TranscriptionError::TooSmall)),
        MockTranslator::new(|_, _| Ok("unreachable".to_string())),
    );

    let outcome = pipeline.run(upload(), TargetLanguage::English).await;

    let failure = outcome.failure.expect("run should fail");
    assert_eq!(failure.stage, Stage::Transcription);
    assert_eq!(translator.calls(), 0);
    assert_eq!(scratch_file_count(&dir), 0);
}

#[tokio::test]
async fn given_translation_fails_when_running_then_transcript_is_preserved() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_, _, _, pipeline) = service(
        &dir,
        MockTranscoder::succeeding(vec![0u8; 2048]),
        MockTranscriber::new(|| Ok("bom dia".to_string())),
        MockTranslator::new(|_, _| {
            Err(TranslationError::ServiceUnavailable(
                "status 401: API key not valid".to_string(),
            ))
        }),
    );

    let outcome = pipeline.run(upload(), TargetLanguage::English).await;

    let failure = outcome.failure.as_ref().expect("run should fail");
    assert_eq!(failure.stage, Stage::Translation);
    assert_eq!(outcome.transcript.as_deref(), Some("bom dia"));
    assert!(outcome.translation.is_none());
    assert!(!outcome.is_complete());
    assert_eq!(scratch_file_count(&dir), 0);
}

#[tokio::test]
async fn given_concurrent_runs_when_running_then_scratch_files_never_collide() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_, _, _, pipeline) = service(
        &dir,
        MockTranscoder::succeeding(vec![0u8; 2048]),
        MockTranscriber::new(|| Ok("bom dia".to_string())),
        MockTranslator::new(|_, _| Ok("good morning".to_string())),
    );
    let pipeline = Arc::new(pipeline);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let pipeline = Arc::clone(&pipeline);
        handles.push(tokio::spawn(async move {
            pipeline.run(upload(), TargetLanguage::Spanish).await
        }));
    }

    let outcomes = futures::future::join_all(handles).await;

    let mut run_ids = Vec::new();
    for outcome in outcomes {
        let outcome = outcome.unwrap();
        assert!(outcome.is_complete());
        run_ids.push(outcome.run_id);
    }
    run_ids.sort_by_key(|id| *id.as_uuid());
    run_ids.dedup();
    assert_eq!(run_ids.len(), 4);
    assert_eq!(scratch_file_count(&dir), 0);
}
