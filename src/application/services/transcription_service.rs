use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{
    AudioNormalizer, DurationProbe, EngineOutput, NormalizerError, ScratchStore,
    ScratchStoreError, SpeechEngine, SpeechEngineError,
};
use crate::domain::{RequestId, ScratchFile, Transcript, TranscriptionRequest};

/// Orchestrates one transcription invocation end to end: stage the
/// upload, normalize it, run recognition, enrich with the audio
/// duration and assemble the transcript.
///
/// Every scratch file acquired along the way is released when the
/// invocation finishes, on success and on every failure path alike.
pub struct TranscriptionService<S, N, E, D> {
    scratch_store: Arc<S>,
    normalizer: Arc<N>,
    engine: Arc<E>,
    duration_probe: Arc<D>,
    default_language: String,
}

/// Scratch files acquired by a single invocation, in acquisition order.
struct ScratchSession {
    request_id: RequestId,
    files: Vec<ScratchFile>,
}

impl ScratchSession {
    fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            files: Vec::new(),
        }
    }
}

impl<S, N, E, D> TranscriptionService<S, N, E, D>
where
    S: ScratchStore,
    N: AudioNormalizer,
    E: SpeechEngine,
    D: DurationProbe,
{
    pub fn new(
        scratch_store: Arc<S>,
        normalizer: Arc<N>,
        engine: Arc<E>,
        duration_probe: Arc<D>,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            scratch_store,
            normalizer,
            engine,
            duration_probe,
            default_language: default_language.into(),
        }
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionPipelineError> {
        let request_id = RequestId::new();
        tracing::info!(
            request_id = %request_id,
            format = %request.format,
            task = %request.task,
            bytes = request.audio.len(),
            "Transcription started"
        );

        let mut session = ScratchSession::new(request_id);
        let result = self.run_pipeline(&request, &mut session).await;

        // Sweep failures are logged and never replace the pipeline outcome.
        self.sweep(&session).await;

        if let Ok(transcript) = &result {
            tracing::info!(
                request_id = %request_id,
                segments = transcript.segments.len(),
                duration = transcript.duration,
                processing_time = transcript.processing_time,
                "Transcription completed"
            );
        }

        result
    }

    async fn run_pipeline(
        &self,
        request: &TranscriptionRequest,
        session: &mut ScratchSession,
    ) -> Result<Transcript, TranscriptionPipelineError> {
        let started = Instant::now();

        let upload_suffix = format!(".{}", request.format.extension());
        let upload = self.acquire(session, &upload_suffix).await?;
        tokio::fs::write(&upload, &request.audio)
            .await
            .map_err(TranscriptionPipelineError::StageUpload)?;
        tracing::debug!(path = %upload.display(), "Upload staged");

        let canonical = self.acquire(session, ".wav").await?;
        self.normalizer
            .normalize(&upload, &canonical)
            .await
            .map_err(TranscriptionPipelineError::Normalization)?;
        tracing::debug!(path = %canonical.display(), "Audio normalized");

        let output = self
            .engine
            .transcribe(&canonical, request.language.as_deref(), request.task)
            .await
            .map_err(TranscriptionPipelineError::Recognition)?;

        let duration = match self.duration_probe.duration_secs(&canonical).await {
            Ok(duration) => duration,
            Err(e) => {
                tracing::warn!(error = %e, "Duration probe failed, reporting zero duration");
                0.0
            }
        };

        // Caller hint wins over whatever the engine detected.
        let language = request
            .language
            .clone()
            .or_else(|| output.language().map(str::to_string))
            .unwrap_or_else(|| self.default_language.clone());

        let (segments, fallback_text) = match output {
            EngineOutput::Structured { segments, .. } => (segments, String::new()),
            EngineOutput::PlainText { text } => (Vec::new(), text),
        };

        Ok(Transcript::assemble(
            segments,
            &fallback_text,
            language,
            duration,
            started.elapsed().as_secs_f64(),
        ))
    }

    async fn acquire(
        &self,
        session: &mut ScratchSession,
        suffix: &str,
    ) -> Result<PathBuf, TranscriptionPipelineError> {
        let file = self
            .scratch_store
            .acquire(session.request_id, suffix)
            .await
            .map_err(TranscriptionPipelineError::Scratch)?;
        let path = file.path().to_path_buf();
        session.files.push(file);
        Ok(path)
    }

    async fn sweep(&self, session: &ScratchSession) {
        for file in &session.files {
            if let Err(e) = self.scratch_store.release(file).await {
                tracing::warn!(
                    error = %e,
                    path = %file,
                    "Failed to release scratch file"
                );
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionPipelineError {
    #[error("scratch store: {0}")]
    Scratch(ScratchStoreError),
    #[error("staging upload: {0}")]
    StageUpload(std::io::Error),
    #[error("audio normalization: {0}")]
    Normalization(NormalizerError),
    #[error("speech recognition: {0}")]
    Recognition(SpeechEngineError),
    #[error("transcription workers unavailable")]
    WorkersUnavailable,
}
