mod transcription_service;
mod transcription_worker;

pub use transcription_service::{TranscriptionPipelineError, TranscriptionService};
pub use transcription_worker::{TranscriptionJob, TranscriptionWorkerPool};
