use std::path::Path;

use crate::application::ports::{EngineOutput, SpeechEngine, SpeechEngineError};
use crate::domain::TaskMode;

/// Speech engine that returns a canned output without touching the
/// audio file.
pub struct MockSpeechEngine {
    output: EngineOutput,
}

impl MockSpeechEngine {
    pub fn new(output: EngineOutput) -> Self {
        Self { output }
    }
}

#[async_trait::async_trait]
impl SpeechEngine for MockSpeechEngine {
    async fn transcribe(
        &self,
        _audio: &Path,
        _language: Option<&str>,
        _task: TaskMode,
    ) -> Result<EngineOutput, SpeechEngineError> {
        Ok(self.output.clone())
    }
}
