use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use tokio::process::Command;

use crate::application::ports::{EngineOutput, SpeechEngine, SpeechEngineError};
use crate::config::EngineSettings;
use crate::domain::TaskMode;

use super::binary_locator::resolve_engine_binary;
use super::whisper_output::parse_engine_output;

/// Speech engine backed by a local whisper.cpp installation.
///
/// Each run spawns one engine process against the canonical WAV and
/// collects the JSON document the engine writes next to it.
pub struct WhisperCppEngine {
    settings: EngineSettings,
}

/// Install facts for a health endpoint to report.
#[derive(Debug, Serialize)]
pub struct EngineHealth {
    pub install_root_exists: bool,
    pub model_exists: bool,
    pub executable: Option<PathBuf>,
}

impl WhisperCppEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn health_status(&self) -> EngineHealth {
        EngineHealth {
            install_root_exists: Path::new(&self.settings.install_root).exists(),
            model_exists: Path::new(&self.settings.model_path).is_file(),
            executable: resolve_engine_binary(&self.settings).ok(),
        }
    }
}

/// The engine drops its JSON next to the audio file, as `<audio>.json`.
fn side_output_path(audio: &Path) -> PathBuf {
    let mut raw = OsString::from(audio.as_os_str());
    raw.push(".json");
    PathBuf::from(raw)
}

#[async_trait::async_trait]
impl SpeechEngine for WhisperCppEngine {
    async fn transcribe(
        &self,
        audio: &Path,
        language: Option<&str>,
        task: TaskMode,
    ) -> Result<EngineOutput, SpeechEngineError> {
        let binary = resolve_engine_binary(&self.settings)?;

        let mut command = Command::new(&binary);
        command
            .arg("-m")
            .arg(&self.settings.model_path)
            .arg("-f")
            .arg(audio)
            .args(["-t", &self.settings.threads.to_string()])
            .args(["-p", &self.settings.processors.to_string()]);
        if let Some(language) = language {
            command.args(["-l", language]);
        }
        if task == TaskMode::Translate {
            command.arg("-tr");
        }
        command.arg("-oj");
        command.kill_on_drop(true);

        tracing::debug!(
            binary = %binary.display(),
            audio = %audio.display(),
            "Invoking speech engine"
        );

        let deadline = Duration::from_secs(self.settings.timeout_secs);
        let output = match tokio::time::timeout(deadline, command.output()).await {
            Ok(result) => result.map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    SpeechEngineError::NotFound(format!("{}: {}", binary.display(), e))
                } else {
                    SpeechEngineError::Io(e)
                }
            })?,
            // kill_on_drop reaps the child when the timed-out future is
            // dropped.
            Err(_) => {
                return Err(SpeechEngineError::TimedOut {
                    seconds: self.settings.timeout_secs,
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechEngineError::ExecutionFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        let side_file = side_output_path(audio);
        let payload = match tokio::fs::read_to_string(&side_file).await {
            Ok(contents) => {
                if let Err(e) = tokio::fs::remove_file(&side_file).await {
                    tracing::warn!(
                        error = %e,
                        path = %side_file.display(),
                        "Failed to delete engine output file"
                    );
                }
                Some(contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(SpeechEngineError::Io(e)),
        };

        let parsed = parse_engine_output(payload.as_deref(), &stdout)?;
        match &parsed {
            EngineOutput::Structured { segments, .. } => {
                tracing::info!(segments = segments.len(), "Speech engine run completed");
            }
            EngineOutput::PlainText { text } => {
                tracing::info!(
                    chars = text.len(),
                    "Speech engine run completed without segments"
                );
            }
        }
        Ok(parsed)
    }
}
