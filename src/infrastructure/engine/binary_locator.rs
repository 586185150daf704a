use std::path::{Path, PathBuf};

use crate::application::ports::SpeechEngineError;
use crate::config::EngineSettings;

/// Source-checkout location used when nothing else matches.
const LEGACY_RELATIVE_PATH: &str = "./whisper.cpp/build/bin/whisper-cli";

/// Resolves the engine executable by probing a fixed list of locations
/// in order: the configured path, the cmake build layout under the
/// install root, the pre-cmake `main` binary, and finally a source
/// checkout relative to the working directory.
///
/// Resolution runs on every call, so an install that appears while the
/// service is running is picked up without a restart.
pub fn resolve_engine_binary(settings: &EngineSettings) -> Result<PathBuf, SpeechEngineError> {
    let install_root = Path::new(&settings.install_root);
    let candidates = [
        PathBuf::from(&settings.executable_path),
        install_root.join("build").join("bin").join("whisper-cli"),
        install_root.join("main"),
        PathBuf::from(LEGACY_RELATIVE_PATH),
    ];

    for candidate in &candidates {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Engine executable resolved");
            return Ok(candidate.clone());
        }
    }

    Err(SpeechEngineError::NotFound(format!(
        "no executable found (configured: {}, install root: {})",
        settings.executable_path, settings.install_root,
    )))
}
