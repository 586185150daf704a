use std::path::{Path, PathBuf};

/// A temporary file staged for one transcription invocation.
///
/// Scratch files are owned by the invocation that acquired them and are
/// released when it completes, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchFile {
    path: PathBuf,
    suffix: String,
}

impl ScratchFile {
    pub fn new(path: PathBuf, suffix: impl Into<String>) -> Self {
        Self {
            path,
            suffix: suffix.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl std::fmt::Display for ScratchFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
