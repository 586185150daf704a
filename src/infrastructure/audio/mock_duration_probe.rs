use std::path::Path;

use crate::application::ports::{DurationProbe, DurationProbeError};

/// Duration probe that reports a fixed value.
pub struct MockDurationProbe {
    duration: f64,
}

impl MockDurationProbe {
    pub fn new(duration: f64) -> Self {
        Self { duration }
    }
}

#[async_trait::async_trait]
impl DurationProbe for MockDurationProbe {
    async fn duration_secs(&self, _audio: &Path) -> Result<f64, DurationProbeError> {
        Ok(self.duration)
    }
}
