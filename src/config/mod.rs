mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{AudioSettings, EngineSettings, LoggingSettings, PipelineSettings, Settings};
