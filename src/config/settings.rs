use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::{Deserialize, Serialize};

use super::environment::Environment;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub engine: EngineSettings,
    pub audio: AudioSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Explicit executable path, tried before the install-root layouts.
    pub executable_path: String,
    /// Root of the whisper.cpp checkout or install.
    pub install_root: String,
    pub model_path: String,
    pub threads: u32,
    pub processors: u32,
    /// Language reported when neither the caller nor the engine names one.
    pub default_language: String,
    /// Hard deadline for one engine run, in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub sample_rate: u32,
    pub channels: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// How many transcriptions may run at once.
    pub worker_count: usize,
    /// Jobs the queue holds before submitters start waiting.
    pub queue_depth: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            executable_path: String::new(),
            install_root: "./whisper.cpp".to_string(),
            model_path: "./models/ggml-base.en.bin".to_string(),
            threads: 4,
            processors: 1,
            default_language: "en".to_string(),
            timeout_secs: 300,
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
            sample_rate: 16_000,
            channels: 1,
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            worker_count: 4,
            queue_depth: 16,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,kuching=debug".to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Layers defaults, `appsettings.{environment}.toml` when present,
    /// and APP-prefixed environment variables (APP_ENGINE__MODEL_PATH
    /// overrides `engine.model_path`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        configuration.try_deserialize()
    }
}
