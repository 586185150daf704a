mod binary_locator;
mod mock_engine;
mod whisper_cpp_engine;
mod whisper_output;

pub use binary_locator::resolve_engine_binary;
pub use mock_engine::MockSpeechEngine;
pub use whisper_cpp_engine::{EngineHealth, WhisperCppEngine};
pub use whisper_output::parse_engine_output;
