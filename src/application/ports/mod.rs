mod audio_normalizer;
mod duration_probe;
mod scratch_store;
mod speech_engine;

pub use audio_normalizer::{AudioNormalizer, NormalizerError};
pub use duration_probe::{DurationProbe, DurationProbeError};
pub use scratch_store::{ScratchStore, ScratchStoreError};
pub use speech_engine::{EngineOutput, SpeechEngine, SpeechEngineError};
