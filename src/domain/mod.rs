mod audio_format;
mod request;
mod request_id;
mod scratch_file;
mod segment;
mod transcript;

pub use audio_format::AudioFormat;
pub use request::{TaskMode, TranscriptionRequest};
pub use request_id::RequestId;
pub use scratch_file::ScratchFile;
pub use segment::AudioSegment;
pub use transcript::Transcript;
