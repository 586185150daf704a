mod ffmpeg_normalizer;
mod ffprobe_duration;
mod mock_duration_probe;
mod mock_normalizer;

pub use ffmpeg_normalizer::FfmpegNormalizer;
pub use ffprobe_duration::FfprobeDurationProbe;
pub use mock_duration_probe::MockDurationProbe;
pub use mock_normalizer::MockNormalizer;
