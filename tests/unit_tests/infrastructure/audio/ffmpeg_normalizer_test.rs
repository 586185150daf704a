use kuching::application::ports::{AudioNormalizer, NormalizerError};
use kuching::infrastructure::audio::FfmpegNormalizer;

fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn ffmpeg_available() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[tokio::test]
async fn given_wav_input_when_normalizing_then_writes_canonical_wav() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.wav");
    let output = dir.path().join("output.wav");
    std::fs::write(&input, build_wav(44_100, &vec![0i16; 4410])).unwrap();

    let normalizer = FfmpegNormalizer::new("ffmpeg", 16_000, 1);
    normalizer.normalize(&input, &output).await.unwrap();

    let written = std::fs::read(&output).unwrap();
    assert!(written.len() > 44);
    assert_eq!(&written[..4], b"RIFF");
}

#[tokio::test]
async fn given_corrupt_input_when_normalizing_then_conversion_failed_with_diagnostics() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage.wav");
    let output = dir.path().join("output.wav");
    std::fs::write(&input, vec![0xFFu8; 64]).unwrap();

    let normalizer = FfmpegNormalizer::new("ffmpeg", 16_000, 1);
    let result = normalizer.normalize(&input, &output).await;

    match result {
        Err(NormalizerError::ConversionFailed(message)) => {
            assert!(!message.is_empty(), "ffmpeg diagnostics should be carried");
        }
        other => panic!("expected conversion failure, got {:?}", other.is_ok()),
    }
}

#[tokio::test]
async fn given_missing_binary_when_normalizing_then_converter_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.wav");
    let output = dir.path().join("output.wav");
    std::fs::write(&input, b"irrelevant").unwrap();

    let normalizer = FfmpegNormalizer::new("/nonexistent/ffmpeg-binary", 16_000, 1);
    let result = normalizer.normalize(&input, &output).await;

    assert!(matches!(
        result,
        Err(NormalizerError::ConverterNotFound(_))
    ));
}
