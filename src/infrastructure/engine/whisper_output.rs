use serde::Deserialize;

use crate::application::ports::{EngineOutput, SpeechEngineError};
use crate::domain::AudioSegment;

#[derive(Debug, Deserialize)]
struct RawDocument {
    result: Option<RawResult>,
    transcription: Option<Vec<serde_json::Value>>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    timestamps: RawTimestamps,
    #[serde(default)]
    text: String,
}

/// Segment bounds as the engine reports them, in centiseconds.
#[derive(Debug, Default, Deserialize)]
struct RawTimestamps {
    #[serde(default)]
    from: f64,
    #[serde(default)]
    to: f64,
}

/// Interprets what a recognition run produced.
///
/// The structured JSON document is preferred: first the side file the
/// engine writes next to the audio, then the process stdout if it
/// parses as JSON. Anything else is treated as plain text with the
/// engine's bracketed timestamp lines dropped.
pub fn parse_engine_output(
    side_file: Option<&str>,
    stdout: &str,
) -> Result<EngineOutput, SpeechEngineError> {
    if let Some(payload) = side_file {
        let document: RawDocument = serde_json::from_str(payload)
            .map_err(|e| SpeechEngineError::MalformedOutput(format!("output file: {}", e)))?;
        return Ok(from_document(document));
    }

    if let Ok(document) = serde_json::from_str::<RawDocument>(stdout) {
        return Ok(from_document(document));
    }

    Ok(EngineOutput::PlainText {
        text: strip_timestamp_lines(stdout),
    })
}

fn from_document(document: RawDocument) -> EngineOutput {
    let language = document.result.and_then(|r| r.language);

    let mut segments: Vec<AudioSegment> = document
        .transcription
        .unwrap_or_default()
        .into_iter()
        // Entries that are not objects are skipped rather than failing
        // the whole run.
        .filter_map(|value| serde_json::from_value::<RawEntry>(value).ok())
        .map(|entry| {
            AudioSegment::new(
                entry.timestamps.from / 100.0,
                entry.timestamps.to / 100.0,
                entry.text.trim(),
            )
        })
        .collect();

    if segments.is_empty() {
        return EngineOutput::PlainText {
            text: document.text.unwrap_or_default().trim().to_string(),
        };
    }

    segments.sort_by(|a, b| a.start.total_cmp(&b.start));
    EngineOutput::Structured { language, segments }
}

fn strip_timestamp_lines(stdout: &str) -> String {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('['))
        .collect::<Vec<_>>()
        .join(" ")
}
