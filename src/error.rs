//! Error types for pupilscan

use thiserror::Error;

/// Errors that can occur while loading or encoding a recording.
///
/// Extraction itself has no failure modes: a recording without usable pupil
/// data yields an empty series, not an error.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read recording file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode XDF container: {0}")]
    Decode(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
