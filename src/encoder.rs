//! Output encoding
//!
//! Serializes extraction results and stream inventories to JSON. This is the
//! one place where sample values become interchange numbers: integer-format
//! samples render as plain JSON integers, float-format samples as plain JSON
//! floats.

use crate::error::ExtractError;
use crate::types::{Recording, SampleValue, StreamSummary};

/// Encode a pupil-size series as a JSON array.
pub fn encode_series(values: &[SampleValue]) -> Result<String, ExtractError> {
    serde_json::to_string(values).map_err(ExtractError::Json)
}

/// Encode a pupil-size series as a pretty-printed JSON array.
pub fn encode_series_pretty(values: &[SampleValue]) -> Result<String, ExtractError> {
    serde_json::to_string_pretty(values).map_err(ExtractError::Json)
}

/// Build the stream inventory of a decoded recording, in container order.
pub fn summarize_streams(recording: &Recording) -> Vec<StreamSummary> {
    recording
        .streams
        .iter()
        .map(|stream| StreamSummary {
            stream_id: stream.stream_id,
            name: stream.effective_name().to_string(),
            layout: stream.time_series.layout(),
            channel_count: stream.time_series.channel_count(),
            sample_count: stream.time_series.sample_count(),
        })
        .collect()
}

/// Encode a stream inventory as pretty-printed JSON.
pub fn encode_summaries(summaries: &[StreamSummary]) -> Result<String, ExtractError> {
    serde_json::to_string_pretty(summaries).map_err(ExtractError::Json)
}
