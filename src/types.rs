//! Core types for the pupilscan pipeline
//!
//! This module defines the data structures that flow from the container
//! boundary to the extractor: numeric samples, stream layouts, stream records,
//! and the decoded recording snapshot.

use serde::{Deserialize, Serialize};

/// Substring that marks a stream as a pupil-size source (matched
/// case-insensitively against the effective stream name).
pub const PUPIL_NAME_MARKER: &str = "pupil";

/// Sentinel written by some eye trackers for "no reading / tracking lost".
/// A multi-channel column that is all sentinel is not a real pupil channel.
pub const SENTINEL: f64 = -1.0;

/// A single numeric sample.
///
/// The variant records whether the source stream carried an integer or a
/// floating-point channel format, so that serialization can render integer
/// samples as plain JSON integers and float samples as plain JSON floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Int(i64),
    Float(f64),
}

impl SampleValue {
    /// True if this sample is the "no reading" sentinel (`-1`)
    pub fn is_sentinel(&self) -> bool {
        match self {
            SampleValue::Int(v) => *v == SENTINEL as i64,
            SampleValue::Float(v) => *v == SENTINEL,
        }
    }
}

/// Sample layout of a stream, decided once at the loader boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One scalar per sample point
    SingleChannel,
    /// Multiple channels per sample point
    MultiChannel,
    /// No usable samples
    Absent,
}

/// A stream's time series in one of the container's layout conventions.
///
/// The scalar-vs-matrix ambiguity of the container format is resolved exactly
/// once, in [`TimeSeries::from_rows`]; downstream code matches on the variant
/// instead of re-inspecting sample shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSeries {
    /// Single-channel layout: a flat ordered sequence of samples
    Scalars(Vec<SampleValue>),
    /// Multi-channel layout: one row of per-channel values per sample point
    Matrix(Vec<Vec<SampleValue>>),
    /// No data
    Absent,
}

impl TimeSeries {
    /// Classify row-major sample data into its layout.
    ///
    /// Zero rows map to [`TimeSeries::Absent`]; any row-shaped data stays a
    /// row-major matrix, including rows of width one, so that the channel
    /// sentinel rule applies uniformly. [`TimeSeries::Scalars`] is reserved
    /// for input that is genuinely flat at the source.
    pub fn from_rows(rows: Vec<Vec<SampleValue>>) -> Self {
        if rows.is_empty() {
            TimeSeries::Absent
        } else {
            TimeSeries::Matrix(rows)
        }
    }

    /// Channel arity of the stream, for inventory purposes.
    pub fn layout(&self) -> Layout {
        match self.channel_count() {
            0 => Layout::Absent,
            1 => Layout::SingleChannel,
            _ => Layout::MultiChannel,
        }
    }

    /// Number of sample points (rows)
    pub fn sample_count(&self) -> usize {
        match self {
            TimeSeries::Scalars(values) => values.len(),
            TimeSeries::Matrix(rows) => rows.len(),
            TimeSeries::Absent => 0,
        }
    }

    /// Number of channels per sample point (zip semantics for the matrix
    /// layout: ragged rows truncate to the shortest)
    pub fn channel_count(&self) -> usize {
        match self {
            TimeSeries::Scalars(values) if !values.is_empty() => 1,
            TimeSeries::Matrix(rows) => rows.iter().map(Vec::len).min().unwrap_or(0),
            _ => 0,
        }
    }
}

/// One decoded channel group of a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Container-assigned stream identifier
    pub stream_id: u32,
    /// Name list from the stream header (the container format allows a list
    /// for historical reasons; in practice it holds zero or one entries)
    pub names: Vec<String>,
    /// Sample data in its detected layout
    pub time_series: TimeSeries,
}

impl StreamRecord {
    /// Effective stream name: the first entry of the name list, or `""` when
    /// the header carries no name.
    pub fn effective_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    /// True if the effective name marks this stream as a pupil source
    pub fn is_pupil_stream(&self) -> bool {
        self.effective_name()
            .to_lowercase()
            .contains(PUPIL_NAME_MARKER)
    }
}

/// Decoded snapshot of one recording file.
///
/// Built once per load by the loader boundary and consumed read-only by the
/// extractor; nothing is cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Container format version from the file header, kept as opaque
    /// pass-through metadata (never inspected by the extractor)
    pub version: Option<String>,
    /// Streams in container order
    pub streams: Vec<StreamRecord>,
}

/// Serializable inventory row describing one stream of a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSummary {
    pub stream_id: u32,
    pub name: String,
    pub layout: Layout,
    pub channel_count: usize,
    pub sample_count: usize,
}
