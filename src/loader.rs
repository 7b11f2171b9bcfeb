//! Container boundary
//!
//! Decodes an XDF recording through the external `xdf` crate and converts the
//! decoded streams into the crate's own records. All knowledge of the
//! decoder's types stays in this module; layout detection happens exactly
//! once here, in [`TimeSeries::from_rows`].

use std::fs;
use std::path::Path;

use xdf::{Values, XDFFile};

use crate::error::ExtractError;
use crate::types::{Recording, SampleValue, StreamRecord, TimeSeries};

/// Load and decode a recording file into an immutable snapshot.
///
/// A missing, unreadable, or structurally invalid container is fatal for the
/// invocation and propagates as [`ExtractError::Io`] or
/// [`ExtractError::Decode`]; everything past this boundary is infallible.
pub fn load_recording(path: &Path) -> Result<Recording, ExtractError> {
    let bytes = fs::read(path)?;
    let container =
        XDFFile::from_bytes(&bytes).map_err(|e| ExtractError::Decode(e.to_string()))?;

    let version = container
        .header
        .get_child("version")
        .and_then(|element| element.get_text())
        .map(|text| text.into_owned());

    let streams = container
        .streams
        .iter()
        .map(|stream| {
            let names = stream.name.iter().map(|name| name.to_string()).collect();

            let rows: Vec<Vec<SampleValue>> = stream
                .samples
                .iter()
                .map(|sample| sample_row(&sample.values))
                .collect();

            // marker/string streams decode to rows without numeric values;
            // they carry no pupil data and degrade to an absent series
            let rows = if rows.iter().all(Vec::is_empty) {
                Vec::new()
            } else {
                rows
            };

            StreamRecord {
                stream_id: stream.id,
                names,
                time_series: TimeSeries::from_rows(rows),
            }
        })
        .collect();

    Ok(Recording { version, streams })
}

/// One sample's per-channel values as a numeric row.
fn sample_row(values: &Values) -> Vec<SampleValue> {
    match values {
        Values::Int8(v) => v.iter().map(|x| SampleValue::Int(i64::from(*x))).collect(),
        Values::Int16(v) => v.iter().map(|x| SampleValue::Int(i64::from(*x))).collect(),
        Values::Int32(v) => v.iter().map(|x| SampleValue::Int(i64::from(*x))).collect(),
        Values::Int64(v) => v.iter().map(|x| SampleValue::Int(*x)).collect(),
        Values::Float32(v) => v
            .iter()
            .map(|x| SampleValue::Float(f64::from(*x)))
            .collect(),
        Values::Float64(v) => v.iter().map(|x| SampleValue::Float(*x)).collect(),
        Values::String(_) => Vec::new(),
    }
}
