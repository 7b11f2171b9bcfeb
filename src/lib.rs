//! Pupilscan - Pupil-size extraction from multi-stream XDF recordings
//!
//! XDF (Lab Streaming Layer) containers multiplex many time-synchronized
//! streams recorded by independent devices. Pupilscan reduces such a
//! recording to one flat series of pupil-size samples:
//! container decoding (external `xdf` crate) → stream conversion →
//! pupil-channel selection → JSON encoding.
//!
//! ## Modules
//!
//! - **loader**: boundary over the external container decoder
//! - **extractor**: pupil-stream selection and channel reduction (the core)
//! - **encoder**: JSON serialization of series and stream inventories

pub mod encoder;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod types;

use std::path::Path;

pub use error::ExtractError;
pub use extractor::extract_pupil_sizes;
pub use loader::load_recording;
pub use types::{Recording, SampleValue, StreamRecord, TimeSeries};

/// Pupilscan version embedded in diagnostics
pub const PUPILSCAN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a recording file and extract its pupil-size series in one call.
///
/// An empty series means "no usable pupil data found" and is a defined
/// result; only I/O and container-decode failures return an error.
///
/// # Example
/// ```ignore
/// let sizes = pupilscan::pupil_sizes_from_file(Path::new("session.xdf"))?;
/// ```
pub fn pupil_sizes_from_file(path: &Path) -> Result<Vec<SampleValue>, ExtractError> {
    let recording = load_recording(path)?;
    Ok(extract_pupil_sizes(&recording.streams))
}
