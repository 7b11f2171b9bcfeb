//! Pupil-channel selection and extraction
//!
//! The one decision-carrying component of the crate: scan the decoded streams
//! for the pupil-bearing one and reduce its samples to a flat series.
//!
//! - Streams are visited in container order; the effective name is matched
//!   case-insensitively against `"pupil"`.
//! - Single-channel streams pass through as-is.
//! - Multi-channel streams are scanned column by column; the first channel
//!   with at least one non-sentinel value wins.
//! - A matching stream without usable data is skipped, not terminal: a later
//!   pupil-named stream may still provide the series.

use crate::types::{SampleValue, StreamRecord, TimeSeries};

/// Extract the pupil-size series from a decoded stream list.
///
/// Returns the samples of the first stream whose effective name contains
/// `"pupil"` (case-insensitive) and which carries usable data under either
/// layout. An empty vector means "no usable pupil data found" and is a
/// defined result, not an error; the input snapshot is never mutated.
pub fn extract_pupil_sizes(streams: &[StreamRecord]) -> Vec<SampleValue> {
    for stream in streams {
        if !stream.is_pupil_stream() {
            continue;
        }

        match &stream.time_series {
            TimeSeries::Absent => continue,
            TimeSeries::Scalars(values) => {
                if values.is_empty() {
                    continue;
                }
                return values.clone();
            }
            TimeSeries::Matrix(rows) => {
                if let Some(channel) = first_live_channel(rows) {
                    return channel;
                }
                // every column is all-sentinel; keep scanning later streams
            }
        }
    }

    Vec::new()
}

/// First channel, in column index order, holding at least one non-sentinel
/// value. Ragged rows truncate the scan to the shortest row. Sentinel entries
/// within the chosen channel are kept; only whole-channel degeneracy is
/// skipped.
///
/// Channel semantics (left/right eye, raw/filtered) are not disambiguated;
/// the first live channel is taken as representative.
fn first_live_channel(rows: &[Vec<SampleValue>]) -> Option<Vec<SampleValue>> {
    let width = rows.iter().map(Vec::len).min().unwrap_or(0);

    for index in 0..width {
        let channel: Vec<SampleValue> = rows.iter().map(|row| row[index]).collect();
        if channel.iter().any(|value| !value.is_sentinel()) {
            return Some(channel);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_stream(stream_id: u32, name: &str, time_series: TimeSeries) -> StreamRecord {
        StreamRecord {
            stream_id,
            names: vec![name.to_string()],
            time_series,
        }
    }

    fn scalars(values: &[f64]) -> TimeSeries {
        TimeSeries::Scalars(values.iter().map(|v| SampleValue::Float(*v)).collect())
    }

    fn matrix(rows: &[&[f64]]) -> TimeSeries {
        TimeSeries::Matrix(
            rows.iter()
                .map(|row| row.iter().map(|v| SampleValue::Float(*v)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_single_channel_passthrough() {
        let streams = vec![make_stream(1, "Pupil", scalars(&[1.0, 2.0, 3.0]))];

        let result = extract_pupil_sizes(&streams);
        assert_eq!(
            result,
            vec![
                SampleValue::Float(1.0),
                SampleValue::Float(2.0),
                SampleValue::Float(3.0)
            ]
        );
    }

    #[test]
    fn test_multi_channel_skips_all_sentinel_column() {
        let streams = vec![make_stream(
            1,
            "pupil_diam",
            matrix(&[&[-1.0, -1.0], &[-1.0, -1.0], &[-1.0, 5.0]]),
        )];

        let result = extract_pupil_sizes(&streams);
        assert_eq!(
            result,
            vec![
                SampleValue::Float(-1.0),
                SampleValue::Float(-1.0),
                SampleValue::Float(5.0)
            ]
        );
    }

    #[test]
    fn test_no_matching_stream_yields_empty() {
        let streams = vec![
            make_stream(1, "EEG", matrix(&[&[0.1, 0.2], &[0.3, 0.4]])),
            make_stream(2, "Markers", scalars(&[1.0, 2.0])),
        ];

        assert_eq!(extract_pupil_sizes(&streams), Vec::new());
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let upper = vec![make_stream(1, "PUPIL_L", scalars(&[4.2]))];
        let lower = vec![make_stream(1, "pupil_l", scalars(&[4.2]))];

        assert_eq!(extract_pupil_sizes(&upper), extract_pupil_sizes(&lower));
        assert_eq!(extract_pupil_sizes(&upper), vec![SampleValue::Float(4.2)]);
    }

    #[test]
    fn test_empty_pupil_stream_falls_through_to_next() {
        let streams = vec![
            make_stream(1, "pupil_raw", TimeSeries::Absent),
            make_stream(2, "pupil_filtered", scalars(&[0.5, 0.6])),
        ];

        let result = extract_pupil_sizes(&streams);
        assert_eq!(
            result,
            vec![SampleValue::Float(0.5), SampleValue::Float(0.6)]
        );
    }

    #[test]
    fn test_all_sentinel_matrix_falls_through_to_next() {
        let streams = vec![
            make_stream(1, "pupil_left", matrix(&[&[-1.0, -1.0], &[-1.0, -1.0]])),
            make_stream(2, "pupil_right", scalars(&[3.1])),
        ];

        assert_eq!(extract_pupil_sizes(&streams), vec![SampleValue::Float(3.1)]);
    }

    #[test]
    fn test_width_one_all_sentinel_rows_fall_through() {
        let streams = vec![
            make_stream(
                1,
                "pupil_left",
                TimeSeries::from_rows(vec![
                    vec![SampleValue::Float(-1.0)],
                    vec![SampleValue::Float(-1.0)],
                ]),
            ),
            make_stream(2, "pupil_right", scalars(&[3.1])),
        ];

        assert_eq!(extract_pupil_sizes(&streams), vec![SampleValue::Float(3.1)]);
    }

    #[test]
    fn test_width_one_rows_reduce_to_flat_column() {
        let streams = vec![make_stream(
            1,
            "Pupil",
            TimeSeries::from_rows(vec![
                vec![SampleValue::Float(1.0)],
                vec![SampleValue::Float(2.0)],
                vec![SampleValue::Float(3.0)],
            ]),
        )];

        let result = extract_pupil_sizes(&streams);
        assert_eq!(
            result,
            vec![
                SampleValue::Float(1.0),
                SampleValue::Float(2.0),
                SampleValue::Float(3.0)
            ]
        );
    }

    #[test]
    fn test_all_sentinel_matrix_alone_yields_empty() {
        let streams = vec![make_stream(
            1,
            "pupil_diam",
            matrix(&[&[-1.0, -1.0], &[-1.0, -1.0]]),
        )];

        assert_eq!(extract_pupil_sizes(&streams), Vec::new());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let streams = vec![
            make_stream(1, "Gaze", matrix(&[&[0.0, 0.0]])),
            make_stream(2, "Pupil", matrix(&[&[-1.0, 2.0], &[-1.0, 2.1]])),
        ];
        let snapshot = streams.clone();

        let first = extract_pupil_sizes(&streams);
        let second = extract_pupil_sizes(&streams);
        assert_eq!(first, second);
        assert_eq!(streams, snapshot);
    }

    #[test]
    fn test_first_live_channel_wins() {
        let streams = vec![make_stream(
            1,
            "pupil_size",
            matrix(&[&[2.0, 7.0], &[2.1, 7.1]]),
        )];

        let result = extract_pupil_sizes(&streams);
        assert_eq!(
            result,
            vec![SampleValue::Float(2.0), SampleValue::Float(2.1)]
        );
    }

    #[test]
    fn test_ragged_rows_truncate_to_shortest() {
        // second column exists only in the first row, so only the first
        // (all-sentinel) column is scannable and nothing usable remains
        let streams = vec![make_stream(
            1,
            "pupil_diam",
            matrix(&[&[-1.0, 5.0], &[-1.0]]),
        )];

        assert_eq!(extract_pupil_sizes(&streams), Vec::new());
    }

    #[test]
    fn test_integer_samples_survive_unchanged() {
        let streams = vec![make_stream(
            1,
            "pupil_mm",
            TimeSeries::Matrix(vec![
                vec![SampleValue::Int(-1), SampleValue::Int(3)],
                vec![SampleValue::Int(-1), SampleValue::Int(4)],
            ]),
        )];

        let result = extract_pupil_sizes(&streams);
        assert_eq!(result, vec![SampleValue::Int(3), SampleValue::Int(4)]);
    }
}
