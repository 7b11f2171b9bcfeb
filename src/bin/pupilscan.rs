//! Pupilscan CLI - Command-line interface for pupilscan
//!
//! Takes one recording path, writes the extracted pupil-size series as a JSON
//! array on stdout (or a file), and keeps all diagnostics on stderr. An empty
//! array is a successful result meaning "no usable pupil data found".

use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use pupilscan::encoder;
use pupilscan::{extract_pupil_sizes, load_recording, ExtractError, PUPILSCAN_VERSION};

/// Pupilscan - extract pupil-size samples from an XDF recording
#[derive(Parser)]
#[command(name = "pupilscan")]
#[command(version = PUPILSCAN_VERSION)]
#[command(about = "Extract pupil-size samples from a multi-stream XDF recording", long_about = None)]
struct Cli {
    /// Path to the XDF recording file
    input: PathBuf,

    /// Pretty-print the output array
    #[arg(long)]
    pretty: bool,

    /// Print the recording's stream inventory to stderr before the result
    #[arg(long)]
    streams: bool,

    /// Output file path (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PupilCliError> {
    let recording = load_recording(&cli.input)?;

    if cli.streams {
        eprintln!("Input file: {}", cli.input.display());
        let summaries = encoder::summarize_streams(&recording);
        eprintln!("{}", encoder::encode_summaries(&summaries)?);
    }

    let series = extract_pupil_sizes(&recording.streams);

    let output_data = if cli.pretty {
        encoder::encode_series_pretty(&series)?
    } else {
        encoder::encode_series(&series)?
    };

    if cli.output.to_string_lossy() == "-" {
        println!("{}", output_data);
    } else {
        fs::write(&cli.output, output_data + "\n")?;
    }

    Ok(())
}

// Error types

#[derive(Debug)]
enum PupilCliError {
    Io(io::Error),
    Extract(ExtractError),
}

impl From<io::Error> for PupilCliError {
    fn from(e: io::Error) -> Self {
        PupilCliError::Io(e)
    }
}

impl From<ExtractError> for PupilCliError {
    fn from(e: ExtractError) -> Self {
        PupilCliError::Extract(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<PupilCliError> for CliError {
    fn from(e: PupilCliError) -> Self {
        match e {
            PupilCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            PupilCliError::Extract(ExtractError::Io(e)) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check that the recording file exists and is readable".to_string()),
            },
            PupilCliError::Extract(ExtractError::Decode(msg)) => CliError {
                code: "DECODE_ERROR".to_string(),
                message: msg,
                hint: Some("Ensure the input is a valid XDF container".to_string()),
            },
            PupilCliError::Extract(ExtractError::Json(e)) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
        }
    }
}
