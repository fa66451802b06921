//! Freqs CLI library
//!
//! This library backs the `freqs` binary: argument handling, file I/O,
//! and the mapping from pipeline failures to process exit codes.

pub mod error;
pub mod input;
pub mod output;

pub use error::{exit_code, CliError, CliResult};

use freqs_core::FrequencyAnalyzer;
use input::InputFile;
use output::FrequencyWriter;
use std::path::Path;

/// Run the whole pipeline: read the input file, analyze it, write the
/// ranked word list.
///
/// The output file is created before the input is read, matching the
/// documented failure behavior: if decoding fails, the output file
/// already exists and is left empty.
pub fn run(input_path: &Path, output_path: &Path) -> CliResult<()> {
    let input = InputFile::open(input_path)?;
    let mut writer = FrequencyWriter::create(output_path)?;

    let buffer = input.read_all()?;
    let report = FrequencyAnalyzer::new().analyze(&buffer)?;

    log::info!(
        "{}: {} distinct words",
        input_path.display(),
        report.len()
    );

    writer.write_report(&report)?;
    writer.finish()
}
