//! Ranked word list output
//!
//! One line per distinct word: the decimal count, a space, then the
//! word's original bytes exactly as they appeared in the input at its
//! first occurrence.

use crate::error::{CliError, CliResult};
use freqs_core::FrequencyReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a frequency report as plain text
pub struct FrequencyWriter<W: Write> {
    writer: W,
}

impl FrequencyWriter<BufWriter<File>> {
    /// Create the output file, truncating any existing content
    pub fn create(path: &Path) -> CliResult<Self> {
        let file = File::create(path)
            .map_err(|err| CliError::OutputFile(format!("{}: {err}", path.display())))?;
        Ok(FrequencyWriter {
            writer: BufWriter::new(file),
        })
    }
}

impl<W: Write> FrequencyWriter<W> {
    /// Wrap an arbitrary writer
    pub fn new(writer: W) -> Self {
        FrequencyWriter { writer }
    }

    /// Write every ranked word in report order
    pub fn write_report(&mut self, report: &FrequencyReport) -> CliResult<()> {
        for word in &report.words {
            write!(self.writer, "{} ", word.entries)
                .and_then(|_| self.writer.write_all(&word.bytes))
                .and_then(|_| self.writer.write_all(b"\n"))
                .map_err(|err| CliError::OutputFile(err.to_string()))?;
        }
        Ok(())
    }

    /// Flush buffered output before the process exits
    pub fn finish(&mut self) -> CliResult<()> {
        self.writer
            .flush()
            .map_err(|err| CliError::OutputFile(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freqs_core::analyze_bytes;

    fn render(input: &[u8]) -> Vec<u8> {
        let report = analyze_bytes(input).unwrap();
        let mut writer = FrequencyWriter::new(Vec::new());
        writer.write_report(&report).unwrap();
        writer.finish().unwrap();
        writer.writer
    }

    #[test]
    fn writes_count_space_word_newline() {
        assert_eq!(render(b"cat cat dog"), b"2 cat\n1 dog\n");
    }

    #[test]
    fn writes_nothing_for_empty_report() {
        assert!(render(b"... 123 ...").is_empty());
    }

    #[test]
    fn word_bytes_pass_through_unmodified() {
        // First occurrence keeps its original case and encoding
        let rendered = render("Кот кот".as_bytes());
        assert_eq!(rendered, "2 Кот\n".as_bytes());
    }
}
