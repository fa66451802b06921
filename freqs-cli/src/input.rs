//! Binary input file reading
//!
//! Opening and reading are separate steps so the caller can order them
//! around output-file creation the way the tool's exit-code contract
//! requires (open failures and read failures both map to the same
//! code, but the output file must be created in between).

use crate::error::{CliError, CliResult};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// An opened input file, not yet read
#[derive(Debug)]
pub struct InputFile {
    file: File,
    path: PathBuf,
}

impl InputFile {
    /// Open the file in binary mode
    pub fn open(path: &Path) -> CliResult<Self> {
        let file = File::open(path)
            .map_err(|err| CliError::InputFile(format!("{}: {err}", path.display())))?;
        Ok(InputFile {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Read the whole file into memory, all-or-nothing.
    ///
    /// The byte count is checked against the file's metadata; a short
    /// or over-long read is treated as a failed read rather than
    /// returning a partial buffer.
    pub fn read_all(mut self) -> CliResult<Vec<u8>> {
        let expected = self
            .file
            .metadata()
            .map_err(|err| CliError::InputFile(format!("{}: {err}", self.path.display())))?
            .len() as usize;

        let mut buffer = Vec::with_capacity(expected);
        self.file
            .read_to_end(&mut buffer)
            .map_err(|err| CliError::InputFile(format!("{}: {err}", self.path.display())))?;

        if buffer.len() != expected {
            return Err(CliError::InputFile(format!(
                "{}: expected {expected} bytes, read {}",
                self.path.display(),
                buffer.len()
            )));
        }

        log::debug!("read {} bytes from {}", buffer.len(), self.path.display());

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_binary_content_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.bin");
        // Includes a CR LF pair; binary mode must not translate it
        let content = b"line one\r\nline two\xD0\xBA";
        fs::write(&path, content).unwrap();

        let buffer = InputFile::open(&path).unwrap().read_all().unwrap();
        assert_eq!(buffer, content);
    }

    #[test]
    fn open_fails_for_missing_file() {
        let result = InputFile::open(Path::new("/nonexistent/input.txt"));
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Invalid input file"));
    }

    #[test]
    fn reads_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, b"").unwrap();

        let buffer = InputFile::open(&path).unwrap().read_all().unwrap();
        assert!(buffer.is_empty());
    }
}
