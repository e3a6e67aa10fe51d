//! Append-only text log of discovered boards
//!
//! Each record is a board signature followed by a blank line. The log doubles
//! as resume input: its records seed the registry and its last record marks
//! where the previous run stopped.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::algorithm::registry::SolutionSink;
use crate::io::error::{Result, file_system};
use crate::spatial::board::Board;

/// Split log text into board records
pub fn parse_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                records.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        records.push(current.join("\n"));
    }

    records
}

/// Read every record of the log at `path`, empty if the file does not exist
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read
pub fn read_records(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_records(&text)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(error) => Err(file_system(path, "read solution log")(error)),
    }
}

/// Solution sink writing signatures to a text file
pub struct SolutionLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl SolutionLog {
    /// Start a fresh log, truncating any existing file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(file_system(path, "create solution log"))?;
        Ok(Self::from_file(path, file))
    }

    /// Continue an existing log, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending
    pub fn append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(file_system(path, "open solution log"))?;
        Ok(Self::from_file(path, file))
    }

    fn from_file(path: &Path, file: File) -> Self {
        Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        }
    }

    /// Location of the log
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SolutionSink for SolutionLog {
    fn persist(&mut self, signature: &str, _board: &Board) -> Result<()> {
        writeln!(self.writer, "{signature}\n")
            .and_then(|()| self.writer.flush())
            .map_err(file_system(&self.path, "append solution"))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(file_system(&self.path, "flush solution log"))
    }
}
