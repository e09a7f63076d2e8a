mod error;

pub use error::ConcatError;

use crate::decode::{self, DecodeMode};
use crate::listing::{self, DirEntry};
use crate::record::Record;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "file_contents.txt";

/// Counts from a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcatSummary {
    /// Where the records were written
    pub output: PathBuf,
    /// Records written, including error records
    pub records: usize,
    /// Records that hold an error message instead of content
    pub read_errors: usize,
    /// Directory entries that were not regular files
    pub skipped: usize,
}

/// Mutable builder for a concatenation run
pub struct ConcatBuilder {
    output: PathBuf,
    source_dir: PathBuf,
    decode_mode: DecodeMode,
}

impl ConcatBuilder {
    /// Create a builder writing `file_contents.txt` from the current directory
    pub fn new() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            source_dir: PathBuf::from("."),
            decode_mode: DecodeMode::default(),
        }
    }

    /// Set the output file path
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set the directory whose files are collected
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Set how file bytes are decoded
    pub fn decode_mode(mut self, mode: DecodeMode) -> Self {
        self.decode_mode = mode;
        self
    }

    pub fn build(self) -> Concatenator {
        Concatenator {
            output: self.output,
            source_dir: self.source_dir,
            decode_mode: self.decode_mode,
        }
    }
}

impl Default for ConcatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes one record per regular file of a directory into a single output file
#[derive(Debug)]
pub struct Concatenator {
    output: PathBuf,
    source_dir: PathBuf,
    decode_mode: DecodeMode,
}

impl Concatenator {
    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }

    /// Run the whole concatenation.
    ///
    /// The output is created (or truncated) before the directory is listed,
    /// so a failure to open it aborts before anything is read. Per-file read
    /// failures become error records and never abort the run.
    pub fn run(&self) -> Result<ConcatSummary, ConcatError> {
        let file = File::create(&self.output).map_err(|source| ConcatError::OutputOpen {
            path: self.output.clone(),
            source,
        })?;
        // The output may sit inside the source directory; never read it back
        let output_identity = fs::canonicalize(&self.output).ok();
        let mut out = BufWriter::new(file);

        let entries = listing::list_entries(&self.source_dir).map_err(|source| {
            ConcatError::ListingFailed {
                dir: self.source_dir.clone(),
                source,
            }
        })?;

        let mut summary = ConcatSummary {
            output: self.output.clone(),
            ..ConcatSummary::default()
        };

        for entry in entries {
            if !entry.is_file() {
                debug!(name = %entry.name, "skipping non-file entry");
                summary.skipped += 1;
                continue;
            }

            if is_same_file(&entry.path, output_identity.as_deref()) {
                debug!(name = %entry.name, "skipping output file");
                continue;
            }

            let record = self.read_record(&entry);
            record
                .write_to(&mut out)
                .map_err(|source| self.write_error(source))?;

            summary.records += 1;
            if record.is_error() {
                summary.read_errors += 1;
            }
        }

        out.flush().map_err(|source| self.write_error(source))?;

        info!(
            output = %self.output.display(),
            records = summary.records,
            read_errors = summary.read_errors,
            skipped = summary.skipped,
            "concatenation finished"
        );

        Ok(summary)
    }

    /// Read one file into a record, turning any failure into an error record
    fn read_record(&self, entry: &DirEntry) -> Record {
        match decode::read_text(&entry.path, self.decode_mode) {
            Ok(text) => {
                debug!(name = %entry.name, bytes = text.len(), "read file");
                Record::content(&entry.name, text)
            }
            Err(e) => {
                warn!(name = %entry.name, error = %e, "failed to read file");
                Record::error(&entry.name, e)
            }
        }
    }

    fn write_error(&self, source: io::Error) -> ConcatError {
        ConcatError::OutputWrite {
            path: self.output.clone(),
            source,
        }
    }
}

fn is_same_file(path: &Path, output_identity: Option<&Path>) -> bool {
    match output_identity {
        Some(output) => fs::canonicalize(path)
            .map(|p| p == output)
            .unwrap_or(false),
        None => false,
    }
}
