use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run
#[derive(Error, Debug)]
pub enum ConcatError {
    #[error("Failed to open output file {}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list directory {}", .dir.display())]
    ListingFailed {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write output file {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
