// Public API exports
pub mod concat;
pub mod decode;
pub mod listing;
pub mod record;

// Re-export main types for convenience
pub use concat::{ConcatBuilder, ConcatError, ConcatSummary, Concatenator, DEFAULT_OUTPUT};
pub use decode::{DecodeError, DecodeMode, ReadError};
pub use listing::{DirEntry, EntryKind};
pub use record::{Record, RecordBody};
