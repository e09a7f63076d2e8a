mod error;

pub use error::{DecodeError, ReadError};

use std::fs;
use std::path::Path;

/// How raw file bytes become text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Drop invalid UTF-8 sequences and keep everything else as-is
    #[default]
    Lossy,
    /// Treat invalid UTF-8 as a read failure
    Strict,
}

impl DecodeMode {
    /// Decode a file's bytes according to this mode.
    ///
    /// Line endings are normalized afterwards: `\r\n` and lone `\r`
    /// both become `\n`. A leading BOM is kept.
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, DecodeError> {
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => match self {
                DecodeMode::Lossy => drop_invalid(err.as_bytes()),
                DecodeMode::Strict => {
                    let offset = err.utf8_error().valid_up_to();
                    return Err(DecodeError::InvalidUtf8 {
                        byte: err.as_bytes()[offset],
                        offset,
                    });
                }
            },
        };
        Ok(normalize_newlines(text))
    }
}

/// Read a whole file and decode it as text
pub fn read_text(path: &Path, mode: DecodeMode) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(mode.decode(bytes)?)
}

/// Keep only the valid UTF-8 runs. Unlike `String::from_utf8_lossy`
/// nothing is substituted for the discarded bytes.
fn drop_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests;
