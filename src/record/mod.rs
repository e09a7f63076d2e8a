use std::fmt;
use std::io::{self, Write};

/// What follows a record's header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    /// Decoded file text
    Content(String),
    /// Message describing why the file could not be read
    Error(String),
}

/// One header-plus-body block of the output file.
///
/// Serialized as:
///
/// ```text
/// === FILE: <name> ===
/// <content or [Error reading file: <message>]>
///
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub body: RecordBody,
}

impl Record {
    pub fn content(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: RecordBody::Content(text.into()),
        }
    }

    pub fn error(name: impl Into<String>, message: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            body: RecordBody::Error(message.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, RecordBody::Error(_))
    }

    /// Append the serialized record to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== FILE: {} ===", self.name)?;
        match &self.body {
            RecordBody::Content(text) => write!(f, "{text}\n\n"),
            RecordBody::Error(message) => write!(f, "[Error reading file: {message}]\n\n"),
        }
    }
}
