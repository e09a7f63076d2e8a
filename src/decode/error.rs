use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid UTF-8 byte 0x{byte:02x} at offset {offset}")]
    InvalidUtf8 { byte: u8, offset: usize },
}

/// Anything that can go wrong turning a file into text
#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
