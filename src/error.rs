use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors that can occur during htmlboard operations
#[derive(Error, Debug)]
pub enum HtmlboardError {
    #[error("No HTML content provided on stdin")]
    EmptyInput,

    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[source] FromUtf8Error),

    #[error("Failed to read stdin: {0}")]
    IoError(#[source] std::io::Error),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

pub type Result<T> = std::result::Result<T, HtmlboardError>;
