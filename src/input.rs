use crate::error::{HtmlboardError, Result};
use std::io::{self, Read};

/// Reads an entire stream and decodes it as HTML text.
///
/// Blocks until the stream is closed. Whitespace is kept as-is, so a stream
/// holding only spaces or newlines is still accepted.
///
/// # Errors
/// - `IoError` if reading the stream fails
/// - `InvalidUtf8` if the bytes are not valid UTF-8
/// - `EmptyInput` if the stream was empty
pub fn read_html<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(HtmlboardError::IoError)?;

    let html = String::from_utf8(bytes).map_err(HtmlboardError::InvalidUtf8)?;
    if html.is_empty() {
        return Err(HtmlboardError::EmptyInput);
    }

    Ok(html)
}

/// Reads HTML from stdin until end-of-stream
pub fn read_stdin() -> Result<String> {
    read_html(io::stdin().lock())
}
