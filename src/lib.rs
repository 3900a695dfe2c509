//! # Htmlboard
//!
//! Copy HTML to the system clipboard as rich text, with a plain-text fallback.
//!
//! ## Features
//!
//! - Reads the whole HTML payload from stdin
//! - Publishes the untouched HTML as the rich-text representation
//! - Publishes a tag-stripped rendering as the plain-text representation
//! - Leaves the clipboard alone when the input is empty or not UTF-8
//!
//! ## Example
//!
//! ```no_run
//! use htmlboard::copy_html_to_clipboard;
//!
//! let plain = copy_html_to_clipboard("<ul><li>One</li></ul>").unwrap();
//! assert_eq!(plain, "\u{2022} One");
//! ```

pub mod clipboard;
pub mod error;
pub mod html;
pub mod input;

pub use clipboard::{publish, Clipboard, SystemClipboard};
pub use error::{HtmlboardError, Result};
pub use html::html_to_plain_text;
pub use input::{read_html, read_stdin};

use std::io::Read;

/// Publish `html` and its derived plain text to `clipboard`
///
/// Returns the plain text that was published.
pub fn copy_html<C: Clipboard>(clipboard: &mut C, html: &str) -> Result<String> {
    let plain = html_to_plain_text(html);
    publish(clipboard, html, &plain)?;
    Ok(plain)
}

/// Read HTML from `reader` until end-of-stream and publish it to `clipboard`
///
/// The clipboard is not touched if the input is empty or cannot be decoded.
pub fn copy_html_from_reader<R: Read, C: Clipboard>(
    reader: R,
    clipboard: &mut C,
) -> Result<String> {
    let html = read_html(reader)?;
    copy_html(clipboard, &html)
}

/// Publish `html` to the system clipboard
pub fn copy_html_to_clipboard(html: &str) -> Result<String> {
    let mut clipboard = SystemClipboard::new()?;
    copy_html(&mut clipboard, html)
}
