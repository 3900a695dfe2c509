use crate::error::{HtmlboardError, Result};

/// Trait for clipboard operations, allowing for mocking in tests
pub trait Clipboard {
    /// Drop every representation currently on the clipboard
    fn clear(&mut self) -> Result<()>;

    /// Replace the clipboard with an HTML representation and its plain-text fallback
    fn set_rich_text(&mut self, html: &str, plain: &str) -> Result<()>;

    /// Read back the plain-text representation
    fn get_text(&mut self) -> Result<String>;
}

/// System clipboard implementation using arboard
///
/// On Linux (X11 and Wayland) the contents are owned by this process and only
/// outlive it if a clipboard manager takes them over before exit.
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| HtmlboardError::ClipboardError(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl Clipboard for SystemClipboard {
    fn clear(&mut self) -> Result<()> {
        self.clipboard
            .clear()
            .map_err(|e| HtmlboardError::ClipboardError(e.to_string()))
    }

    // arboard writes both formats in one transaction; a separate set_text
    // would replace the HTML.
    fn set_rich_text(&mut self, html: &str, plain: &str) -> Result<()> {
        self.clipboard
            .set_html(html, Some(plain))
            .map_err(|e| HtmlboardError::ClipboardError(e.to_string()))
    }

    fn get_text(&mut self) -> Result<String> {
        self.clipboard
            .get_text()
            .map_err(|e| HtmlboardError::ClipboardError(e.to_string()))
    }
}

/// Clear the clipboard, then publish `html` and its `plain` fallback
pub fn publish<C: Clipboard>(clipboard: &mut C, html: &str, plain: &str) -> Result<()> {
    clipboard.clear()?;
    clipboard.set_rich_text(html, plain)
}
