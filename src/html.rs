//! Best-effort HTML to plain-text conversion.
//!
//! This is not an HTML parser. A handful of line-break and list tags are
//! rewritten, every other tag-like token is dropped, and entities such as
//! `&amp;` are left untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal rewrites, applied in order. Later entries see the output of earlier ones.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("<br>", "\n"),
    ("<br/>", "\n"),
    ("<br />", "\n"),
    ("</li>", "\n"),
    ("<li>", "\u{2022} "),
    ("</ul>", "\n"),
];

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static BLANK_LINES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n\n+").unwrap());

/// Derives the plain-text representation of an HTML fragment.
///
/// The result is trimmed and may be empty when the input held only markup
/// and whitespace.
pub fn html_to_plain_text(html: &str) -> String {
    let mut text = html.to_string();
    for (from, to) in REPLACEMENTS {
        text = text.replace(from, to);
    }

    let text = TAG_REGEX.replace_all(&text, "");
    let text = BLANK_LINES_REGEX.replace_all(&text, "\n\n");

    text.trim().to_string()
}
