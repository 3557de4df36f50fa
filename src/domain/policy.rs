//! Per-cell display policy for table dumps.
//!
//! Rules are applied in priority order:
//!
//! 1. Opaque payload columns (by default `trace` and `data`) with a non-empty
//!    text or blob value print only their length.
//! 2. Text longer than the truncation width prints its leading characters
//!    followed by `...`.
//! 3. Everything else prints as-is.

use std::fmt;

use super::cell::CellValue;

/// Default truncation width, in characters.
pub const DEFAULT_TRUNCATE_AT: usize = 100;

/// Default width of an expanded JSON preview, in characters.
pub const DEFAULT_JSON_PREVIEW_CHARS: usize = 200;

/// Column names whose values are summarized by length by default.
pub const DEFAULT_OPAQUE_COLUMNS: [&str; 2] = ["trace", "data"];

const ELLIPSIS: &str = "...";

/// Formatting rules applied to each cell of a dumped table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPolicy {
    pub truncate_at: usize,
    pub opaque_columns: Vec<String>,
    pub json_preview_chars: usize,
    /// Show a pretty-printed preview under each opaque text payload.
    pub expand_json: bool,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            truncate_at: DEFAULT_TRUNCATE_AT,
            opaque_columns: DEFAULT_OPAQUE_COLUMNS.iter().map(ToString::to_string).collect(),
            json_preview_chars: DEFAULT_JSON_PREVIEW_CHARS,
            expand_json: false,
        }
    }
}

impl DisplayPolicy {
    #[must_use]
    pub fn with_expand_json(mut self, expand_json: bool) -> Self {
        self.expand_json = expand_json;
        self
    }

    /// Column names are matched exactly.
    #[must_use]
    pub fn is_opaque_column(&self, column: &str) -> bool {
        self.opaque_columns.iter().any(|name| name == column)
    }

    /// Decide how a single cell is rendered.
    #[must_use]
    pub fn classify<'a>(&self, column: &str, value: &'a CellValue) -> CellDisplay<'a> {
        if self.is_opaque_column(column) {
            if let Some(chars) = value.payload_len().filter(|len| *len > 0) {
                let preview = match value.as_text() {
                    Some(text) if self.expand_json => {
                        Some(json_preview(text, self.json_preview_chars))
                    }
                    _ => None,
                };
                return CellDisplay::Opaque { chars, preview };
            }
        }

        if let Some(text) = value.as_text() {
            if let Some(prefix) = char_prefix(text, self.truncate_at) {
                return CellDisplay::Truncated(prefix);
            }
        }

        CellDisplay::Plain(value)
    }
}

/// Rendering decision for one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellDisplay<'a> {
    /// Opaque payload summarized by its length.
    Opaque {
        chars: usize,
        preview: Option<String>,
    },
    /// Leading characters of an over-long text value.
    Truncated(&'a str),
    Plain(&'a CellValue),
}

impl fmt::Display for CellDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellDisplay::Opaque { chars, .. } => write!(f, "[JSON data, {chars} chars]"),
            CellDisplay::Truncated(prefix) => write!(f, "{prefix}{ELLIPSIS}"),
            CellDisplay::Plain(value) => write!(f, "{value}"),
        }
    }
}

/// Pretty-print `text` as JSON with two-space indentation.
///
/// Returns the input unchanged when it does not parse.
#[must_use]
pub fn pretty_json(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| text.to_string())
}

fn json_preview(text: &str, max_chars: usize) -> String {
    let formatted = pretty_json(text);
    match char_prefix(&formatted, max_chars) {
        Some(prefix) => format!("{prefix}{ELLIPSIS}"),
        None => formatted,
    }
}

/// The first `max` characters of `text`, or `None` when it is not longer.
fn char_prefix(text: &str, max: usize) -> Option<&str> {
    text.char_indices().nth(max).map(|(idx, _)| &text[..idx])
}
