//! Operator-facing status lines outside the report body.
//!
//! The report itself is plain text written by the application layer; these
//! helpers cover the fatal-error path, which goes to stderr and may be
//! colored.

use owo_colors::{OwoColorize, Stream};

/// Print the one-line fatal error message.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "❌ Error:".if_supports_color(Stream::Stderr, |text| text.red()),
        message
    );
}

/// Print a full diagnostic report, including the cause chain.
pub fn diagnostic(report: &miette::Report) {
    eprintln!("{report:?}");
}
