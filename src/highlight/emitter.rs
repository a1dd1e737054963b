//! Span rendering and the whole-document entry points
//!
//! The emitter is a thin pass: escaping already happened in the prepare
//! stage, so all it adds is structural markup. Non-plain spans are
//! wrapped in `<span class="...">` pairs; plain spans are written
//! verbatim. The rendered lines sit inside a fixed
//! `<div class="code"><pre>` container, one output line per input line.

use std::fmt;
use std::fmt::Write as _;

use crate::highlight::prepare::prepare_line;
use crate::highlight::scanner::{scan_line, ScanState};
use crate::highlight::spans::{Span, SpanClass};

/// Errors from [`render_format`].
#[derive(Debug, Clone)]
pub enum FormatError {
    UnknownFormat(String),
    SerializationFailed(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => {
                write!(f, "Unknown output format '{}' (expected 'html' or 'spans')", name)
            }
            FormatError::SerializationFailed(msg) => {
                write!(f, "Serialization failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Split source text into lines.
///
/// A terminal `'\n'` produces one trailing empty element, which is
/// dropped; content on an unterminated last line is kept.
fn split_lines(source: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = source.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Render one line's span sequence as HTML. No escaping happens here.
pub fn render_line(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span.class {
            SpanClass::Plain => out.push_str(&span.text),
            class => {
                // String buffers never fail to write.
                let _ = write!(out, "<span class=\"{}\">{}</span>", class, span.text);
            }
        }
    }
    out
}

/// Classify a whole source text, threading the block-comment state
/// through the lines in order. Returns one span sequence per input line.
pub fn scan_source(source: &str) -> Vec<Vec<Span>> {
    let mut state = ScanState::default();
    let mut all = Vec::new();
    for line in split_lines(source) {
        let (spans, next) = scan_line(&prepare_line(line), state);
        state = next;
        all.push(spans);
    }
    all
}

/// The full pipeline: prepare, scan, and render every line inside the
/// output container. Each output line (including the container tags) is
/// terminated by `'\n'`.
pub fn highlight(source: &str) -> String {
    let mut out = String::from("<div class=\"code\"><pre>\n");
    for spans in scan_source(source) {
        out.push_str(&render_line(&spans));
        out.push('\n');
    }
    out.push_str("</pre></div>\n");
    out
}

/// Render `source` in the named output format: `html` for the markup
/// document, `spans` for a JSON dump of the classified span stream.
pub fn render_format(source: &str, format: &str) -> Result<String, FormatError> {
    match format {
        "html" => Ok(highlight(source)),
        "spans" => serde_json::to_string_pretty(&scan_source(source))
            .map_err(|e| FormatError::SerializationFailed(e.to_string())),
        other => Err(FormatError::UnknownFormat(other.to_string())),
    }
}
