//! # code2html
//!
//! Renders C-family source code and XML documents as syntax-highlighted
//! HTML fragments.
//!
//! The crate is a library with two thin binaries on top:
//! - `code2html` runs the [`highlight`] pipeline: a per-line, per-character
//!   scanner that classifies string literals, character literals,
//!   preprocessor directives, comments, and keywords into `<span>` markup.
//! - `xml2html` runs the simpler [`markup`] scanner for angle-bracket
//!   markup.
//!
//! Both transforms are best-effort: malformed input never fails, it just
//! renders as well as the classification allows.

pub mod highlight;
pub mod markup;

pub use highlight::emitter::{highlight, render_format, scan_source, FormatError};
pub use highlight::scanner::{scan_line, ScanState};
pub use highlight::spans::{Span, SpanClass};
