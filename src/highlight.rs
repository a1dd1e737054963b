//! Syntax highlighting pipeline for C-family source code
//!
//! The pipeline runs in three passes over each input line:
//! 1. Prepare: tab expansion (4-column stops) followed by HTML escaping
//!    of `&`, `<`, `>`. Escaping happens exactly once, before
//!    classification, so literal markup characters inside strings and
//!    comments are already safe by the time spans are built.
//! 2. Scan: a single left-to-right pass classifying each character into
//!    string / preprocessor / comment / keyword / plain spans. The only
//!    state that survives a line boundary is "inside a block comment";
//!    everything else is line-scoped.
//! 3. Emit: wrap non-plain spans in `<span class="...">` markup and join
//!    the lines inside a `<div class="code"><pre>` container.
//!
//! Keeping the passes separate means the scanner never has to reason
//! about entities or tab stops: by the time it runs, a line is plain
//! escaped text and every index is a character position.

pub mod emitter;
pub mod keywords;
pub mod prepare;
pub mod scanner;
pub mod spans;

pub use emitter::{highlight, render_format, scan_source};
pub use keywords::is_keyword;
pub use prepare::prepare_line;
pub use scanner::{scan_line, ScanState};
pub use spans::{Span, SpanClass};
