//! The per-line classification state machine
//!
//! One left-to-right pass over an already prepared (tab-expanded,
//! escaped) line, with a single cursor and no backtracking. The scanner
//! is always in exactly one region; the regions are a closed set rather
//! than independent boolean flags, so illegal combinations (inside a
//! string and a comment at once) cannot be represented.
//!
//! Only the block-comment region survives a line boundary, carried
//! through [`ScanState`]. Line comments and preprocessor directives are
//! line-scoped by definition; an open quote at end of line is treated as
//! implicitly closed for rendering, never as an error.

use crate::highlight::keywords::is_keyword;
use crate::highlight::spans::{Span, SpanBuilder, SpanClass};

/// The state the scanner carries from one line to the next.
///
/// Everything else the scanner tracks resets at each line start, so this
/// is a single flag: whether the previous line left a `/* ... */`
/// comment open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub in_block_comment: bool,
}

/// The region the cursor is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Normal,
    DoubleQuote,
    SingleQuote,
    LineComment,
    Preprocessor,
    BlockComment,
}

impl Region {
    /// The span class characters in this region belong to.
    fn class(&self) -> SpanClass {
        match self {
            Region::Normal => SpanClass::Plain,
            Region::DoubleQuote | Region::SingleQuote => SpanClass::Str,
            Region::LineComment | Region::BlockComment => SpanClass::Comment,
            Region::Preprocessor => SpanClass::Pre,
        }
    }
}

/// True if the word run for keyword matching may start at `pos`: the
/// previous character must not be alphanumeric, `_`, or the `$`
/// identifier prefix. Start of line counts as a boundary.
fn at_word_boundary(chars: &[char], pos: usize) -> bool {
    match pos.checked_sub(1).and_then(|p| chars.get(p)) {
        None => true,
        Some(&prev) => !prev.is_alphanumeric() && prev != '_' && prev != '$',
    }
}

/// Length of the leading run of word characters at `pos`, bounded by the
/// end of the line. `%` is a word character here so that the `%format`
/// token can match.
fn word_run(chars: &[char], pos: usize) -> usize {
    chars[pos..]
        .iter()
        .take_while(|&&c| c.is_alphanumeric() || c == '_' || c == '$' || c == '%')
        .count()
}

/// Classify one prepared line into maximal same-class spans.
///
/// Returns the span sequence and the state to feed into the next line.
pub fn scan_line(line: &str, state: ScanState) -> (Vec<Span>, ScanState) {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = SpanBuilder::new();
    let mut region = if state.in_block_comment {
        Region::BlockComment
    } else {
        Region::Normal
    };

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        // Backslash pass-through comes first, in every region: the
        // backslash and the character after it are literal text, so an
        // escaped quote can never toggle a string region.
        if c == '\\' {
            spans.push(region.class(), c);
            if let Some(&next) = chars.get(i + 1) {
                spans.push(region.class(), next);
            }
            i += 2;
            continue;
        }

        match region {
            Region::Normal => {
                if c == '"' {
                    spans.push(SpanClass::Str, c);
                    region = Region::DoubleQuote;
                    i += 1;
                } else if c == '\'' {
                    spans.push(SpanClass::Str, c);
                    region = Region::SingleQuote;
                    i += 1;
                } else if c == '#' {
                    spans.push(SpanClass::Pre, c);
                    region = Region::Preprocessor;
                    i += 1;
                } else if c == '/' && chars.get(i + 1) == Some(&'/') {
                    spans.push_str(SpanClass::Comment, "//");
                    region = Region::LineComment;
                    i += 2;
                } else if c == '/' && chars.get(i + 1) == Some(&'*') {
                    spans.push_str(SpanClass::Comment, "/*");
                    region = Region::BlockComment;
                    i += 2;
                } else if at_word_boundary(&chars, i) {
                    let run = word_run(&chars, i);
                    let candidate: String = chars[i..i + run].iter().collect();
                    if run > 0 && is_keyword(&candidate) {
                        spans.push_str(SpanClass::Keyword, &candidate);
                        i += run;
                    } else {
                        spans.push(SpanClass::Plain, c);
                        i += 1;
                    }
                } else {
                    spans.push(SpanClass::Plain, c);
                    i += 1;
                }
            }
            Region::DoubleQuote => {
                spans.push(SpanClass::Str, c);
                if c == '"' {
                    region = Region::Normal;
                }
                i += 1;
            }
            Region::SingleQuote => {
                spans.push(SpanClass::Str, c);
                if c == '\'' {
                    region = Region::Normal;
                }
                i += 1;
            }
            Region::LineComment => {
                spans.push(SpanClass::Comment, c);
                i += 1;
            }
            Region::Preprocessor => {
                spans.push(SpanClass::Pre, c);
                i += 1;
            }
            Region::BlockComment => {
                if c == '*' && chars.get(i + 1) == Some(&'/') {
                    spans.push_str(SpanClass::Comment, "*/");
                    region = Region::Normal;
                    i += 2;
                } else {
                    spans.push(SpanClass::Comment, c);
                    i += 1;
                }
            }
        }
    }

    let out_state = ScanState {
        in_block_comment: region == Region::BlockComment,
    };
    (spans.finish(), out_state)
}
