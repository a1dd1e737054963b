//! Span types shared by the code scanner and the markup scanner
//!
//! A span is a maximal run of output characters sharing one
//! classification. Spans exist only while one line is being processed;
//! they are never persisted, but they do serialize (for the `spans`
//! output format of the CLI).

use std::fmt;

/// Classification of a span.
///
/// The `Display` form is the exact class attribute value emitted in the
/// HTML output, so these names are fixed: `string`, `pre`, `comment`,
/// `keyword`, `xmltag`, `xmlattr`. `Plain` spans are emitted without any
/// wrapping and have no class name in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanClass {
    /// Unclassified code, emitted verbatim
    Plain,

    /// String or character literal (both quote kinds share one class)
    #[serde(rename = "string")]
    Str,

    /// Preprocessor directive, `#` to end of line
    Pre,

    /// Line comment or block comment
    Comment,

    /// Reserved word or framework identifier from the keyword table
    Keyword,

    /// Markup tag name, produced only by the markup scanner
    XmlTag,

    /// Markup attribute text, produced only by the markup scanner
    XmlAttr,
}

impl SpanClass {
    /// The class attribute value used in the rendered HTML.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanClass::Plain => "plain",
            SpanClass::Str => "string",
            SpanClass::Pre => "pre",
            SpanClass::Comment => "comment",
            SpanClass::Keyword => "keyword",
            SpanClass::XmlTag => "xmltag",
            SpanClass::XmlAttr => "xmlattr",
        }
    }
}

impl fmt::Display for SpanClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A maximal run of characters sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// The classification of every character in `text`
    pub class: SpanClass,

    /// The character data, already tab-expanded and entity-escaped
    pub text: String,
}

impl Span {
    pub fn new(class: SpanClass, text: impl Into<String>) -> Self {
        Span {
            class,
            text: text.into(),
        }
    }
}

/// Accumulates characters into maximal same-class spans.
///
/// Pushing a character with the same class as the open span extends it;
/// a class change closes the open span and starts a new one. Empty spans
/// are never produced.
#[derive(Debug, Default)]
pub struct SpanBuilder {
    spans: Vec<Span>,
    current: Option<Span>,
}

impl SpanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one character with the given classification.
    pub fn push(&mut self, class: SpanClass, ch: char) {
        match &mut self.current {
            Some(span) if span.class == class => span.text.push(ch),
            _ => {
                self.seal();
                self.current = Some(Span::new(class, ch.to_string()));
            }
        }
    }

    /// Append a multi-character fragment with the given classification.
    pub fn push_str(&mut self, class: SpanClass, text: &str) {
        match &mut self.current {
            Some(span) if span.class == class => span.text.push_str(text),
            _ => {
                self.seal();
                self.current = Some(Span::new(class, text));
            }
        }
    }

    /// Close the builder and return the span sequence.
    pub fn finish(mut self) -> Vec<Span> {
        self.seal();
        self.spans
    }

    fn seal(&mut self) {
        if let Some(span) = self.current.take() {
            if !span.text.is_empty() {
                self.spans.push(span);
            }
        }
    }
}
