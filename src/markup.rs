//! Highlighting for angle-bracket markup
//!
//! A much simpler scanner than the code pipeline: three states (outside
//! a tag, inside a tag, inside a quoted attribute value) over the whole
//! text in one pass, no cross-line bookkeeping. Tag names render as
//! `xmltag` spans, attribute text as `xmlattr`, quoted values as
//! `string`. Outside tags, layout is preserved with `&nbsp;` sequences
//! for space runs and tabs, and `<br/>` for line breaks, so the result
//! survives HTML whitespace collapsing without a `<pre>` container.
//!
//! Content is written through as-is apart from the tag delimiters
//! themselves; this scanner highlights markup, it does not sanitize it.

use std::fmt::Write as _;

use crate::highlight::spans::SpanClass;

/// The scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Character data between tags
    Text,

    /// Inside `<...>`, before the first space (the tag name)
    TagName,

    /// Inside `<...>`, after the tag name
    AttrName,

    /// Inside a double-quoted attribute value
    AttrValue,
}

/// Writes text into classified `<span>` wrappers, opening a span lazily
/// on the first write of a class and closing it when the class changes.
/// Lazy opening means a class switch with no text in between produces no
/// empty span.
struct SpanWriter {
    out: String,
    class: Option<SpanClass>,
    open: bool,
}

impl SpanWriter {
    fn new(out: String) -> Self {
        SpanWriter {
            out,
            class: None,
            open: false,
        }
    }

    /// Switch the classification for subsequent writes, closing any open
    /// span of a different class.
    fn set_class(&mut self, class: Option<SpanClass>) {
        if self.class != class {
            self.close_open_span();
            self.class = class;
        }
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(class) = self.class {
            if !self.open {
                // String buffers never fail to write.
                let _ = write!(self.out, "<span class=\"{}\">", class);
                self.open = true;
            }
        }
        self.out.push_str(text);
    }

    fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.write(ch.encode_utf8(&mut buf));
    }

    fn finish(mut self) -> String {
        self.close_open_span();
        self.out
    }

    fn close_open_span(&mut self) {
        if self.open {
            self.out.push_str("</span>");
            self.open = false;
        }
    }
}

/// Convert markup text into its highlighted HTML rendering, wrapped in
/// the `<div class="code">` container.
pub fn convert(xml: &str) -> String {
    let chars: Vec<char> = xml.chars().collect();
    let mut w = SpanWriter::new(String::from("<div class=\"code\"><br/>\n"));
    let mut state = State::Text;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match state {
            State::Text => match c {
                '<' => {
                    w.set_class(Some(SpanClass::XmlTag));
                    w.write("&lt;");
                    state = State::TagName;
                    i += 1;
                }
                ' ' => {
                    // Each pair in a run of spaces becomes "&nbsp; " so
                    // the run keeps its width; a lone space stays plain.
                    if chars.get(i + 1) == Some(&' ') {
                        w.write("&nbsp;");
                        i += 1;
                    }
                    w.write(" ");
                    i += 1;
                }
                '\t' => {
                    w.write("&nbsp; &nbsp; ");
                    i += 1;
                }
                '\n' => {
                    w.write("<br/>\n");
                    i += 1;
                }
                _ => {
                    w.write_char(c);
                    i += 1;
                }
            },
            State::TagName | State::AttrName => match c {
                '>' => {
                    w.set_class(Some(SpanClass::XmlTag));
                    w.write("&gt;");
                    w.set_class(None);
                    state = State::Text;
                    i += 1;
                }
                '"' => {
                    w.set_class(Some(SpanClass::Str));
                    w.write("\"");
                    state = State::AttrValue;
                    i += 1;
                }
                ' ' if state == State::TagName => {
                    // The space after the tag name sits between the two
                    // spans; later spaces belong to the attribute text.
                    w.set_class(None);
                    w.write(" ");
                    w.set_class(Some(SpanClass::XmlAttr));
                    state = State::AttrName;
                    i += 1;
                }
                _ => {
                    w.write_char(c);
                    i += 1;
                }
            },
            State::AttrValue => {
                if c == '"' {
                    w.write("\"");
                    w.set_class(Some(SpanClass::XmlAttr));
                    state = State::AttrName;
                } else {
                    w.write_char(c);
                }
                i += 1;
            }
        }
    }

    let mut out = w.finish();
    out.push_str("<br/></div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strip the fixed container for shorter assertions.
    fn body(xml: &str) -> String {
        let html = convert(xml);
        let html = html
            .strip_prefix("<div class=\"code\"><br/>\n")
            .expect("container open");
        html.strip_suffix("<br/></div>\n")
            .expect("container close")
            .to_string()
    }

    #[test]
    fn bare_tag_is_one_xmltag_span() {
        assert_eq!(body("<item>"), "<span class=\"xmltag\">&lt;item&gt;</span>");
    }

    #[test]
    fn closing_tag_keeps_the_slash_in_the_tag_span() {
        assert_eq!(body("</item>"), "<span class=\"xmltag\">&lt;/item&gt;</span>");
    }

    #[test]
    fn attributes_split_into_attr_and_string_spans() {
        assert_eq!(
            body("<a href=\"x\">"),
            "<span class=\"xmltag\">&lt;a</span> \
             <span class=\"xmlattr\">href=</span>\
             <span class=\"string\">\"x\"</span>\
             <span class=\"xmltag\">&gt;</span>"
        );
    }

    #[test]
    fn second_attribute_stays_in_the_attr_span() {
        assert_eq!(
            body("<a b=\"1\" c=\"2\">"),
            "<span class=\"xmltag\">&lt;a</span> \
             <span class=\"xmlattr\">b=</span>\
             <span class=\"string\">\"1\"</span>\
             <span class=\"xmlattr\"> c=</span>\
             <span class=\"string\">\"2\"</span>\
             <span class=\"xmltag\">&gt;</span>"
        );
    }

    #[test]
    fn closing_bracket_inside_a_quoted_value_is_literal() {
        // The bracket passes through untouched: it does not end the tag
        // and this scanner does not rewrite content.
        assert_eq!(
            body("<a b=\">\">"),
            "<span class=\"xmltag\">&lt;a</span> \
             <span class=\"xmlattr\">b=</span>\
             <span class=\"string\">\">\"</span>\
             <span class=\"xmltag\">&gt;</span>"
        );
    }

    #[test]
    fn text_between_tags_is_unwrapped() {
        assert_eq!(
            body("<b>hi</b>"),
            "<span class=\"xmltag\">&lt;b&gt;</span>hi<span class=\"xmltag\">&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn newlines_render_as_breaks() {
        assert_eq!(body("a\nb"), "a<br/>\nb");
    }

    #[test]
    fn space_pairs_render_as_nbsp_sequences() {
        assert_eq!(body("a b"), "a b");
        assert_eq!(body("a  b"), "a&nbsp; b");
        assert_eq!(body("a   b"), "a&nbsp;  b");
        assert_eq!(body("a    b"), "a&nbsp; &nbsp; b");
    }

    #[test]
    fn tab_renders_as_the_fixed_nbsp_sequence() {
        assert_eq!(body("\tx"), "&nbsp; &nbsp; x");
    }

    #[test]
    fn unterminated_tag_closes_without_a_phantom_bracket() {
        assert_eq!(body("<open"), "<span class=\"xmltag\">&lt;open</span>");
    }

    #[test]
    fn empty_input_is_just_the_container() {
        assert_eq!(convert(""), "<div class=\"code\"><br/>\n<br/></div>\n");
    }
}
