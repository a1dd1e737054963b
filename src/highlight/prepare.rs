//! Line preparation: tab expansion and HTML escaping
//!
//! These are the two transforms applied to a raw line before the scanner
//! sees it. Order matters and is fixed: tabs first (columns are counted
//! over the visible characters, not over entity text), then escaping
//! (exactly once, so `&lt;` never becomes `&amp;lt;`). After this pass
//! the scanner can treat every character position as one output column
//! and never has to know that entities exist.

/// Expand each tab to between 1 and 4 spaces so that the output column
/// count lands on a multiple of 4. A tab on a 4-column boundary still
/// produces a full stop of 4 spaces.
pub fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0usize;
    for ch in line.chars() {
        if ch == '\t' {
            loop {
                out.push(' ');
                col += 1;
                if col % 4 == 0 {
                    break;
                }
            }
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}

/// Replace `&`, `<`, `>` with their entities in a single pass.
pub fn escape_markup(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The full preparation pass: tab expansion, then escaping.
pub fn prepare_line(line: &str) -> String {
    escape_markup(&expand_tabs(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_at_column_zero_expands_to_four_spaces() {
        assert_eq!(expand_tabs("\tx"), "    x");
    }

    #[test]
    fn tab_at_column_two_expands_to_two_spaces() {
        assert_eq!(expand_tabs("ab\tx"), "ab  x");
    }

    #[test]
    fn tab_on_a_stop_still_expands_to_four_spaces() {
        assert_eq!(expand_tabs("abcd\tx"), "abcd    x");
    }

    #[test]
    fn consecutive_tabs_each_reach_the_next_stop() {
        assert_eq!(expand_tabs("\t\tx"), "        x");
        assert_eq!(expand_tabs("a\t\tx"), "a       x");
    }

    #[test]
    fn escaping_covers_the_three_reserved_characters() {
        assert_eq!(escape_markup("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn escaping_is_single_pass() {
        // An ampersand that is already part of entity-looking text is
        // still escaped exactly once.
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn prepare_expands_tabs_before_escaping() {
        // The '<' becomes a 4-character entity, but tab columns are
        // counted before that happens: tab at column 1 pads to 4.
        assert_eq!(prepare_line("<\tx"), "&lt;   x");
    }
}
