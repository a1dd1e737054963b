//! End-to-end tests for the markup highlighter

use code2html::markup;

#[test]
fn renders_a_small_document() {
    let xml = "<book id=\"1\">\n\
               \t<title>Intro</title>\n\
               </book>\n";

    let expected = "<div class=\"code\"><br/>\n\
                    <span class=\"xmltag\">&lt;book</span> \
                    <span class=\"xmlattr\">id=</span>\
                    <span class=\"string\">\"1\"</span>\
                    <span class=\"xmltag\">&gt;</span><br/>\n\
                    &nbsp; &nbsp; <span class=\"xmltag\">&lt;title&gt;</span>\
                    Intro\
                    <span class=\"xmltag\">&lt;/title&gt;</span><br/>\n\
                    <span class=\"xmltag\">&lt;/book&gt;</span><br/>\n\
                    <br/></div>\n";

    assert_eq!(markup::convert(xml), expected);
}

/// Helper: convert and strip the fixed container.
fn body(xml: &str) -> String {
    let html = markup::convert(xml);
    html.strip_prefix("<div class=\"code\"><br/>\n")
        .and_then(|h| h.strip_suffix("<br/></div>\n"))
        .expect("container")
        .to_string()
}

#[test]
fn snapshot_self_closing_tag_with_attributes() {
    insta::assert_snapshot!(
        body("<img src=\"a.png\"/>"),
        @r#"<span class="xmltag">&lt;img</span> <span class="xmlattr">src=</span><span class="string">"a.png"</span><span class="xmlattr">/</span><span class="xmltag">&gt;</span>"#
    );
}

#[test]
fn indentation_survives_whitespace_collapsing() {
    // Four leading spaces become two nbsp pairs, so nested elements keep
    // their depth without a <pre> container.
    let html = markup::convert("    <a>\n");
    assert!(html.contains("&nbsp; &nbsp; <span class=\"xmltag\">&lt;a&gt;</span>"));
}
