use crate::common::fragment;
use procdoc_babel::markup::convert_element;
use procdoc_babel::convert;

#[test]
fn test_plain_text_passes_through() {
    let node = fragment("A pattern for checking fixity.");
    assert_eq!(convert(Some(&node)), "A pattern for checking fixity.");
}

#[test]
fn test_emphasis() {
    let node = fragment("<cpp:em>X</cpp:em>");
    assert_eq!(convert(Some(&node)), "*X*");
}

#[test]
fn test_bold_inside_sentence() {
    let node = fragment("Keep <cpp:b>two</cpp:b> copies.");
    assert_eq!(convert(Some(&node)), "Keep **two** copies.");
}

#[test]
fn test_nested_inline() {
    let node = fragment("<cpp:b>very <cpp:em>important</cpp:em></cpp:b>");
    assert_eq!(convert(Some(&node)), "**very *important***");
}

#[test]
fn test_link_with_label() {
    let node = fragment(r#"See <cpp:a href="https://example.org/doc">the docs</cpp:a>."#);
    assert_eq!(
        convert(Some(&node)),
        "See [the docs](https://example.org/doc)."
    );
}

#[test]
fn test_link_label_equal_to_target_is_autolink() {
    let node = fragment(r#"<cpp:a href="https://example.org">https://example.org</cpp:a>"#);
    assert_eq!(convert(Some(&node)), "<https://example.org>");
}

#[test]
fn test_link_without_href_uses_its_text() {
    let node = fragment("<cpp:hyperlink>https://example.org/x</cpp:hyperlink>");
    assert_eq!(convert(Some(&node)), "<https://example.org/x>");
}

#[test]
fn test_relative_target_is_not_an_autolink() {
    let node = fragment(r#"<cpp:a href="docs/guide.md"></cpp:a>"#);
    assert_eq!(convert(Some(&node)), "[docs/guide.md](docs/guide.md)");
}

#[test]
fn test_link_element_converted_on_its_own() {
    let node = fragment(r#"<cpp:a href="https://example.org/a">Guide</cpp:a>"#);
    let link = &node.children()[0];
    assert_eq!(
        convert_element(Some(link)),
        "[Guide](https://example.org/a)"
    );
}

#[test]
fn test_unknown_tags_keep_their_text() {
    let node = fragment("Before <cpp:term>inside <cpp:em>it</cpp:em></cpp:term> after");
    assert_eq!(convert(Some(&node)), "Before inside *it* after");
}

#[test]
fn test_unknown_tag_spanning_lines_keeps_surrounding_spaces() {
    let node = fragment("Before <cpp:term>\n foo</cpp:term> after");
    assert_eq!(convert(Some(&node)), "Before \n foo after");

    let node = fragment("x <cpp:term>foo\n</cpp:term> bar");
    assert_eq!(convert(Some(&node)), "x foo\n bar");
}

#[test]
fn test_comments_do_not_split_text() {
    let node = fragment("one <!-- note --> two");
    assert_eq!(convert(Some(&node)), "one  two");
}

#[test]
fn test_paragraphs() {
    let node = fragment(
        "\n  <cpp:p>First\n     paragraph.</cpp:p>\n  <cpp:p>Second <cpp:em>one</cpp:em>.</cpp:p>\n",
    );
    assert_eq!(
        convert(Some(&node)),
        "First paragraph.\n\nSecond *one*."
    );
}

#[test]
fn test_line_break() {
    let node = fragment("line one<cpp:br/>line two");
    assert_eq!(convert(Some(&node)), "line one\nline two");
}
