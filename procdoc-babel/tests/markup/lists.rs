use crate::common::fragment;
use procdoc_babel::{convert, to_cell_text};

#[test]
fn test_unordered_list() {
    let node = fragment(
        "\n<cpp:ul>\n  <cpp:li>alpha</cpp:li>\n  <cpp:li>beta\n     gamma</cpp:li>\n</cpp:ul>\n",
    );
    assert_eq!(convert(Some(&node)), "* alpha\n* beta gamma");
}

#[test]
fn test_list_after_paragraph() {
    let node = fragment(
        "<cpp:p>Choose one:</cpp:p><cpp:ul><cpp:li>a</cpp:li><cpp:li>b</cpp:li></cpp:ul>",
    );
    assert_eq!(convert(Some(&node)), "Choose one:\n\n* a\n* b");
}

#[test]
fn test_empty_items_are_dropped() {
    let node = fragment("<cpp:ul><cpp:li>a</cpp:li><cpp:li>  </cpp:li></cpp:ul>");
    assert_eq!(convert(Some(&node)), "* a");
}

#[test]
fn test_list_flattened_for_a_cell() {
    let node = fragment("<cpp:ul><cpp:li>a</cpp:li><cpp:li>b</cpp:li></cpp:ul>");
    assert_eq!(to_cell_text(&convert(Some(&node))), "• a<br>• b");
}

#[test]
fn test_paragraph_and_list_flattened_for_a_cell() {
    let node = fragment(
        "<cpp:p>Either</cpp:p><cpp:ul><cpp:li>this</cpp:li><cpp:li>that</cpp:li></cpp:ul>",
    );
    assert_eq!(
        to_cell_text(&convert(Some(&node))),
        "Either<br><br>• this<br>• that"
    );
}
