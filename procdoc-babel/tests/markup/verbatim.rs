use crate::common::fragment;
use procdoc_babel::markup::convert_with_mode;
use procdoc_babel::{convert_code_block, Mode};

#[test]
fn test_verbatim_keeps_inner_whitespace() {
    let node = fragment("\n    a  =  1\n      b\n  ");
    assert_eq!(convert_with_mode(Some(&node), Mode::Verbatim), "a  =  1\n  b");
}

#[test]
fn test_code_block_strips_trailing_ellipsis() {
    let node = fragment("\n    for f in files:\n        check(f)\n    ...\n  ");
    assert_eq!(
        convert_code_block(Some(&node), "python").as_deref(),
        Some("```python\nfor f in files:\n    check(f)\n```")
    );
}

#[test]
fn test_code_block_of_only_dots_is_absent() {
    let node = fragment("  ...  ");
    assert_eq!(convert_code_block(Some(&node), "python"), None);
}

#[test]
fn test_code_block_keeps_blank_lines_inside() {
    let node = fragment("x = 1\n\ny = 2");
    assert_eq!(
        convert_code_block(Some(&node), "sh").as_deref(),
        Some("```sh\nx = 1\n\ny = 2\n```")
    );
}
