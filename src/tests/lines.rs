use super::split_lines;
use pretty_assertions::assert_eq;

#[test]
fn test_newline_and_crlf() {
    assert_eq!(split_lines("a\nb\r\nc"), vec!["a", "b", "c"]);
}

#[test]
fn test_lone_carriage_return() {
    assert_eq!(split_lines("# A\rbody\r\rend"), vec!["# A", "body", "", "end"]);
}

#[test]
fn test_unicode_separators() {
    assert_eq!(
        split_lines("one\u{2028}two\u{2029}three\u{85}four"),
        vec!["one", "two", "three", "four"]
    );
}

#[test]
fn test_control_separators() {
    assert_eq!(
        split_lines("a\x0bb\x0cc\x1cd\x1de\x1ef"),
        vec!["a", "b", "c", "d", "e", "f"]
    );
}

#[test]
fn test_trailing_terminator_adds_no_line() {
    assert_eq!(split_lines("a\n"), vec!["a"]);
    assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    assert_eq!(split_lines("\n"), vec![""]);
    assert!(split_lines("").is_empty());
}
