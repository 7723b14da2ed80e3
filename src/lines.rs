//! Line splitting on every line boundary the corpus may contain.
//!
//! Exported docs occasionally carry form feeds, lone carriage returns or Unicode line separators.
//! All of them end a line, so line numbers stay stable no matter which one a page used.

/// Characters that end a line. `\r\n` is handled as a single break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

#[must_use]
/// Split `text` into lines without their terminators.
///
/// A trailing terminator does not produce an extra empty line, so `"a\n"` is one line and `""` is
/// none.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find(LINE_BREAKS) {
        lines.push(&rest[..pos]);
        let tail = &rest[pos..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }

    lines
}

#[cfg(test)]
#[path = "tests/lines.rs"]
mod tests;
