//! Heading and section range representation for a flat corpus document.
//!
//! A heading anchors a named section of the corpus. Only top-level headings are
//! recorded, and each one owns the run of lines from its own line up to the line
//! before the next heading (or the end of the document). Line numbers are 1-based
//! throughout, matching what an editor shows.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Top-level heading found in the corpus, identified by its position.
pub struct Heading {
    /// Heading text without the `# ` marker, trimmed of surrounding whitespace.
    pub title: String,
    /// Line the heading sits on (1-indexed).
    pub line: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Inclusive span of lines owned by a single heading.
pub struct SectionRange {
    /// Heading line that opens the section (inclusive).
    pub start: usize,
    /// Last line belonging to the section (inclusive).
    pub end: usize,
}

impl SectionRange {
    #[must_use]
    /// Number of lines covered, including the heading line itself.
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    #[must_use]
    /// Whether the range covers no lines; only possible for hand-built ranges with `end < start`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    /// Whether the given 1-based line falls inside this section.
    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
