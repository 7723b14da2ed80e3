//! Heading index over the raw corpus lines.
//!
//! A single pass records every top-level `# ` heading in document order, skipping anything
//! inside fenced code blocks so that shell comments in examples are not mistaken for sections.

use crate::error::{Result, SplitError};
use crate::section::Heading;
use crate::topics::Selector;
use std::collections::HashMap;

const FENCE: &str = "```";
const HEADING_PREFIX: &str = "# ";

#[derive(Debug, Default)]
/// Ordered headings plus a lookup from title to every line carrying that title.
pub struct HeadingIndex {
    headings: Vec<Heading>,
    starts: HashMap<String, Vec<usize>>,
}

impl HeadingIndex {
    #[must_use]
    /// Scan the document once and record its top-level headings.
    ///
    /// A line whose trimmed content opens with a code fence flips the fenced state before the
    /// heading check runs, so the fence line itself is never a heading. Only lines starting with
    /// exactly one `#` followed by a space count; deeper heading levels are ignored.
    pub fn build(lines: &[&str]) -> Self {
        let mut headings = Vec::new();
        let mut in_code = false;

        for (idx, line) in lines.iter().enumerate() {
            if line.trim().starts_with(FENCE) {
                in_code = !in_code;
            }
            if in_code {
                continue;
            }
            if let Some(rest) = line.strip_prefix(HEADING_PREFIX) {
                headings.push(Heading {
                    title: rest.trim().to_string(),
                    line: idx + 1,
                });
            }
        }

        let mut starts: HashMap<String, Vec<usize>> = HashMap::new();
        for heading in &headings {
            starts
                .entry(heading.title.clone())
                .or_default()
                .push(heading.line);
        }

        Self { headings, starts }
    }

    #[must_use]
    /// All recorded headings in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    #[must_use]
    /// Lines of every heading in document order.
    pub fn heading_lines(&self) -> Vec<usize> {
        self.headings.iter().map(|h| h.line).collect()
    }

    #[must_use]
    /// Lines carrying `title`, first to last; empty when the title never occurs.
    pub fn occurrences(&self, title: &str) -> &[usize] {
        self.starts.get(title).map(Vec::as_slice).unwrap_or_default()
    }

    /// Heading line picked out by a selector.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::UnresolvedSelector`] when the title is absent, occurs fewer times
    /// than requested, or the occurrence is 0.
    pub fn resolve(&self, selector: &Selector) -> Result<usize> {
        let lines = self.occurrences(&selector.title);
        selector
            .occurrence
            .checked_sub(1)
            .and_then(|i| lines.get(i).copied())
            .ok_or_else(|| SplitError::UnresolvedSelector {
                title: selector.title.clone(),
                occurrence: selector.occurrence,
                found: lines.len(),
            })
    }

    #[must_use]
    /// Title of the heading sitting on `line`, if any.
    pub fn title_at(&self, line: usize) -> Option<&str> {
        self.headings
            .binary_search_by_key(&line, |h| h.line)
            .ok()
            .map(|i| self.headings[i].title.as_str())
    }

    #[must_use]
    /// Number of indexed headings.
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    #[must_use]
    /// Whether the document has no top-level headings outside code blocks.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/index.rs"]
mod tests;
