//! Section ranges: the lines each heading owns.

use crate::section::SectionRange;
use std::collections::btree_map::Values;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
/// Heading line to owned range, partitioning the document from the first heading onward.
pub struct SectionRanges {
    ranges: BTreeMap<usize, SectionRange>,
}

impl SectionRanges {
    #[must_use]
    /// Compute the range for every heading line.
    ///
    /// A section runs from its heading to the line before the next heading, and the last one runs
    /// to `max_line`. Input order does not matter.
    pub fn resolve(heading_lines: &[usize], max_line: usize) -> Self {
        let mut sorted = heading_lines.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let ranges = sorted
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = sorted.get(i + 1).map_or(max_line, |next| next - 1);
                (start, SectionRange { start, end })
            })
            .collect();

        Self { ranges }
    }

    #[must_use]
    /// Range owned by the heading on `line`, if a heading sits there.
    pub fn get(&self, line: usize) -> Option<SectionRange> {
        self.ranges.get(&line).copied()
    }

    /// Ranges in ascending line order.
    pub fn iter(&self) -> Values<'_, usize, SectionRange> {
        self.ranges.values()
    }

    #[must_use]
    /// Number of sections.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    /// Whether the document had no headings.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionRanges {
    type Item = &'a SectionRange;
    type IntoIter = Values<'a, usize, SectionRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "tests/ranges.rs"]
mod tests;
