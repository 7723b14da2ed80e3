//! Topic assembly: turn a topic's selectors into the text of one output file.
//!
//! The corpus is loaded and indexed once. Each topic is first resolved into a plan (which line
//! ranges to copy, in ascending order, without duplicates) and the plan is then rendered. Keeping
//! the two steps apart lets the CLI print a plan without writing anything.

use crate::clean::clean_markup;
use crate::error::{Result, SplitError};
use crate::index::HeadingIndex;
use crate::lines::split_lines;
use crate::ranges::SectionRanges;
use crate::topics::Topic;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// One corpus section copied into a topic file.
pub struct PlannedSection {
    /// Heading title of the section.
    pub title: String,
    /// First line copied (the heading line, 1-indexed).
    pub start: usize,
    /// Last line copied (inclusive).
    pub end: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// Resolved sections for one output file, in document order.
pub struct TopicPlan {
    /// Output file name.
    pub file_name: String,
    /// Title written as the file header.
    pub title: String,
    /// Sections to copy, ascending by start line.
    pub sections: Vec<PlannedSection>,
}

#[derive(Debug)]
/// The loaded corpus with its heading index and section ranges.
pub struct Corpus {
    lines: Vec<String>,
    index: HeadingIndex,
    ranges: SectionRanges,
}

impl Corpus {
    #[must_use]
    /// Split the corpus into lines and index its sections.
    pub fn new(text: &str) -> Self {
        let lines = split_lines(text);
        let index = HeadingIndex::build(&lines);
        let ranges = SectionRanges::resolve(&index.heading_lines(), lines.len());

        Self {
            lines: lines.into_iter().map(str::to_string).collect(),
            index,
            ranges,
        }
    }

    #[must_use]
    /// Heading index of the corpus.
    pub fn index(&self) -> &HeadingIndex {
        &self.index
    }

    #[must_use]
    /// Section ranges of the corpus.
    pub fn ranges(&self) -> &SectionRanges {
        &self.ranges
    }

    #[must_use]
    /// Number of lines in the corpus.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Resolve a topic's selectors into ordered, de-duplicated sections.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::Topic`] wrapping [`SplitError::UnresolvedSelector`] for the first
    /// selector whose title is absent or occurs fewer times than requested.
    pub fn plan(&self, topic: &Topic) -> Result<TopicPlan> {
        let mut starts = BTreeSet::new();
        for selector in &topic.sections {
            let line = self
                .index
                .resolve(selector)
                .map_err(|source| SplitError::Topic {
                    file_name: topic.file_name.clone(),
                    source: Box::new(source),
                })?;
            starts.insert(line);
        }

        let sections = starts
            .into_iter()
            .filter_map(|start| self.ranges.get(start))
            .map(|range| PlannedSection {
                title: self
                    .index
                    .title_at(range.start)
                    .unwrap_or_default()
                    .to_string(),
                start: range.start,
                end: range.end,
            })
            .collect();

        Ok(TopicPlan {
            file_name: topic.file_name.clone(),
            title: topic.title(),
            sections,
        })
    }

    #[must_use]
    /// Concatenate the planned sections, each right-trimmed with one trailing newline, separated
    /// by a single blank line.
    ///
    /// Sections whose lines fall outside this corpus are skipped with a warning.
    pub fn assemble(&self, plan: &TopicPlan) -> String {
        plan.sections
            .iter()
            .filter_map(|section| {
                let lines = section
                    .start
                    .checked_sub(1)
                    .and_then(|first| self.lines.get(first..section.end));
                if lines.is_none() {
                    tracing::warn!(
                        title = %section.title,
                        start = section.start,
                        end = section.end,
                        corpus_lines = self.lines.len(),
                        "Skipping section outside corpus"
                    );
                }
                lines
            })
            .map(|lines| format!("{}\n", lines.join("\n").trim_end()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Produce the final file content for a topic: title header, blank line, cleaned text.
    ///
    /// # Errors
    ///
    /// Returns an error if any selector of the topic cannot be resolved.
    pub fn render(&self, topic: &Topic) -> Result<String> {
        let plan = self.plan(topic)?;
        let merged = self.assemble(&plan);
        Ok(format!("# {}\n\n{}", plan.title, clean_markup(&merged)))
    }
}

#[cfg(test)]
#[path = "tests/assemble.rs"]
mod tests;
