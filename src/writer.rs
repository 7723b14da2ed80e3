//! Writing topic files to disk.
//!
//! Files are written one at a time in table order. The run stops at the first failure, leaving
//! earlier files in place; rerunning regenerates everything. Files not named by the table are
//! never touched.

use crate::assemble::Corpus;
use crate::error::{Result, SplitError};
use crate::section::SectionRange;
use crate::topics::TopicTable;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the corpus document at `source`.
///
/// # Errors
///
/// Returns [`SplitError::SourceNotFound`] if the file does not exist, or an IO error if it cannot
/// be read.
pub fn load_corpus(source: &Path) -> Result<Corpus> {
    if !source.exists() {
        return Err(SplitError::SourceNotFound(source.to_path_buf()));
    }
    let text = fs::read_to_string(source)?;
    let corpus = Corpus::new(&text);

    tracing::info!(
        source = %source.display(),
        lines = corpus.line_count(),
        headings = corpus.index().len(),
        largest_section = corpus.ranges().iter().map(SectionRange::len).max().unwrap_or(0),
        "Indexed corpus"
    );

    Ok(corpus)
}

/// Render every topic in `table` and write it under `out_dir`.
///
/// Returns the written paths in table order.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, a selector cannot be resolved, or a file
/// cannot be written. Files written before the failure remain.
pub fn write_topics(corpus: &Corpus, table: &TopicTable, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(table.len());
    for topic in &table.topics {
        let content = corpus.render(topic)?;
        let path = out_dir.join(&topic.file_name);
        fs::write(&path, content)?;
        tracing::info!(
            file = %path.display(),
            sections = topic.sections.len(),
            "Wrote topic file"
        );
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
#[path = "tests/writer.rs"]
mod tests;
