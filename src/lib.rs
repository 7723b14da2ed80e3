//! docsplit: split a concatenated documentation corpus into topic files.
//!
//! The corpus is indexed by its top-level headings, each heading owns the lines up to the next
//! one, and a topic table picks which sections go into which output file. Leftover MDX markup is
//! cleaned from each file before it is written.
#![allow(clippy::multiple_crate_versions)]

pub mod assemble;
pub mod clean;
pub mod config;
pub mod error;
pub mod index;
pub mod lines;
pub mod ranges;
pub mod section;
pub mod topics;
pub mod writer;
