//! The topic table maps output files to the corpus sections they collect.
//!
//! Each output file lists heading selectors: a title plus a 1-based occurrence for titles that
//! repeat in the corpus. The table is plain data so it can be swapped for one loaded from JSON
//! without touching the assembly code.

use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn first_occurrence() -> usize {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Picks one heading by title and its position among same-titled headings.
pub struct Selector {
    /// Exact heading title, as it appears after the `# ` marker.
    pub title: String,
    /// Which occurrence of the title to take, counting from 1 in document order.
    #[serde(default = "first_occurrence")]
    pub occurrence: usize,
}

impl Selector {
    #[must_use]
    /// Select the first heading with this title.
    pub fn first(title: &str) -> Self {
        Self::nth(title, 1)
    }

    #[must_use]
    /// Select the `occurrence`-th heading with this title.
    pub fn nth(title: &str, occurrence: usize) -> Self {
        Self {
            title: title.to_string(),
            occurrence,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One output file and the sections gathered into it.
pub struct Topic {
    /// File name written inside the output directory, e.g. `cli-commands.md`.
    pub file_name: String,
    /// Headings whose sections make up the file. Order here does not affect output order.
    pub sections: Vec<Selector>,
}

impl Topic {
    #[must_use]
    /// Build a topic from a file name and its selectors.
    pub fn new(file_name: &str, sections: Vec<Selector>) -> Self {
        Self {
            file_name: file_name.to_string(),
            sections,
        }
    }

    #[must_use]
    /// Human title derived from the file name: `vscode-and-devtools.md` becomes
    /// `Vscode And Devtools`.
    pub fn title(&self) -> String {
        let stem = self
            .file_name
            .strip_suffix(".md")
            .unwrap_or(&self.file_name)
            .replace('-', " ");
        title_case(&stem)
    }
}

/// Upper-case every letter that follows a non-letter and lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Ordered list of output files; files are written in this order.
pub struct TopicTable {
    /// Topics in write order.
    pub topics: Vec<Topic>,
}

impl TopicTable {
    /// Load a topic table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| SplitError::TopicTable {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    /// Number of output files described by the table.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    /// Whether the table lists no output files.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    #[must_use]
    /// The table used to regenerate the Patrol documentation references.
    pub fn reference() -> Self {
        use Selector as S;

        let topics = vec![
            Topic::new(
                "overview-and-compatibility.md",
                vec![
                    S::first("Patrol"),
                    S::first("Improved logging and reporting is here!"),
                    S::first("New package - patrol_finders"),
                    S::first("Patrol 3.0 is here"),
                    S::first("New major release - Patrol 4.0"),
                    S::first("Supported platforms"),
                    S::first("Compatibility table"),
                ],
            ),
            Topic::new(
                "cli-commands.md",
                vec![
                    S::first("build"),
                    S::first("devices"),
                    S::first("doctor"),
                    S::first("develop"),
                    S::first("test"),
                    S::first("update"),
                ],
            ),
            Topic::new(
                "installation-and-setup.md",
                vec![S::first("Install Patrol"), S::first("Physical iOS devices")],
            ),
            Topic::new("web-testing.md", vec![S::first("Flutter Web Testing")]),
            Topic::new(
                "finders-and-widget-tests.md",
                vec![
                    S::first("Using Patrol finders in widget tests"),
                    S::nth("Overview", 2),
                    S::nth("Usage", 1),
                ],
            ),
            Topic::new(
                "native-automation.md",
                vec![
                    S::first("Feature parity"),
                    S::first("Native Automation 2.0 (native2)"),
                    S::nth("Overview", 3),
                    S::nth("Usage", 2),
                ],
            ),
            Topic::new(
                "logging-reporting-and-allure.md",
                vec![S::first("Logs and test results"), S::first("Allure")],
            ),
            Topic::new(
                "ci-and-device-farms.md",
                vec![
                    S::nth("Overview", 1),
                    S::first("Platforms"),
                    S::first("Device labs"),
                    S::first("Traditional"),
                    S::first("BrowserStack"),
                    S::first("Firebase Test Lab"),
                    S::first("LambdaTest"),
                    S::first("LambdaTest overview"),
                ],
            ),
            Topic::new(
                "recipes-and-examples.md",
                vec![
                    S::first("Write your first test"),
                    S::first("Disabling/enabling Bluetooth"),
                    S::first("Granting camera permission"),
                    S::first("Pick images from gallery"),
                    S::first("Pull to refresh"),
                    S::first("Take photo using camera"),
                    S::first("Patrol tags"),
                ],
            ),
            Topic::new(
                "vscode-and-devtools.md",
                vec![
                    S::first("Patrol DevTools Extension"),
                    S::first("Guide for Patrol VS Code extension"),
                    S::first("Debugging Patrol tests"),
                ],
            ),
            Topic::new(
                "troubleshooting-and-best-practices.md",
                vec![S::first("Effective Patrol"), S::first("Tips and tricks")],
            ),
        ];

        Self { topics }
    }
}

#[cfg(test)]
#[path = "tests/topics.rs"]
mod tests;
