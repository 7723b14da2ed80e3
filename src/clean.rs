//! Strip MDX component markup left over in the corpus.
//!
//! The corpus is exported from an MDX docs site, so callouts, step lists, tabs and embeds show up
//! as JSX-like tags. Wrapper tags are removed while their content is kept; embed and container
//! lines are dropped whole. This is a fixed substitution list, not a markup parser.

use crate::lines::split_lines;
use regex::Regex;
use std::sync::LazyLock;

/// Wrapper tags removed in place, leaving their content behind.
const WRAPPER_TAGS: &[&str] = &[
    "<Info>",
    "</Info>",
    "<Warning>",
    "</Warning>",
    "<Success>",
    "</Success>",
    "<Accordions>",
    "</Accordions>",
    "<Steps>",
    "</Steps>",
    "<Step>",
    "</Step>",
    "</Tabs>",
    "</Accordion>",
];

/// Opening tags of embeds and containers whose whole line is dropped.
static EMBED_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<(img|YouTube|Tweet|div|FirebaseStudioButton)\b").expect("valid regex")
});

static DIV_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</(div)>$").expect("valid regex"));

/// Opening tab and accordion tags; their attributes make them unfit for literal removal.
static PANEL_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<(Tabs|Accordion)\b").expect("valid regex"));

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

fn is_dropped_line(line: &str) -> bool {
    let stripped = line.trim();
    EMBED_LINE_RE.is_match(stripped)
        || DIV_CLOSE_RE.is_match(stripped)
        || PANEL_OPEN_RE.is_match(stripped)
}

#[must_use]
/// Clean assembled topic text into its final form.
///
/// Removes wrapper tags, drops embed/container lines, collapses runs of blank lines to a single
/// blank line, and trims the result so it ends with exactly one newline.
pub fn clean_markup(text: &str) -> String {
    let mut text = text.to_string();
    for tag in WRAPPER_TAGS {
        text = text.replace(tag, "");
    }

    let kept: Vec<&str> = split_lines(&text)
        .into_iter()
        .filter(|line| !is_dropped_line(line))
        .collect();
    let joined = kept.join("\n");
    let collapsed = BLANK_RUN_RE.replace_all(&joined, "\n\n");

    format!("{}\n", collapsed.trim())
}

#[cfg(test)]
#[path = "tests/clean.rs"]
mod tests;
