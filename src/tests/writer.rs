use super::{load_corpus, write_topics};
use crate::error::SplitError;
use crate::topics::{Selector, Topic, TopicTable};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const DOC: &str = "# Patrol\nIntro\n# build\nBuild it\n# test\nTest it\n";

#[test]
fn test_missing_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("absent.txt");

    let err = load_corpus(&source).err().unwrap();

    match err {
        SplitError::SourceNotFound(path) => assert_eq!(path, source),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_writes_each_topic() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("corpus.txt");
    fs::write(&source, DOC).unwrap();
    let out_dir = dir.path().join("skills").join("refs");

    let corpus = load_corpus(&source).unwrap();
    let table = TopicTable {
        topics: vec![
            Topic::new("overview.md", vec![Selector::first("Patrol")]),
            Topic::new(
                "cli-commands.md",
                vec![Selector::first("test"), Selector::first("build")],
            ),
        ],
    };

    let written = write_topics(&corpus, &table, &out_dir).unwrap();

    assert_eq!(
        written,
        vec![out_dir.join("overview.md"), out_dir.join("cli-commands.md")]
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("overview.md")).unwrap(),
        "# Overview\n\n# Patrol\nIntro\n"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("cli-commands.md")).unwrap(),
        "# Cli Commands\n\n# build\nBuild it\n\n# test\nTest it\n"
    );
}

#[test]
fn test_stale_files_untouched() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("corpus.txt");
    fs::write(&source, DOC).unwrap();
    let out_dir = dir.path().join("out");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("old.md"), "stale").unwrap();
    fs::write(out_dir.join("overview.md"), "previous run").unwrap();

    let corpus = load_corpus(&source).unwrap();
    let table = TopicTable {
        topics: vec![Topic::new("overview.md", vec![Selector::first("Patrol")])],
    };
    write_topics(&corpus, &table, &out_dir).unwrap();

    assert_eq!(fs::read_to_string(out_dir.join("old.md")).unwrap(), "stale");
    assert_eq!(
        fs::read_to_string(out_dir.join("overview.md")).unwrap(),
        "# Overview\n\n# Patrol\nIntro\n"
    );
}

#[test]
fn test_failure_keeps_earlier_files() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("corpus.txt");
    fs::write(&source, DOC).unwrap();
    let out_dir = dir.path().join("out");

    let corpus = load_corpus(&source).unwrap();
    let table = TopicTable {
        topics: vec![
            Topic::new("first.md", vec![Selector::first("build")]),
            Topic::new("broken.md", vec![Selector::nth("build", 2)]),
            Topic::new("last.md", vec![Selector::first("test")]),
        ],
    };

    let err = write_topics(&corpus, &table, &out_dir).unwrap_err();

    assert!(
        matches!(err, SplitError::Topic { ref file_name, .. } if file_name == "broken.md"),
        "unexpected error: {err}"
    );
    assert!(out_dir.join("first.md").exists());
    assert!(!out_dir.join("broken.md").exists());
    assert!(!out_dir.join("last.md").exists());
}
