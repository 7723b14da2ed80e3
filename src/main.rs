//! docsplit: regenerate topic reference files from a documentation corpus.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use docsplit::config::Config;
use docsplit::error::Result;
use docsplit::topics::TopicTable;
use docsplit::writer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docsplit")]
#[command(about = "Split a documentation corpus into topic files", long_about = None)]
struct Args {
    /// Repository root that source and output paths are relative to
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Corpus document to split
    #[arg(long, value_name = "FILE")]
    source: Option<String>,

    /// Directory to write topic files to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Load the topic table from a JSON file
    #[arg(long, value_name = "FILE")]
    topics: Option<String>,

    /// Print the resolved plan as JSON instead of writing files
    #[arg(long)]
    plan: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut cfg = Config::load(&args.root);

    // Override config with command line args
    if let Some(source) = args.source {
        cfg.source = source;
    }
    if let Some(output_dir) = args.output_dir {
        cfg.output_dir = output_dir;
    }
    if args.topics.is_some() {
        cfg.topics = args.topics;
    }

    let corpus = writer::load_corpus(&cfg.source_path(&args.root))?;
    let table = match cfg.topics_path(&args.root) {
        Some(path) => TopicTable::load(&path)?,
        None => TopicTable::reference(),
    };

    if args.plan {
        let plans = table
            .topics
            .iter()
            .map(|topic| corpus.plan(topic))
            .collect::<Result<Vec<_>>>()?;
        let json = serde_json::to_string_pretty(&plans).map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let out_dir = cfg.output_path(&args.root);
    let written = writer::write_topics(&corpus, &table, &out_dir)?;
    println!(
        "Generated {} topic files at {}",
        written.len(),
        out_dir.display()
    );

    Ok(())
}

