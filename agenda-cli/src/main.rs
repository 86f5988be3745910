mod output;

use std::path::{Path, PathBuf};

use agenda_core::{Event, aggregate, archives, extract_events};
use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Convert a markdown conference agenda into JSON event and CFP collections")]
struct Cli {
    /// Primary agenda document; archive links inside it are resolved
    /// relative to its directory
    #[arg(long, default_value = "README.md")]
    input: PathBuf,

    /// Output path for the full event collection, relative to the input's
    /// directory unless absolute
    #[arg(long, default_value = "page/src/misc/all-events.json")]
    events_out: PathBuf,

    /// Output path for the deadline-sorted CFP collection, relative to the
    /// input's directory unless absolute
    #[arg(long, default_value = "page/src/misc/all-cfps.json")]
    cfps_out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (events, cfps) = run(&cli)?;
    println!("{events} events, {cfps} open CFPs");
    Ok(())
}

fn run(cli: &Cli) -> Result<(usize, usize)> {
    let root = cli.input.parent().unwrap_or(Path::new("")).to_path_buf();
    let primary_text = read_document(&cli.input)?;

    // Read every archive up front: an unreadable input must abort the run
    // before either output exists.
    let mut archive_docs = Vec::new();
    for relative in archives::find_archives(&primary_text) {
        let path = root.join(&relative);
        let text = read_document(&path)?;
        archive_docs.push((path, text));
    }

    let archive_events = archive_docs
        .iter()
        .map(|(path, text)| parse_document(text, path))
        .collect();
    let primary_events = parse_document(&primary_text, &cli.input);

    let (all_events, all_cfps) = aggregate::aggregate(archive_events, primary_events);

    output::write_json(&resolve(&root, &cli.events_out), &all_events)?;
    output::write_json(&resolve(&root, &cli.cfps_out), &all_cfps)?;

    Ok((all_events.len(), all_cfps.len()))
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse one document, reporting its anomalies on stderr. Anomalies never
/// fail the run.
fn parse_document(text: &str, path: &Path) -> Vec<Event> {
    let mut anomalies = Vec::new();
    let events = extract_events(text, &mut anomalies);
    for anomaly in &anomalies {
        eprintln!("{} {}: {}", "warning:".yellow(), path.display(), anomaly);
    }
    events
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
