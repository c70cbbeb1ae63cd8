//! `betters3tui-preview`: renders one search frame from a candidate list.
//!
//! This binary exercises the library end to end without an object store:
//! candidates are read from a file (or stdin), ranked against a query, and
//! the resulting frame is printed row by row.
//!
//! # Input
//!
//! Either a JSON array of objects or plain text with one name per line:
//!
//! ```json
//! [
//!   {"text": "photos/", "base_score": 2.0, "kind": "prefix"},
//!   {"text": "report.pdf", "baseScore": 1.0, "size": 52311, "last_modified": "2024-05-01T09:30:00Z"}
//! ]
//! ```
//!
//! # Example
//!
//! ```text
//! $ ls | betters3tui-preview --query rep --width 60 --height 12
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use serde_json::Value;

use betters3tui::observability::init_tracing;
use betters3tui::search::{Fuzzy, Match};
use betters3tui::ui::screen::{CrosstermTerminal, TerminalSize};
use betters3tui::ui::viewmodel::{
    DisplayRow, EmptyState, FooterInfo, HeaderInfo, RowKind, SearchBarInfo, SearchView, StatusMessage,
};
use betters3tui::ui::{self, Screen};
use betters3tui::{initialize, BetterS3Error, Config, Result};

#[derive(Debug, Parser)]
#[command(name = "betters3tui-preview", version, about = "Render a fuzzy search frame from a candidate list")]
struct Cli {
    /// Candidates: JSON array or one name per line. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Search query.
    #[arg(short, long, default_value = "")]
    query: String,

    /// Maximum number of results.
    #[arg(short, long)]
    limit: Option<usize>,

    /// Frame width in columns (defaults to the terminal width).
    #[arg(long)]
    width: Option<usize>,

    /// Frame height in rows (defaults to the terminal height).
    #[arg(long)]
    height: Option<usize>,

    /// Disable colors.
    #[arg(long)]
    no_color: bool,

    /// Built-in theme name.
    #[arg(long)]
    theme: Option<String>,

    /// Index of the selected result.
    #[arg(long, default_value_t = 0)]
    selected: usize,

    /// Location shown in the header.
    #[arg(long, default_value = "s3://")]
    location: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(if e.is_usage_error() { 2 } else { 1 })
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load_default()
        .unwrap_or_else(|e| {
            eprintln!("warning: {e}; using default configuration");
            Config::default()
        })
        .with_env_overrides();
    if cli.no_color {
        config.colors = false;
    }
    if cli.theme.is_some() {
        config.theme_name.clone_from(&cli.theme);
        config.theme_file = None;
    }

    init_tracing(&config);
    initialize(&config);

    let input = read_input(cli.file.as_ref())?;
    let fuzzy = Fuzzy::new(parse_candidates(&input))?;

    let matches: Vec<Match<'_, Value>> = match cli.limit {
        Some(n) => fuzzy.match_query(&cli.query).limit(n).collect(),
        None => fuzzy.match_query(&cli.query).into_iter().collect(),
    };
    tracing::info!(candidates = fuzzy.len(), matches = matches.len(), "preview ranked");

    let view = build_view(cli, &matches, fuzzy.len());

    let (term_width, term_height) = CrosstermTerminal.size();
    let mut screen = Screen::new(cli.width.unwrap_or(term_width), cli.height.unwrap_or(term_height));
    ui::render(&view, &mut screen)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for row in screen.rows()? {
        writeln!(out, "{row}").map_err(BetterS3Error::from)?;
    }
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parses a JSON array, falling back to one candidate per non-empty line.
fn parse_candidates(input: &str) -> Vec<Value> {
    if input.trim_start().starts_with('[') {
        match serde_json::from_str::<Vec<Value>>(input) {
            Ok(values) => return values,
            Err(e) => tracing::debug!(error = %e, "input is not a JSON array, reading lines"),
        }
    }
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect()
}

fn build_view(cli: &Cli, matches: &[Match<'_, Value>], total: usize) -> SearchView {
    let rows: Vec<DisplayRow> = matches.iter().map(display_row).collect();
    let searching = !cli.query.is_empty();

    let footer = if searching {
        FooterInfo::searching()
    } else {
        FooterInfo::browsing()
    }
    .with_status(StatusMessage::Info(format!("{}/{total}", rows.len())));

    SearchView {
        header: HeaderInfo::new("betters3tui", cli.location.as_str()),
        search: searching.then(|| SearchBarInfo {
            query: cli.query.clone(),
            cursor: None,
        }),
        selected: cli.selected.min(rows.len().saturating_sub(1)),
        empty_state: rows.is_empty().then(|| EmptyState::no_matches(&cli.query)),
        rows,
        confirming_delete: false,
        footer,
    }
}

fn display_row(m: &Match<'_, Value>) -> DisplayRow {
    let data = m.entry.data();
    let mut row = DisplayRow::from_match(m)
        .with_size(data.get("size").and_then(Value::as_u64))
        .with_modified(
            data.get("last_modified")
                .and_then(Value::as_str)
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|t| t.with_timezone(&Utc)),
        );
    match data.get("kind").and_then(Value::as_str) {
        Some("bucket") => row = row.with_kind(RowKind::Bucket),
        Some("prefix") => row = row.with_kind(RowKind::Prefix),
        Some("object") => row = row.with_kind(RowKind::Object),
        _ => {}
    }
    row
}
