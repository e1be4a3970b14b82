//! # tableview
//!
//! A CLI for paging through JSON records as a sortable, filterable table.
//!
//! ## Overview
//!
//! tableview is built on top of tableviewlib and acts as its rendering layer:
//! it loads a JSON array of objects, replays the requested header activations,
//! filter and page changes against a `TableView`, and prints the resulting
//! page.
//!
//! ## Usage
//!
//! ```bash
//! # First page of a file, identity column hidden
//! tableview groceries.json --hide-id --title "Today's groceries"
//!
//! # Sort by price descending (two header activations), second page of 10
//! tableview groceries.json -s price -s price --page-size 10 -p 1
//!
//! # Filter, reading records from stdin
//! cat groceries.json | tableview --filter section=dairy
//!
//! # Structured output
//! tableview groceries.json --output json
//! ```

mod render;

use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::str::FromStr;
use tableviewlib::query::parse_page_size;
use tableviewlib::{
    load_records, read_records, Filter, JsonRecord, RenderedTable, TableOptions, TableView,
};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tableview")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Page through JSON records as a sortable, filterable table")
        .arg(
            Arg::new("file")
                .help("JSON file holding an array of objects ('-' or omitted reads stdin)"),
        )
        .arg(
            Arg::new("id")
                .long("id")
                .default_value("id")
                .help("Identity field of each record"),
        )
        .arg(
            Arg::new("hide-id")
                .long("hide-id")
                .action(ArgAction::SetTrue)
                .help("Hide the identity column"),
        )
        .arg(Arg::new("title").long("title").help("Title shown above the table"))
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .action(ArgAction::Append)
                .help("Activate a column header (repeat to cycle asc, desc, none)"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .value_parser(Filter::from_str)
                .help("Filter rows: KEY=VALUE, case-insensitive substring"),
        )
        .arg(
            Arg::new("page")
                .short('p')
                .long("page")
                .value_parser(value_parser!(usize))
                .help("Zero-based page to show"),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_parser(parse_page_size)
                .help("Rows per page: 5, 10, 25, 50 or 100"),
        )
        .arg(
            Arg::new("no-pagination")
                .long("no-pagination")
                .action(ArgAction::SetTrue)
                .help("Show all rows at once"),
        )
        .arg(
            Arg::new("no-sort")
                .long("no-sort")
                .action(ArgAction::SetTrue)
                .help("Disable sorting"),
        )
        .arg(
            Arg::new("no-filter")
                .long("no-filter")
                .action(ArgAction::SetTrue)
                .help("Disable filtering"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log state changes to stderr (-vv for more)"),
        )
}

/// Install the stderr logger. Warnings only unless -v is given.
fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("failed to install the logger")
}

/// Build table options from matches
fn build_options(matches: &ArgMatches) -> TableOptions {
    let mut options = TableOptions::new()
        .identity_key(
            matches
                .get_one::<String>("id")
                .map(|s| s.as_str())
                .unwrap_or("id"),
        )
        .hide_identity(matches.get_flag("hide-id"))
        .pagination(!matches.get_flag("no-pagination"))
        .sort(!matches.get_flag("no-sort"))
        .filter(!matches.get_flag("no-filter"));

    if let Some(title) = matches.get_one::<String>("title") {
        options = options.title(title);
    }
    options
}

/// Load records from the file argument or stdin
fn load_input(matches: &ArgMatches) -> anyhow::Result<Vec<JsonRecord>> {
    match matches.get_one::<String>("file").map(|s| s.as_str()) {
        None | Some("-") => Ok(read_records(std::io::stdin().lock())?),
        Some(path) => Ok(load_records(path)?),
    }
}

/// Replay the requested interactions and render the resulting page
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let records = load_input(matches)?;
    let options = build_options(matches);
    let mut table = TableView::new(&records, options);

    if let Some(size) = matches.get_one::<usize>("page-size") {
        if !table.options().enable_pagination {
            log::warn!("pagination is disabled, ignoring --page-size");
        }
        table.change_page_size(*size);
    }

    if let Some(filter) = matches.get_one::<Filter>("filter") {
        if !table.apply_filter(Some(filter.clone())) {
            log::warn!("filtering is disabled, ignoring --filter");
        }
    }

    if let Some(keys) = matches.get_many::<String>("sort") {
        for key in keys {
            if !table.toggle_sort(key) {
                log::warn!("sorting is disabled, ignoring --sort {}", key);
            }
        }
    }

    if let Some(page) = matches.get_one::<usize>("page") {
        if !table.change_page(*page) {
            log::warn!("pagination is disabled, ignoring --page");
        }
    }

    let rendered = RenderedTable::from_view(&table);

    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => Ok(format!("{}\n", serde_json::to_string_pretty(&rendered)?)),
        Some("table") | None => Ok(render::render_table(&rendered)),
        Some(other) => bail!("unknown output format: {}", other),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match init_logging(matches.get_count("verbose")).and_then(|()| run(&matches)) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
