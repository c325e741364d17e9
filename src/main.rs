//! mathutf CLI
//!
//! Commands:
//! - (none) - print the reference sheet of commonly used symbols
//! - `search <QUERY>` - regex search over keys, names, categories and aliases
//! - `get <KEY>` - exact key lookup
//! - `keys` - every available top-level name
//! - `which <CHAR>` / `tex <COMMAND>` - reverse lookups
//! - `check` - verify names against the Unicode name database

mod cli;

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands, SearchArgs};
use mathutf::{format, sheet, verify, Entry, Registry};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = execute(
        cli.command,
        mathutf::symbols(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(get_exit_code(&e));
    }
}

/// Run one command against `registry`, writing results to `out` and notices to `err`
fn execute(
    command: Option<Commands>,
    registry: &Registry,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match command {
        None => write!(out, "{}", sheet::USEFUL_SYMBOLS)?,
        Some(Commands::Search(args)) => execute_search(args, registry, out, err)?,
        Some(Commands::Get { key }) => writeln!(out, "{}", registry.get(&key)?)?,
        Some(Commands::Keys) => {
            for name in registry.names() {
                writeln!(out, "{}", name)?;
            }
        }
        Some(Commands::Which { chr }) => {
            let entries: Vec<&Entry> = registry.by_char(chr).collect();
            write_entries(&entries, false, out, err)?;
        }
        Some(Commands::Tex { command }) => {
            let entries: Vec<&Entry> = registry.by_markup(&command).collect();
            write_entries(&entries, false, out, err)?;
        }
        Some(Commands::Check) => execute_check(registry, out, err)?,
    }
    Ok(())
}

fn execute_search(
    args: SearchArgs,
    registry: &Registry,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let limit = args.limit.unwrap_or(usize::MAX);
    let entries: Vec<&Entry> = registry.search(&args.query)?.take(limit).collect();
    debug!("Query '{}' matched {} symbols", args.query, entries.len());
    write_entries(&entries, args.json, out, err)
}

fn execute_check(registry: &Registry, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    write!(out, "{}", format::format_table(registry.all_entries()))?;

    let mismatches = verify::check_registry(registry);
    if mismatches.is_empty() {
        return Ok(());
    }
    for mismatch in &mismatches {
        writeln!(err, "{}", mismatch)?;
    }
    Err(anyhow!(
        "{} of {} symbol names do not match the Unicode name database",
        mismatches.len(),
        registry.len()
    ))
}

fn write_entries(entries: &[&Entry], json: bool, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    if entries.is_empty() {
        writeln!(err, "no symbols match")?;
    }
    if json {
        writeln!(out, "{}", format::format_json(entries.iter().copied())?)?;
    } else if !entries.is_empty() {
        write!(out, "{}", format::format_table(entries.iter().copied()))?;
    }
    Ok(())
}

/// Determine exit code based on error type
fn get_exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<mathutf::Error>().map(mathutf::Error::error_code) {
        Some("invalid_query") => 1, // Invalid query pattern
        Some("key_not_found") => 3, // Not found error
        _ => 5,                     // Other application errors
    }
}
