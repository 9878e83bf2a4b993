//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `safelink` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use safelink::app::warning_tooltip;
use safelink::initialization::{init_logger_with, resolve_store_path};
use safelink::storage::{
    load_blacklist, load_settings, save_blacklist, save_settings, seed_blacklist, JsonFileStore,
};
use safelink::{run_scan, AddOutcome, CheckKind, Config, LogFormat, LogLevel};

/// Exit code used by `scan --fail-on-suspicious` when a link was flagged.
const EXIT_SUSPICIOUS: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "safelink", version, about = "Flags suspicious links")]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    /// JSON store holding the blacklist and settings [env: SAFELINK_STORE]
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify every link in a file (`-` for stdin)
    Scan {
        /// File with one link per line
        file: PathBuf,
        /// Skip a check for this run only (repeatable)
        #[arg(long, value_enum)]
        disable: Vec<CheckKind>,
        /// Exit with status 2 if any link is suspicious
        #[arg(long)]
        fail_on_suspicious: bool,
    },
    /// Seed the blacklist on first use
    Init {
        /// Seed file with one domain per line
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Show or edit the blacklist
    Blacklist {
        #[command(subcommand)]
        action: BlacklistAction,
    },
    /// Show or change which checks run
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Subcommand)]
enum BlacklistAction {
    /// Print entries with their positions
    List,
    /// Add a domain (scheme, `www.` and path are stripped)
    Add { domain: String },
    /// Remove the entry at a position shown by `list`
    Remove { index: usize },
}

#[derive(Debug, Subcommand)]
enum SettingsAction {
    /// Print the current settings
    Show,
    /// Turn a check on
    Enable {
        #[arg(value_enum)]
        check: CheckKind,
    },
    /// Turn a check off
    Disable {
        #[arg(value_enum)]
        check: CheckKind,
    },
}

fn main() -> Result<()> {
    // .env may set RUST_LOG or SAFELINK_STORE; a missing file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let store_path = resolve_store_path(cli.store.clone());

    match cli.command {
        Command::Scan {
            file,
            disable,
            fail_on_suspicious,
        } => {
            let config = Config {
                file,
                log_level: cli.log_level,
                log_format: cli.log_format,
                store_path,
                disabled_checks: disable,
                fail_on_suspicious,
            };
            scan(config)
        }
        Command::Init { seed } => init(store_path, seed),
        Command::Blacklist { action } => blacklist(store_path, action),
        Command::Settings { action } => settings(store_path, action),
    }
}

fn scan(config: Config) -> Result<()> {
    let fail_on_suspicious = config.fail_on_suspicious;
    match run_scan(config) {
        Ok(report) => {
            for verdict in report.suspicious_links() {
                if let Some(reason) = verdict.reason {
                    println!("{}\n{}\n", verdict.url, warning_tooltip(reason));
                }
            }
            println!(
                "Checked {} link{} ({} suspicious, {} safe, {} skipped) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.suspicious,
                report.safe,
                report.skipped,
                report.elapsed_seconds
            );
            if fail_on_suspicious && report.suspicious > 0 {
                process::exit(EXIT_SUSPICIOUS);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("safelink error: {:#}", e);
            process::exit(1);
        }
    }
}

fn init(store_path: PathBuf, seed: Option<PathBuf>) -> Result<()> {
    let seed_text = match seed {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?,
        None => String::new(),
    };
    let mut store = JsonFileStore::new(store_path);
    if seed_blacklist(&mut store, &seed_text)? {
        println!("Blacklist initialized in {}", store.path().display());
    } else {
        println!("Blacklist already present in {}", store.path().display());
    }
    Ok(())
}

fn blacklist(store_path: PathBuf, action: BlacklistAction) -> Result<()> {
    let mut store = JsonFileStore::new(store_path);
    let mut blacklist = load_blacklist(&store)?;

    match action {
        BlacklistAction::List => {
            if blacklist.is_empty() {
                println!("Blacklist is empty.");
            }
            for (index, domain) in blacklist.iter().enumerate() {
                println!("{index}\t{domain}");
            }
        }
        BlacklistAction::Add { domain } => match blacklist.add(&domain) {
            AddOutcome::Added(entry) => {
                save_blacklist(&mut store, &blacklist)?;
                println!("Added {entry}");
            }
            AddOutcome::Duplicate(entry) => println!("{entry} is already listed"),
            AddOutcome::Empty => println!("Nothing to add"),
        },
        BlacklistAction::Remove { index } => match blacklist.remove(index) {
            Some(entry) => {
                save_blacklist(&mut store, &blacklist)?;
                println!("Removed {entry}");
            }
            None => println!("No entry at position {index}"),
        },
    }
    Ok(())
}

fn settings(store_path: PathBuf, action: SettingsAction) -> Result<()> {
    let mut store = JsonFileStore::new(store_path);
    let mut settings = load_settings(&store)?;

    let change = match action {
        SettingsAction::Show => None,
        SettingsAction::Enable { check } => Some((check, true)),
        SettingsAction::Disable { check } => Some((check, false)),
    };
    if let Some((check, on)) = change {
        settings.set(check, on);
        save_settings(&mut store, &settings)?;
    }

    for (check, on) in [
        (CheckKind::Http, settings.check_http),
        (CheckKind::Blacklist, settings.check_blacklist),
        (CheckKind::Imposter, settings.check_imposter),
    ] {
        println!("{check}\t{}", if on { "on" } else { "off" });
    }
    Ok(())
}
