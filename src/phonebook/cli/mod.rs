//! # CLI Layer
//!
//! The only place in the codebase that:
//! - Knows about stdin, stdout and stderr
//! - Parses process arguments
//! - Sets up logging
//! - Formats output for human consumption
//!
//! The phonebook always lives in [`PHONEBOOK_FILE`] in the working directory.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive menu loop
//! - `print`: Rendering of records and messages

mod print;
pub mod setup;
mod shell;

use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::PhonebookApi;
use phonebook::config::PhonebookConfig;
use phonebook::error::Result;
use phonebook::store::csv_backend::CsvBackend;
use setup::Cli;
use shell::Shell;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub const PHONEBOOK_FILE: &str = "phonebook.csv";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config();
    let api = PhonebookApi::open(CsvBackend::new(PHONEBOOK_FILE))?;
    info!(
        file = PHONEBOOK_FILE,
        entries = api.phonebook().len(),
        "phonebook opened"
    );

    let mut shell = Shell::new(api, io::stdin().lock(), io::stdout().lock(), config.page_size());
    shell.run()
}

/// Logs go to stderr so they never mix with the menu. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config() -> PhonebookConfig {
    let Some(dirs) = ProjectDirs::from("com", "phonebook", "phonebook") else {
        warn!("could not determine config dir, using defaults");
        return PhonebookConfig::default();
    };

    PhonebookConfig::load(dirs.config_dir()).unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config, using defaults");
        PhonebookConfig::default()
    })
}
