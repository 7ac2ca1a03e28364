//! mechclock - command-line front end for the clock and its settings.

use std::{error::Error, path::PathBuf, process, sync::Arc};

use clap::Parser;
use mechclock::{
    cli::{CliService, formatting::format_error},
    config::{AppPaths, LogLevel},
    services::SystemClock,
    settings::{FileStorage, KeyValueStorage, MemoryStorage, SettingsStore},
    tracing_config,
};
use tracing::{instrument, warn};

/// Analog, digital and date clock with persisted display settings.
#[derive(Debug, Parser)]
#[command(name = "mechclock", version)]
struct Args {
    /// Storage file to keep settings in instead of the default location.
    #[arg(long, value_name = "FILE", conflicts_with = "memory")]
    storage: Option<PathBuf>,

    /// Keep settings in memory only; nothing is read or written.
    #[arg(long)]
    memory: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Category, command and command arguments, e.g. `settings toggle digital`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let category = args.command.first().map(String::as_str).unwrap_or("help");
    let command = args.command.get(1).map(String::as_str).unwrap_or("");
    let command_args = args.command.get(2..).unwrap_or(&[]);

    let _log_guard = if category == "clock" && command == "watch" {
        Some(tracing_config::init_with_file(args.log_level)?)
    } else {
        tracing_config::init(args.log_level)?;
        None
    };

    let settings = SettingsStore::open(open_storage(&args));
    let cli_service = CliService::new(settings, Arc::new(SystemClock));

    match cli_service
        .execute_command(category, command, command_args)
        .await
    {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

/// Picks the settings storage; falls back to memory when no location can be resolved.
#[instrument(skip(args))]
fn open_storage(args: &Args) -> Arc<dyn KeyValueStorage> {
    if args.memory {
        return Arc::new(MemoryStorage::new());
    }

    let path = match args.storage.clone() {
        Some(path) => path,
        None => match AppPaths::storage_file() {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "No storage location, settings will not persist");
                return Arc::new(MemoryStorage::new());
            }
        },
    };

    Arc::new(FileStorage::new(path))
}
