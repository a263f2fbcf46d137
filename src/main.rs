// src/main.rs

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use stockroom::cli::{self, Cli, Commands};
use stockroom::settings::{io as settings_io, AppSettings};

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let settings_result = settings_io::load_settings_from_file::<AppSettings>();
    let settings = settings_result.as_ref().cloned().unwrap_or_default();

    init_logging(settings.log_filter.as_deref());
    if let Err(e) = &settings_result {
        warn!("Using default settings: {}", e);
    }

    let args = Cli::parse();
    let db_path = settings.resolve_db_path(args.db.clone());

    let result = match args.command {
        Commands::Migrate => cli::migrate::run(&db_path),
        Commands::ListSteps => {
            cli::migrate::list_steps();
            Ok(())
        }
        Commands::ListColumns { table } => cli::list_columns::run(&db_path, &table),
        Commands::SetDbPath { path } => save_db_path(settings, path),
        Commands::Supplier(command) => cli::supplier::run(&db_path, command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the settings file.
fn init_logging(settings_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings_filter.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn save_db_path(mut settings: AppSettings, path: std::path::PathBuf) -> stockroom::DbResult<()> {
    settings.database_path = Some(path);
    settings_io::save_settings_to(&settings, &settings_io::get_config_path()?)?;
    println!("Database path saved");
    Ok(())
}
