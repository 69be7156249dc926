//! sshpick - Entry Point

use clap::Parser;
use sshpick::model::AppError;
use sshpick::source::{self, STORE_FILE_NAME};
use sshpick::view::{ColorConfig, TuiOptions};
use std::path::PathBuf;
use tracing::info;

/// sshpick - pick an ssh connection from a YAML record store
#[derive(Parser, Debug)]
#[command(name = "sshpick")]
#[command(version)]
#[command(about = "Terminal browser for picking an ssh connection from a YAML record store")]
pub struct Args {
    /// Connections file (default: search the standard locations)
    #[arg(short, long)]
    pub records: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with this text in the Filter: field
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Return to the list after a connection ends
    #[arg(long)]
    pub stay: bool,

    /// Write a commented example connections file to ./sshpick.yml and exit
    #[arg(long)]
    pub write_example: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.write_example {
        let path = PathBuf::from(STORE_FILE_NAME);
        source::write_example(&path).map_err(AppError::from)?;
        println!("Wrote example connections to {}", path.display());
        return Ok(());
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file =
            sshpick::config::load_config_with_precedence(args.config.clone()).map_err(AppError::from)?;
        let merged = sshpick::config::merge_config(config_file);
        let with_env = sshpick::config::apply_env_overrides(merged);
        sshpick::config::apply_cli_overrides(with_env, args.records.clone(), args.stay)
    };

    // Keep the guard alive until exit so buffered log lines are flushed.
    let _log_guard = sshpick::logging::init(&config.log_file_path).map_err(AppError::from)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let store = source::locate(config.records_file.as_deref(), &source::candidate_paths())
        .map_err(AppError::from)?;
    let records = source::load_records(&store).map_err(AppError::from)?;

    let options = TuiOptions::from_config(
        &config,
        args.filter.clone(),
        ColorConfig::from_env_and_args(args.no_color),
    );
    sshpick::view::run(records, options).map_err(AppError::from)?;

    Ok(())
}
