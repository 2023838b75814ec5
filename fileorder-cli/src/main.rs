use anyhow::{Context, Result};
use clap::Parser;
use fileorder_core::{Config, OutputFormatter, PlanError, VersionResult};
use std::path::{Path, PathBuf};
use std::process;

mod clear;
mod cli;
mod fix;
mod inspect;
mod reorder;
mod report;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // None lets the preview detect a terminal on its own
    let use_color = if cli.no_color { Some(false) } else { None };
    let config_path = cli.config;

    match cli.command {
        Commands::Inspect { dir, output } => {
            let config = load_config(config_path.as_deref(), &dir)?;
            inspect::handle_inspect(&dir, &config, output)
        },

        Commands::Reorder {
            dir,
            group,
            order,
            moves,
            convention,
            dry_run,
            preview,
            output,
            quiet,
        } => {
            let config = load_config(config_path.as_deref(), &dir)?;
            reorder::handle_reorder(
                &dir,
                &config,
                &group,
                order,
                moves,
                convention,
                dry_run,
                preview.into(),
                use_color,
                output,
                quiet,
            )
        },

        Commands::Fix {
            dir,
            dry_run,
            preview,
            output,
            quiet,
        } => {
            let config = load_config(config_path.as_deref(), &dir)?;
            fix::handle_fix(
                &dir,
                &config,
                dry_run,
                preview.into(),
                use_color,
                output,
                quiet,
            )
        },

        Commands::Clear {
            dir,
            group,
            dry_run,
            preview,
            output,
            quiet,
        } => {
            let config = load_config(config_path.as_deref(), &dir)?;
            clear::handle_clear(
                &dir,
                &config,
                &group,
                dry_run,
                preview.into(),
                use_color,
                output,
                quiet,
            )
        },

        Commands::Version { output } => handle_version(output),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// `--config` if given, else `<dir>/.fileorder.toml`, else the user config
fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        log::debug!("using config {}", path.display());
        return Config::load_from_path(path)
            .with_context(|| format!("Config file not found or invalid: {}", path.display()));
    }
    Config::discover(dir, user_config_path().as_deref())
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fileorder").join("config.toml"))
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(plan_error) = error.downcast_ref::<PlanError>() {
        return match plan_error {
            PlanError::NameCollision(_) => 1, // Collisions
            _ => 2,                           // Invalid input
        };
    }

    let message = error.to_string();
    if message.contains("collision") || message.contains("already exists") {
        1
    } else if message.contains("invalid") || message.contains("not found") {
        2
    } else {
        3 // Internal error
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "fileorder".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
