//! wpenv CLI — validate and render WordPress configuration from the environment.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use wpenv::config::Config;
use wpenv::render::write_wp_config;
use wpenv::telemetry::{TelemetryConfig, init_telemetry};

#[derive(Parser)]
#[command(name = "wpenv", about = "WordPress configuration from environment variables")]
struct Cli {
    /// Dotenv file to load before reading the environment (default: ./.env if present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    /// Single-line log output
    #[arg(long, global = true)]
    compact_logs: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the environment and exit
    Check,
    /// Print the loaded configuration with secrets redacted
    Show {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write wp-config.php
    Render {
        /// Output path (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.env_file {
        Some(ref path) => {
            dotenvy::from_path(path)?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
    init_telemetry(TelemetryConfig {
        compact: cli.compact_logs,
        ..TelemetryConfig::default()
    })?;

    let config = Config::from_env()?;

    match cli.command {
        Command::Check => cmd_check(&config),
        Command::Show { json } => cmd_show(&config, json),
        Command::Render { output } => cmd_render(&config, output),
    }
}

fn cmd_check(config: &Config) -> anyhow::Result<()> {
    let defaulted = config.auth_keys().defaulted().len();
    tracing::info!(
        database = config.database_name(),
        site_url = config.site_url(),
        placeholder_auth_keys = defaulted,
        "configuration ok"
    );
    println!("ok");
    Ok(())
}

fn cmd_show(config: &Config, json: bool) -> anyhow::Result<()> {
    let summary = config.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}

fn cmd_render(config: &Config, output: Option<PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(&path)?;
            write_wp_config(config, BufWriter::new(file))?;
            tracing::info!(path = %path.display(), "wrote wp-config.php");
        }
        None => write_wp_config(config, io::stdout().lock())?,
    }
    Ok(())
}
