#![forbid(unsafe_code)]

mod cli;
mod commands;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use widgetsmith_codegen::GeneratorOptions;

use cli::{Cli, Command, LogLevel};

fn init_logging(flag: Option<LogLevel>) -> Result<()> {
    let level = flag.unwrap_or_else(|| {
        LogLevel::from_env_value(&std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
    });

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(level))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    let output = match cli.command {
        Command::List => commands::list(),
        Command::Defaults { widget } => commands::defaults(&widget)?,
        Command::Credits { widget } => commands::credits(&widget)?,
        Command::Render { config, out, options } => {
            let config_text = fs::read_to_string(&config)
                .with_context(|| format!("failed to read {}", config.display()))?;
            let options = match options {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    serde_json::from_str(&text).context("invalid generator options")?
                }
                None => GeneratorOptions::default(),
            };
            debug!(?options, "generator options");

            let document = commands::render(&config_text, options)?;
            if let Some(out) = out {
                fs::write(&out, &document)
                    .with_context(|| format!("failed to write {}", out.display()))?;
                info!("wrote {}", out.display());
                return Ok(());
            }
            document
        }
    };

    println!("{output}");
    Ok(())
}
