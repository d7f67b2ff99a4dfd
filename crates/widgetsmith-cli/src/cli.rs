//! Command-line schema.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse the `LOG_LEVEL` environment value; anything unknown is `info`.
    pub(crate) fn from_env_value(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "widgetsmith", about = "Configure and export UI widgets", version)]
pub(crate) struct Cli {
    /// Log verbosity (overrides LOG_LEVEL)
    #[arg(long = "log-level", value_enum, global = true)]
    pub(crate) log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List the available widgets
    List,

    /// Print a widget's default configuration file
    Defaults {
        /// Widget id, e.g. stacked-testimonials
        widget: String,
    },

    /// Render the standalone HTML document for a configuration file
    Render {
        /// Exported configuration (`<widget>-config.json`)
        #[arg(long)]
        config: PathBuf,

        /// Write the document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Generator options as JSON (library URL, autoplay period, ...)
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Show attributions for a widget
    Credits {
        widget: String,
    },
}
