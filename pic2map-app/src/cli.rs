use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Display pictures location in a map
#[derive(Debug, Parser)]
#[command(name = "pic2map", version)]
pub struct Cli {
    /// Log level
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add location information for pictures under directory
    Add {
        /// Base directory
        #[arg(value_parser = valid_directory)]
        directory: PathBuf,
    },
    /// Remove location information for pictures under directory
    Remove {
        /// Base directory
        #[arg(value_parser = valid_directory)]
        directory: PathBuf,
    },
    /// Get number picture files in the database
    Count,
    /// Run web server
    Serve {
        /// Address to listen on
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            // `log` has no level above error
            LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
        }
    }
}

/// Accepts only directories that can be listed.
pub fn valid_directory(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);
    if !path.is_dir() {
        return Err(format!("{:?} is not a valid directory", path));
    }
    if fs::read_dir(&path).is_err() {
        return Err(format!("not enough permissions to explore {:?}", path));
    }
    Ok(path)
}
