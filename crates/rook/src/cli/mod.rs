//! Command-line interface for the rook binary.
//!
//! The root command carries the process-wide options (log level, log
//! directory, dry run). Daemon roles live under the hidden `ceph` command.

pub mod ceph;
pub mod error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rook_clusterd::LogLevel;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rook", about = "Rook (Storage Orchestration)")]
pub struct Cli {
    #[command(flatten)]
    pub globals: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options that apply to every command.
#[derive(Debug, Clone, clap::Args)]
pub struct GlobalOptions {
    /// logging level for logging/tracing output
    #[arg(long, global = true, env = "ROOK_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// also write logs to a daily rolling file in this directory
    #[arg(long, global = true, env = "ROOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// print the resolved context and daemon invocation as JSON instead of starting the role
    #[arg(long, global = true)]
    pub dry_run: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_dir: None,
            dry_run: false,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the rook version
    Version,

    /// Main command for Ceph operator and daemons.
    #[command(hide = true)]
    Ceph {
        #[command(subcommand)]
        command: ceph::CephCommand,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => {
            println!("rook: {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Ceph { command } => ceph::run(command, &cli.globals),
    }
}
