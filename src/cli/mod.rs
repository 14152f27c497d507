//! CLI commands implementation.

mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "iconforge")]
#[command(about = "Dynamic SVG file icon generation service")]
#[command(version)]
pub struct Cli {
    /// Alternate SVG template file (must carry the four substitution slots)
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the icon generation server
    Serve {
        /// Bind address: a port ("3000"), a host ("0.0.0.0"), or host:port
        bind: Option<String>,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.template);

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&settings, bind.as_deref()).await,
    }
}
