//! Command-line interface for fabulist.
//!
//! Two commands: `serve` starts the web studio, `tell` runs the full
//! generation pipeline once from the terminal.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Turn a short idea into an illustrated, narrated children's story.
#[derive(Parser)]
#[command(name = "fabulist", version, about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug-level progress
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web studio
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate a story, illustration, and narration in one shot
    Tell {
        /// Story idea, keywords, or a short sentence
        idea: String,

        /// Narration voice (service identifier, e.g. en-US-AnaNeural)
        #[arg(long)]
        voice: Option<String>,

        /// Illustration size (1024x1024, 1792x1024, or 1024x1792)
        #[arg(long)]
        size: Option<String>,

        /// Directory to write artifacts into (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
