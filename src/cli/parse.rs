//! CLI parse: clap types for Pageforge. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pageforge CLI - Prompt-driven landing page generation
#[derive(Parser)]
#[command(name = "pageforge")]
#[command(about = "Turn a natural-language prompt into a themed landing page preview")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a landing page from a prompt and render the preview
    Generate {
        /// Natural-language description of the page (prompted for
        /// interactively when omitted)
        prompt: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Render the built-in default document without contacting a backend
    Preview {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List built-in theme presets
    Themes {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
