//! CLI definition for the packplan binary.
//!
//! The binary is a thin shell over the library: resolve the context from the
//! invocation signal, compose, emit.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Emit format for the final configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EmitFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// Declarative bundler configuration composer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Invocation signal selecting the build context
    /// (falls back to $PACKPLAN_TARGET; unknown signals mean development)
    pub target: Option<String>,

    /// Emit format for the final configuration
    #[arg(short, long, value_enum, default_value_t = EmitFormat::Json)]
    pub format: EmitFormat,

    /// Write the configuration to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Application source directory
    #[arg(long)]
    pub app_dir: Option<String>,

    /// Build output directory
    #[arg(long)]
    pub build_dir: Option<String>,

    /// Test sources directory
    #[arg(long)]
    pub test_dir: Option<String>,

    /// Style entry file (repeatable; replaces the default style list)
    #[arg(long = "style")]
    pub styles: Vec<String>,

    /// Page title for the generated template
    #[arg(long)]
    pub title: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
