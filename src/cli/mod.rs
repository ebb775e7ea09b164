//! CLI command definitions for project-config
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

use crate::config::{DEFAULT_CONFIG_FILE, ProjectConfigOptions};
use crate::format::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve and print web project build configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    /// Project root directory (overrides config)
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Main document of the application (overrides config)
    #[arg(long, value_name = "FILE", global = true)]
    pub entrypoint: Option<PathBuf>,

    /// Application shell document (overrides config)
    #[arg(long, value_name = "FILE", global = true)]
    pub shell: Option<PathBuf>,

    /// Fragment document; repeat for several (overrides config)
    #[arg(long, value_name = "FILE", global = true)]
    pub fragment: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration (default if no subcommand given)
    Show {
        /// Output format: markdown (default) or json
        #[arg(short, long, default_value = "markdown", value_name = "FORMAT")]
        format: OutputFormat,
    },

    /// Print the input documents, one per line
    Inputs,
}

impl Cli {
    /// Options derived from command-line flags, for layering over the file.
    pub fn overrides(&self) -> ProjectConfigOptions {
        ProjectConfigOptions {
            root: self.root.clone(),
            entrypoint: self.entrypoint.clone(),
            shell: self.shell.clone(),
            fragment: (!self.fragment.is_empty()).then(|| self.fragment.clone()),
            fragments: None,
        }
    }
}
