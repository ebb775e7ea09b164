//! project-config
//!
//! Resolves a web project's build configuration from `polymer.json` and
//! command-line overrides, and prints it.

use anyhow::Result;
use clap::Parser;
use project_config::cli::{Cli, Command};
use project_config::config::{ProjectConfig, ResolveEnv};
use project_config::format::{OutputFormat, format_inputs, format_project_config};
use project_config::logging::{LogLevel, LogLevelFilter, log_level_to_tracing};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

fn init_tracing(cli: &Cli, level: LogLevel) -> Result<()> {
    let level = log_level_to_tracing(level);
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    init_tracing(&cli, level)?;

    let mut env = ResolveEnv::from_process()?;
    env.logger = env
        .logger
        .with_level_filter(Arc::new(LogLevelFilter::new(level)));

    let config = ProjectConfig::from_file(&cli.config, Some(cli.overrides()), &env);
    debug!(root = %config.root().display(), inputs = config.inputs().len(), "Resolved project config");

    let output = match cli.command {
        Some(Command::Inputs) => format_inputs(config.inputs()),
        Some(Command::Show { format }) => format_project_config(&config, format)?,
        None => format_project_config(&config, OutputFormat::default())?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
