//! Output formatting for resolved configurations.

use crate::config::ProjectConfig;
use std::path::Path;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format '{}'. Valid options: json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a configuration in the requested format.
pub fn format_project_config(
    config: &ProjectConfig,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(config),
        OutputFormat::Markdown => Ok(format_project_config_markdown(config)),
    }
}

/// Format a configuration as markdown.
pub fn format_project_config_markdown(config: &ProjectConfig) -> String {
    let mut md = String::new();

    md.push_str("# Project Config\n");
    md.push_str(&format!("- **root**: `{}`\n", config.root().display()));
    md.push_str(&format!(
        "- **entrypoint**: `{}`\n",
        config.entrypoint().display()
    ));
    if let Some(shell) = config.shell() {
        md.push_str(&format!("- **shell**: `{}`\n", shell.display()));
    }

    if !config.fragments().is_empty() {
        md.push_str(&format!("\n## Fragments ({})\n", config.fragments().len()));
        for fragment in config.fragments() {
            md.push_str(&format!("- `{}`\n", fragment.display()));
        }
    }

    md.push_str(&format!("\n## Inputs ({})\n", config.inputs().len()));
    for input in config.inputs() {
        md.push_str(&format!("- `{}`\n", input.display()));
    }

    md
}

/// One input path per line.
pub fn format_inputs(inputs: &[impl AsRef<Path>]) -> String {
    inputs
        .iter()
        .map(|p| format!("{}\n", p.as_ref().display()))
        .collect()
}
