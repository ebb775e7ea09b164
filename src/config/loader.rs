//! Reading project options from a JSON config file.
//!
//! [`read_config_file`] reports exactly what happened as a [`ConfigFile`];
//! [`load_options_file`] turns that outcome into options plus a diagnostic
//! event and never fails.

use super::types::ProjectConfigOptions;
use crate::error::ConfigFileError;
use crate::logging::{LogLevel, Logger};
use serde_json::{Value, json};
use std::io::ErrorKind;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "polymer.json";

/// Outcome of reading a config file.
#[derive(Debug)]
pub enum ConfigFile {
    /// The file was read and parsed.
    Found(ProjectConfigOptions),
    /// No file at the given path.
    NotFound,
    /// The file exists but could not be read or parsed.
    Invalid(ConfigFileError),
}

impl ConfigFile {
    /// The parsed options, or empty options for any other outcome.
    pub fn into_options(self) -> ProjectConfigOptions {
        match self {
            ConfigFile::Found(options) => options,
            ConfigFile::NotFound | ConfigFile::Invalid(_) => ProjectConfigOptions::default(),
        }
    }
}

/// Read and parse a config file.
pub fn read_config_file(path: &Path) -> ConfigFile {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigFile::NotFound,
        Err(source) => {
            return ConfigFile::Invalid(ConfigFileError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value = match serde_json::from_str::<Value>(&content) {
        Ok(value) => value,
        Err(source) => return parse_error(path, source),
    };

    // Only named keys count; `null` is an empty config.
    let found = match value {
        Value::Object(_) => {
            return match serde_json::from_value::<ProjectConfigOptions>(value) {
                Ok(options) => ConfigFile::Found(options),
                Err(source) => parse_error(path, source),
            };
        }
        Value::Null => return ConfigFile::Found(ProjectConfigOptions::default()),
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
    };
    ConfigFile::Invalid(ConfigFileError::NotAnObject {
        path: path.to_path_buf(),
        found,
    })
}

fn parse_error(path: &Path, source: serde_json::Error) -> ConfigFile {
    ConfigFile::Invalid(ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load options from a config file, falling back to empty options.
///
/// A missing file is logged at debug level; an unreadable or malformed file
/// is logged as a warning.
pub fn load_options_file(path: &Path, logger: &Logger) -> ProjectConfigOptions {
    let outcome = read_config_file(path);
    match &outcome {
        ConfigFile::Found(_) => {}
        ConfigFile::NotFound => {
            logger.log_with_data(
                LogLevel::Debug,
                "config file not found",
                json!({ "path": path.display().to_string() }),
            );
        }
        ConfigFile::Invalid(err) => {
            logger.log_with_data(
                LogLevel::Warning,
                "Could not load config file",
                json!({
                    "path": err.path().display().to_string(),
                    "err": err.to_string(),
                }),
            );
        }
    }
    outcome.into_options()
}
