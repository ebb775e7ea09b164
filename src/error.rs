//! Error types for configuration file access.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a configuration file that exists could not be used.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigFileError {
    /// The file exists but reading it failed (permissions, not UTF-8, ...).
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was read but is not a valid configuration object.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The file is valid JSON but its top level is not an object.
    #[error("failed to parse {}: expected a JSON object, found {found}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl ConfigFileError {
    /// Path of the offending file.
    pub fn path(&self) -> &Path {
        match self {
            ConfigFileError::Io { path, .. }
            | ConfigFileError::Parse { path, .. }
            | ConfigFileError::NotAnObject { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_path() {
        let source = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = ConfigFileError::Parse {
            path: PathBuf::from("/proj/polymer.json"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("failed to parse /proj/polymer.json: "));
        assert_eq!(err.path(), Path::new("/proj/polymer.json"));
    }

    #[test]
    fn test_not_an_object_display() {
        let err = ConfigFileError::NotAnObject {
            path: PathBuf::from("polymer.json"),
            found: "an array",
        };
        assert_eq!(
            err.to_string(),
            "failed to parse polymer.json: expected a JSON object, found an array"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = ConfigFileError::Io {
            path: PathBuf::from("locked.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = std::error::Error::source(&err).expect("io error has a source");
        assert_eq!(source.to_string(), "denied");
    }
}
