//! Legacy `bower.json` lookup for a default entrypoint.

use serde_json::Value;
use std::path::{Path, PathBuf};

/// File name of the legacy package manifest.
pub const LEGACY_MANIFEST_FILE: &str = "bower.json";

/// The `main` field of `<root>/bower.json`, if there is a usable one.
///
/// Any failure (no file, unreadable, invalid JSON, `main` missing, empty or
/// not a string) yields `None`. Nothing is logged.
pub fn manifest_main(root: &Path) -> Option<PathBuf> {
    let content = std::fs::read_to_string(root.join(LEGACY_MANIFEST_FILE)).ok()?;
    let manifest: Value = serde_json::from_str(&content).ok()?;
    manifest
        .get("main")
        .and_then(Value::as_str)
        .filter(|main| !main.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn root_with_manifest(content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(LEGACY_MANIFEST_FILE), content).unwrap();
        temp
    }

    #[test]
    fn test_main_string() {
        let temp = root_with_manifest(r#"{"name": "my-app", "main": "app/main.html"}"#);
        assert_eq!(manifest_main(temp.path()), Some(PathBuf::from("app/main.html")));
    }

    #[test]
    fn test_no_manifest() {
        let temp = TempDir::new().unwrap();
        assert_eq!(manifest_main(temp.path()), None);
    }

    #[test]
    fn test_invalid_json() {
        let temp = root_with_manifest("{\"main\": ");
        assert_eq!(manifest_main(temp.path()), None);
    }

    #[test]
    fn test_main_not_a_string() {
        let temp = root_with_manifest(r#"{"main": ["a.html", "b.html"]}"#);
        assert_eq!(manifest_main(temp.path()), None);

        let temp = root_with_manifest(r#"{"main": ""}"#);
        assert_eq!(manifest_main(temp.path()), None);

        let temp = root_with_manifest(r#"{"name": "no-main"}"#);
        assert_eq!(manifest_main(temp.path()), None);
    }
}
