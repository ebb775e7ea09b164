//! Partial configuration as supplied by a config file or a caller.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw, possibly partial project options.
///
/// Every field is optional. Paths are kept exactly as supplied; resolution
/// against the project root happens in [`super::ProjectConfig::resolve`].
/// Unknown keys in a config file are ignored and `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfigOptions {
    /// Project root directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Main document of the application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<PathBuf>,

    /// Application shell document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<PathBuf>,

    /// Short-form spelling of `fragments`, as produced by `--fragment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<Vec<PathBuf>>,

    /// Additional documents that are part of the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragments: Option<Vec<PathBuf>>,
}

impl ProjectConfigOptions {
    /// Options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_entrypoint(mut self, entrypoint: impl Into<PathBuf>) -> Self {
        self.entrypoint = Some(entrypoint.into());
        self
    }

    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    pub fn with_fragment<I, P>(mut self, fragment: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.fragment = Some(fragment.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_fragments<I, P>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.fragments = Some(fragments.into_iter().map(Into::into).collect());
        self
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The root, treating an empty string as unset.
    pub fn root_path(&self) -> Option<&Path> {
        non_empty(self.root.as_deref())
    }

    /// The entrypoint, treating an empty string as unset.
    pub fn entrypoint_path(&self) -> Option<&Path> {
        non_empty(self.entrypoint.as_deref())
    }

    /// The shell, treating an empty string as unset.
    pub fn shell_path(&self) -> Option<&Path> {
        non_empty(self.shell.as_deref())
    }

    /// The fragment list, `fragment` taking precedence over `fragments`.
    ///
    /// A present but empty `fragment` list still wins.
    pub fn fragment_paths(&self) -> Option<&[PathBuf]> {
        self.fragment.as_deref().or(self.fragments.as_deref())
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}
