//! Resolved project configuration.

use super::loader::load_options_file;
use super::manifest::manifest_main;
use super::merge::overlay;
use super::types::ProjectConfigOptions;
use crate::logging::Logger;
use crate::paths::{normalize_path_components, resolve_against, resolve_all};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Logger name used for config diagnostics.
pub const LOGGER_NAME: &str = "cli.project-config";

/// Entrypoint used when none is configured and no manifest names one.
pub const DEFAULT_ENTRYPOINT: &str = "index.html";

/// Ambient state a resolution depends on.
#[derive(Debug, Clone)]
pub struct ResolveEnv {
    /// Working directory; the default root and the base for relative paths.
    pub cwd: PathBuf,
    /// Receives config file diagnostics.
    pub logger: Logger,
}

impl ResolveEnv {
    pub fn new(cwd: impl Into<PathBuf>, logger: Logger) -> Self {
        Self {
            cwd: cwd.into(),
            logger,
        }
    }

    /// Capture the process working directory and a `tracing`-backed logger.
    pub fn from_process() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd, Logger::new().with_name(LOGGER_NAME)))
    }
}

/// Where the base options come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A JSON config file, which need not exist.
    File(PathBuf),
    /// Options already in hand.
    Options(ProjectConfigOptions),
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::File(path)
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::File(path.to_path_buf())
    }
}

impl From<ProjectConfigOptions> for ConfigSource {
    fn from(options: ProjectConfigOptions) -> Self {
        ConfigSource::Options(options)
    }
}

/// Fully resolved, read-only project configuration.
///
/// Every path is absolute. `inputs` is derived: the entrypoint, then the
/// shell if set, then the fragments in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    root: PathBuf,
    entrypoint: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    shell: Option<PathBuf>,
    fragments: Vec<PathBuf>,
    inputs: Vec<PathBuf>,
}

impl ProjectConfig {
    /// Resolve a configuration from a file or options, with optional
    /// overrides layered on top.
    ///
    /// Never fails: config file problems are logged through `env.logger`
    /// and resolution continues with defaults.
    pub fn resolve(
        source: impl Into<ConfigSource>,
        overrides: Option<ProjectConfigOptions>,
        env: &ResolveEnv,
    ) -> Self {
        let base = match source.into() {
            ConfigSource::File(path) => {
                let path = resolve_against(&env.cwd, &path);
                load_options_file(&path, &env.logger)
            }
            ConfigSource::Options(options) => options,
        };
        let options = overlay(base, overrides.unwrap_or_default());
        Self::from_merged(&options, &env.cwd)
    }

    /// Resolve from a config file path plus optional overrides.
    pub fn from_file(
        path: impl AsRef<Path>,
        overrides: Option<ProjectConfigOptions>,
        env: &ResolveEnv,
    ) -> Self {
        Self::resolve(path.as_ref(), overrides, env)
    }

    /// Resolve from base options plus optional overrides.
    pub fn from_options(
        base: ProjectConfigOptions,
        overrides: Option<ProjectConfigOptions>,
        env: &ResolveEnv,
    ) -> Self {
        Self::resolve(base, overrides, env)
    }

    fn from_merged(options: &ProjectConfigOptions, cwd: &Path) -> Self {
        let root = match options.root_path() {
            Some(root) => resolve_against(cwd, root),
            None => normalize_path_components(cwd),
        };

        let entrypoint = match options.entrypoint_path() {
            Some(entrypoint) => resolve_against(&root, entrypoint),
            None => {
                let default = manifest_main(&root).unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRYPOINT));
                resolve_against(&root, &default)
            }
        };

        let shell = options.shell_path().map(|shell| resolve_against(&root, shell));

        let fragments = options
            .fragment_paths()
            .map(|fragments| resolve_all(&root, fragments))
            .unwrap_or_default();

        let inputs = std::iter::once(entrypoint.clone())
            .chain(shell.clone())
            .chain(fragments.iter().cloned())
            .collect();

        Self {
            root,
            entrypoint,
            shell,
            fragments,
            inputs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entrypoint(&self) -> &Path {
        &self.entrypoint
    }

    pub fn shell(&self) -> Option<&Path> {
        self.shell.as_deref()
    }

    pub fn fragments(&self) -> &[PathBuf] {
        &self.fragments
    }

    /// Every document the build must process, in order.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }
}
