//! Project configuration resolution.
//!
//! Builds a [`ProjectConfig`] from up to two layers of options:
//! 1. **Base** - a JSON config file (`polymer.json` by default) or options
//!    supplied by the caller
//! 2. **Overrides** - options layered on top, e.g. from command-line flags
//!
//! ## Merge Strategy
//! - Fields are merged one by one; a set override replaces the base value
//! - `fragment` and `fragments` name the same list; `fragment` wins
//!
//! ## Defaults
//! - `root` - the working directory
//! - `entrypoint` - `<root>/index.html`, or `<root>/<main>` from a legacy
//!   `bower.json` when it names one
//! - `shell` - none
//! - `fragments` - empty

mod loader;
mod manifest;
mod merge;
mod project;
mod types;

pub use loader::{ConfigFile, DEFAULT_CONFIG_FILE, load_options_file, read_config_file};
pub use manifest::{LEGACY_MANIFEST_FILE, manifest_main};
pub use merge::overlay;
pub use project::{ConfigSource, DEFAULT_ENTRYPOINT, LOGGER_NAME, ProjectConfig, ResolveEnv};
pub use types::ProjectConfigOptions;
