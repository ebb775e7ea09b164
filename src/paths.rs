//! Lexical path resolution.
//!
//! Everything here is pure path manipulation: no filesystem I/O, no symlink
//! resolution, and no dependence on the process working directory.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` and normalize the result.
///
/// An absolute `path` ignores `base`. `base` is expected to be absolute; the
/// result is absolute whenever it is.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path_components(path)
    } else {
        normalize_path_components(&base.join(path))
    }
}

/// Resolve every entry of `paths` against `base`, preserving order.
pub fn resolve_all<I, P>(base: &Path, paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|p| resolve_against(base, p.as_ref()))
        .collect()
}

/// Normalize path components without requiring the file to exist.
/// Handles `.` and `..` components.
pub fn normalize_path_components(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => {
                // Windows drive prefix (e.g., C:)
                components.push(Component::Prefix(p));
            }
            Component::RootDir => {
                components.push(Component::RootDir);
            }
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(Component::ParentDir),
            },
            Component::Normal(name) => {
                components.push(Component::Normal(name));
            }
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}
