//! Shallow merging of partial configurations.
//!
//! Fields are merged independently: a field set in the overlay replaces the
//! base value wholesale. Lists are replaced, never concatenated.

use super::types::ProjectConfigOptions;

/// Merge two option sets, with `overlay` taking precedence over `base`.
///
/// `fragment` and `fragments` are distinct keys here; the alias rule is
/// applied afterwards by [`ProjectConfigOptions::fragment_paths`].
///
/// # Example
/// ```
/// use project_config::config::{overlay, ProjectConfigOptions};
///
/// let base = ProjectConfigOptions::new().with_entrypoint("a.html").with_shell("shell.html");
/// let over = ProjectConfigOptions::new().with_entrypoint("b.html");
/// let merged = overlay(base, over);
/// assert_eq!(merged.entrypoint.as_deref(), Some(std::path::Path::new("b.html")));
/// assert_eq!(merged.shell.as_deref(), Some(std::path::Path::new("shell.html")));
/// ```
pub fn overlay(base: ProjectConfigOptions, overlay: ProjectConfigOptions) -> ProjectConfigOptions {
    ProjectConfigOptions {
        root: overlay.root.or(base.root),
        entrypoint: overlay.entrypoint.or(base.entrypoint),
        shell: overlay.shell.or(base.shell),
        fragment: overlay.fragment.or(base.fragment),
        fragments: overlay.fragments.or(base.fragments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_overlay_field_wins() {
        let base = ProjectConfigOptions::new().with_entrypoint("a.html");
        let over = ProjectConfigOptions::new().with_entrypoint("b.html");
        assert_eq!(overlay(base, over).entrypoint, Some(PathBuf::from("b.html")));
    }

    #[test]
    fn test_unset_overlay_preserves_base() {
        let base = ProjectConfigOptions::new().with_root("site").with_shell("shell.html");
        let merged = overlay(base.clone(), ProjectConfigOptions::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_lists_replaced_not_concatenated() {
        let base = ProjectConfigOptions::new().with_fragments(["a.html", "b.html"]);
        let over = ProjectConfigOptions::new().with_fragments(["c.html"]);
        assert_eq!(
            overlay(base, over).fragments,
            Some(vec![PathBuf::from("c.html")])
        );
    }

    #[test]
    fn test_alias_keys_merge_independently() {
        // A base `fragment` survives an overlay that only sets `fragments`.
        let base = ProjectConfigOptions::new().with_fragment(["a.html"]);
        let over = ProjectConfigOptions::new().with_fragments(["b.html"]);
        let merged = overlay(base, over);
        assert_eq!(merged.fragment, Some(vec![PathBuf::from("a.html")]));
        assert_eq!(merged.fragments, Some(vec![PathBuf::from("b.html")]));
        assert_eq!(merged.fragment_paths(), Some(&[PathBuf::from("a.html")][..]));
    }
}
