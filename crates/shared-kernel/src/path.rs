// crates/shared-kernel/src/path.rs
//! Lexical path helpers.
//!
//! None of these functions touch the filesystem: symlinks are never resolved
//! and `..` is collapsed purely on the component level.

use std::path::{Component, Path, PathBuf};

/// Join `path` onto `base` (unless already absolute) and collapse `.`/`..`.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    normalize_lexically(&base.join(path))
}

/// Drop `.` components and pop on `..`, never climbing above the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if at_root {
                    if !out.has_root() {
                        out.push("..");
                    }
                } else if out.ends_with("..") {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Render a path with `/` separators regardless of the host platform.
pub fn to_slash(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        raw.into_owned()
    } else {
        raw.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Path of `path` below `base`, rooted with a leading `/`.
///
/// `base` itself maps to `/`. Paths outside `base` keep their full slash form.
pub fn rooted_relative(base: &Path, path: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rest) => {
            let parts: Vec<_> = rest
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            format!("/{}", parts.join("/"))
        }
        Err(_) => to_slash(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_dot_and_parent_components() {
        assert_eq!(
            normalize_lexically(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize_lexically(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize_lexically(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn resolves_relative_against_base() {
        assert_eq!(
            resolve_against(Path::new("/work"), Path::new("out/../dist")),
            PathBuf::from("/work/dist")
        );
        assert_eq!(
            resolve_against(Path::new("/work"), Path::new("/tmp/build/")),
            PathBuf::from("/tmp/build")
        );
    }

    #[test]
    fn rooted_relative_prefixes_slash() {
        let base = Path::new("/src");
        assert_eq!(rooted_relative(base, Path::new("/src/a/b.log")), "/a/b.log");
        assert_eq!(rooted_relative(base, Path::new("/src")), "/");
        assert_eq!(rooted_relative(base, Path::new("/other/x")), "/other/x");
    }
}
