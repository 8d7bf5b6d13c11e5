//! Output directories that must never be copied into a bundle.

use hashbrown::HashSet;
use pack_filter_domain::{BasenameOptions, final_basename, official_platform_arch_combos};
use pack_filter_shared_kernel::resolve_against;
use std::path::{Path, PathBuf};

/// Absolute output directories to exclude.
///
/// With no `out` (or `out` resolving to `cwd`) the packager writes next to
/// the sources, so every official target's output directory under `cwd` is
/// excluded. Otherwise only the resolved `out` is.
pub fn ignored_output_dirs(out: Option<&Path>, name: &str, cwd: &Path) -> HashSet<PathBuf> {
    let cwd = resolve_against(Path::new("/"), cwd);
    let normalized_out = out.map(|out| resolve_against(&cwd, out));

    let dirs: HashSet<PathBuf> = match normalized_out {
        Some(out) if out != cwd => std::iter::once(out).collect(),
        _ => official_platform_arch_combos()
            .map(|(platform, arch)| {
                cwd.join(final_basename(&BasenameOptions {
                    platform,
                    arch,
                    name,
                }))
            })
            .collect(),
    };

    log::debug!("Ignored paths based on the out param: {dirs:?}");
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_out_covers_full_matrix() {
        let cwd = Path::new("/work");
        let expected: HashSet<PathBuf> = official_platform_arch_combos()
            .map(|(platform, arch)| cwd.join(format!("myapp-{platform}-{arch}")))
            .collect();

        let dirs = ignored_output_dirs(None, "myapp", cwd);
        assert_eq!(dirs, expected);
        assert_eq!(dirs.len(), 14);
        assert!(dirs.contains(Path::new("/work/myapp-darwin-x64")));
        assert!(dirs.contains(Path::new("/work/myapp-linux-mips64el")));
    }

    #[test]
    fn out_equal_to_cwd_covers_full_matrix() {
        let cwd = Path::new("/work");
        let dirs = ignored_output_dirs(Some(Path::new("/work/sub/..")), "myapp", cwd);
        assert_eq!(dirs, ignored_output_dirs(None, "myapp", cwd));
        let dot = ignored_output_dirs(Some(Path::new(".")), "myapp", cwd);
        assert_eq!(dot.len(), 14);
    }

    #[test]
    fn explicit_out_is_singleton() {
        let dirs = ignored_output_dirs(Some(Path::new("/tmp/build")), "myapp", Path::new("/work"));
        assert_eq!(dirs.len(), 1);
        assert!(dirs.contains(Path::new("/tmp/build")));
    }

    #[test]
    fn relative_out_resolves_against_cwd() {
        let dirs = ignored_output_dirs(Some(Path::new("dist")), "myapp", Path::new("/work"));
        assert!(dirs.contains(Path::new("/work/dist")));
    }

    #[test]
    fn app_name_is_sanitized() {
        let dirs = ignored_output_dirs(None, "my/app", Path::new("/work"));
        assert!(dirs.contains(Path::new("/work/my-app-linux-x64")));
    }
}
