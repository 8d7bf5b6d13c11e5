// crates/domain/src/platform.rs
use std::path::{Path, PathBuf};

/// Name of the packager's scratch directory under the temp root.
pub const TEMP_DIR_NAME: &str = "pack-filter";

/// Operating system the packager itself runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::Darwin
        } else if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Whether the scratch directory can land inside the walked tree.
    pub fn excludes_temp_dir(self) -> bool {
        matches!(self, Self::Linux)
    }
}

/// Scratch directory used by the packager: `<tmpdir or OS temp>/pack-filter`.
pub fn base_temp_dir(tmpdir: Option<&Path>) -> PathBuf {
    tmpdir
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir)
        .join(TEMP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_linux_excludes_temp_dir() {
        assert!(HostPlatform::Linux.excludes_temp_dir());
        assert!(!HostPlatform::Darwin.excludes_temp_dir());
        assert!(!HostPlatform::Windows.excludes_temp_dir());
        assert!(!HostPlatform::Other.excludes_temp_dir());
    }

    #[test]
    fn base_temp_dir_honours_override() {
        assert_eq!(
            base_temp_dir(Some(Path::new("/scratch"))),
            PathBuf::from("/scratch").join(TEMP_DIR_NAME)
        );
        assert!(base_temp_dir(None).ends_with(TEMP_DIR_NAME));
    }
}
