use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Throwaway application source tree.
#[derive(Debug)]
pub struct AppFixture {
    dir: TempDir,
}

impl AppFixture {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// A typical app: sources, lockfile, VCS metadata, modules and junk.
    pub fn typical() -> Self {
        let app = Self::new();
        for rel in [
            "index.js",
            "package.json",
            "yarn.lock",
            "src/main.js",
            "src/main.js.map",
            ".git/config",
            "node_modules/.bin/tool",
            "node_modules/dep/index.js",
            ".DS_Store",
        ] {
            app.write_file(rel, "x");
        }
        app
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
