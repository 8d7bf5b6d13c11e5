// crates/domain/src/junk.rs
//! OS and editor artifacts that never belong in a bundle.

use regex::Regex;
use std::sync::OnceLock;

const JUNK_PATTERNS: &[&str] = &[
    // npm error log
    r"^npm-debug\.log$",
    // vim swap files
    r"^\..*\.swp$",
    // macOS
    r"^\.DS_Store$",
    r"^\.AppleDouble$",
    r"^\.LSOverride$",
    r"^Icon\r$",
    r"^\._.*",
    r"^\.Spotlight-V100(?:$|/)",
    r"\.Trashes",
    r"^__MACOSX$",
    // editor backups
    r"~$",
    // Windows
    r"^Thumbs\.db$",
    r"^ehthumbs\.db$",
    r"^[Dd]esktop\.ini$",
    // Synology thumbnails
    r"@eaDir$",
];

fn junk_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&JUNK_PATTERNS.join("|")).unwrap())
}

/// Whether a base file name is a known junk artifact.
pub fn is_junk(file_name: &str) -> bool {
    junk_regex().is_match(file_name)
}

pub fn is_not_junk(file_name: &str) -> bool {
    !is_junk(file_name)
}
