// crates/domain/src/targets.rs
//! Official platform/arch matrix and output directory naming.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Darwin,
    Linux,
    Mas,
    Win32,
}

impl Platform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Mas => "mas",
            Self::Win32 => "win32",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Ia32,
    X64,
    Armv7l,
    Arm64,
    Mips64el,
    Universal,
}

impl Arch {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ia32 => "ia32",
            Self::X64 => "x64",
            Self::Armv7l => "armv7l",
            Self::Arm64 => "arm64",
            Self::Mips64el => "mips64el",
            Self::Universal => "universal",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every platform the packager officially builds for, with its architectures.
pub const OFFICIAL_TARGETS: &[(Platform, &[Arch])] = &[
    (Platform::Darwin, &[Arch::X64, Arch::Arm64, Arch::Universal]),
    (
        Platform::Linux,
        &[Arch::Ia32, Arch::X64, Arch::Armv7l, Arch::Arm64, Arch::Mips64el],
    ),
    (Platform::Mas, &[Arch::X64, Arch::Arm64, Arch::Universal]),
    (Platform::Win32, &[Arch::Ia32, Arch::X64, Arch::Arm64]),
];

pub fn official_platform_arch_combos() -> impl Iterator<Item = (Platform, Arch)> {
    OFFICIAL_TARGETS
        .iter()
        .flat_map(|(platform, archs)| archs.iter().map(move |arch| (*platform, *arch)))
}

#[derive(Debug, Clone, Copy)]
pub struct BasenameOptions<'a> {
    pub platform: Platform,
    pub arch: Arch,
    pub name: &'a str,
}

/// Output directory basename for one target, e.g. `MyApp-linux-x64`.
pub fn final_basename(opts: &BasenameOptions<'_>) -> String {
    format!(
        "{}-{}-{}",
        sanitize_app_name(opts.name),
        opts.platform,
        opts.arch
    )
}

const REPLACEMENT: &str = "-";
const MAX_NAME_LEN: usize = 100;

fn reserved_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).unwrap())
}

fn dots_only() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\.+$").unwrap())
}

fn repeated_dashes() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-{2,}").unwrap())
}

fn windows_names() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(con|prn|aux|nul|com[1-9]|lpt[1-9])$").unwrap())
}

/// Make an application name safe to use as a file name on every platform.
pub fn sanitize_app_name(name: &str) -> String {
    let mut out = reserved_chars().replace_all(name, REPLACEMENT).into_owned();
    out = dots_only().replace_all(&out, REPLACEMENT).into_owned();
    out = repeated_dashes().replace_all(&out, REPLACEMENT).into_owned();
    if out.chars().count() > 1 {
        out = out.trim_matches('-').to_string();
    }
    if windows_names().is_match(&out) {
        out.push_str(REPLACEMENT);
    }
    out.chars().take(MAX_NAME_LEN).collect()
}
