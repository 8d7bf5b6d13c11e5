// crates/domain/src/ignore.rs
use std::fmt;
use std::sync::Arc;

/// Patterns excluded from every bundle unless a custom predicate replaces them.
///
/// Sources are unanchored regular expressions matched against the
/// `/`-rooted path relative to the source directory.
pub const DEFAULT_IGNORES: &[&str] = &[
    r"/package-lock\.json$",
    r"/yarn\.lock$",
    r"/\.git($|/)",
    r"/node_modules/\.bin($|/)",
    r"\.o(bj)?$",
];

/// User predicate; returns `true` when the path must be ignored.
pub type IgnorePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// User-facing exclusion configuration.
#[derive(Clone, Default)]
pub enum IgnoreSpec {
    #[default]
    Unset,
    Pattern(String),
    Patterns(Vec<String>),
    Predicate(IgnorePredicate),
}

impl IgnoreSpec {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(_))
    }

    /// User patterns in declaration order. Empty for `Unset` and `Predicate`.
    pub fn patterns(&self) -> Vec<String> {
        match self {
            Self::Unset | Self::Predicate(_) => Vec::new(),
            Self::Pattern(p) => vec![p.clone()],
            Self::Patterns(ps) => ps.clone(),
        }
    }
}

impl fmt::Debug for IgnoreSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            Self::Patterns(ps) => f.debug_tuple("Patterns").field(ps).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for IgnoreSpec {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_string())
    }
}

impl From<String> for IgnoreSpec {
    fn from(pattern: String) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Vec<String>> for IgnoreSpec {
    fn from(patterns: Vec<String>) -> Self {
        Self::Patterns(patterns)
    }
}
