//! Ignore-spec normalization.
//!
//! A predicate passes through untouched; anything else becomes the user's
//! patterns followed by [`DEFAULT_IGNORES`].

use pack_filter_domain::{DEFAULT_IGNORES, HostPlatform, IgnorePredicate, IgnoreSpec};
use pack_filter_shared_kernel::to_slash;
use std::fmt;
use std::path::Path;

/// Either the caller's predicate or the full ordered pattern list.
#[derive(Clone)]
pub enum EffectiveIgnore {
    Predicate(IgnorePredicate),
    Patterns(Vec<String>),
}

impl fmt::Debug for EffectiveIgnore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Patterns(ps) => f.debug_tuple("Patterns").field(ps).finish(),
        }
    }
}

/// Result of normalization. Keeps the raw spec so later stages can tell
/// whether a custom predicate was supplied.
#[derive(Debug, Clone)]
pub struct NormalizedIgnore {
    pub original: IgnoreSpec,
    pub effective: EffectiveIgnore,
}

impl NormalizedIgnore {
    pub fn has_custom_predicate(&self) -> bool {
        self.original.is_predicate()
    }
}

pub fn normalize(raw: IgnoreSpec, platform: HostPlatform, temp_dir: &Path) -> NormalizedIgnore {
    let effective = match &raw {
        IgnoreSpec::Predicate(predicate) => EffectiveIgnore::Predicate(predicate.clone()),
        other => {
            let mut patterns = other.patterns();
            patterns.extend(DEFAULT_IGNORES.iter().map(|p| (*p).to_string()));
            if platform.excludes_temp_dir() {
                patterns.push(regex::escape(&to_slash(temp_dir)));
            }
            log::debug!("Ignored path regular expressions: {patterns:?}");
            EffectiveIgnore::Patterns(patterns)
        }
    };

    NormalizedIgnore {
        original: raw,
        effective,
    }
}
