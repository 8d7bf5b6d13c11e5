use crate::error::{EngineError, Result};
use crate::normalize::EffectiveIgnore;
use pack_filter_domain::IgnorePredicate;
use regex::Regex;
use std::sync::OnceLock;

/// Uniform keep/exclude test over a normalized ignore spec.
///
/// `keeps` returns `true` when the path should be kept.
pub struct Matcher {
    kind: MatcherKind,
}

enum MatcherKind {
    Predicate(IgnorePredicate),
    Patterns(Vec<LazyPattern>),
}

/// Pattern compiled on first use; a malformed pattern errors at that point.
struct LazyPattern {
    source: String,
    compiled: OnceLock<std::result::Result<Regex, regex::Error>>,
}

impl LazyPattern {
    fn new(source: String) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    fn is_match(&self, path: &str) -> Result<bool> {
        match self.compiled.get_or_init(|| Regex::new(&self.source)) {
            Ok(re) => Ok(re.is_match(path)),
            Err(err) => Err(EngineError::Pattern {
                pattern: self.source.clone(),
                source: err.clone(),
            }),
        }
    }
}

impl Matcher {
    pub fn new(ignore: &EffectiveIgnore) -> Self {
        let kind = match ignore {
            EffectiveIgnore::Predicate(predicate) => MatcherKind::Predicate(predicate.clone()),
            EffectiveIgnore::Patterns(patterns) => MatcherKind::Patterns(
                patterns.iter().cloned().map(LazyPattern::new).collect(),
            ),
        };
        Self { kind }
    }

    /// # Errors
    /// Returns [`EngineError::Pattern`] when a pattern reached before the first
    /// match fails to compile.
    pub fn keeps(&self, path: &str) -> Result<bool> {
        match &self.kind {
            MatcherKind::Predicate(ignored) => Ok(!ignored(path)),
            MatcherKind::Patterns(patterns) => {
                for pattern in patterns {
                    if pattern.is_match(path)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}
