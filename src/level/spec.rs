//! Spec shapes a [`Level`] can be built from, and the conversions that let
//! constructor and setter call sites pass any of them directly.

use super::Level;
use crate::scale::{Severity, SeverityRef};
use std::ops::RangeInclusive;

/// Everything a level constructor or setter accepts.
///
/// Each shape maps onto modifier calls: a minimum becomes `gte`, a set
/// becomes `at`, a range becomes `gte` then `lte`, and text runs through the
/// directive interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LevelSpec {
    /// No restriction — every severity enabled.
    #[default]
    Unrestricted,
    /// The conventional "minimum level" shorthand.
    Minimum(SeverityRef),
    /// Exactly these severities.
    Set(Vec<SeverityRef>),
    /// Inclusive on both ends.
    Range(SeverityRef, SeverityRef),
    /// Whitespace-separated `[modifier.]severity` directives.
    Text(String),
}

impl From<Severity> for LevelSpec {
    fn from(severity: Severity) -> Self {
        Self::Minimum(severity.into())
    }
}

impl From<usize> for LevelSpec {
    fn from(index: usize) -> Self {
        Self::Minimum(index.into())
    }
}

impl From<&str> for LevelSpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<RangeInclusive<Severity>> for LevelSpec {
    fn from(range: RangeInclusive<Severity>) -> Self {
        let (lo, hi) = range.into_inner();
        Self::Range(lo.into(), hi.into())
    }
}

impl From<RangeInclusive<usize>> for LevelSpec {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (lo, hi) = range.into_inner();
        Self::Range(lo.into(), hi.into())
    }
}

impl From<Vec<SeverityRef>> for LevelSpec {
    fn from(severities: Vec<SeverityRef>) -> Self {
        Self::Set(severities)
    }
}

impl From<Vec<&str>> for LevelSpec {
    fn from(names: Vec<&str>) -> Self {
        Self::Set(names.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LevelSpec {
    fn from(names: [&str; N]) -> Self {
        Self::Set(names.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize> From<[Severity; N]> for LevelSpec {
    fn from(severities: [Severity; N]) -> Self {
        Self::Set(severities.into_iter().map(Into::into).collect())
    }
}

// `Logger::set_level` takes `impl Into<Level>` so it accepts an existing
// mask as-is or wraps any spec shape into a fresh one. A blanket impl over
// `Into<LevelSpec>` would overlap with the reflexive `From<Level>`, so the
// shapes are spelled out.

impl From<LevelSpec> for Level {
    fn from(spec: LevelSpec) -> Self {
        Self::from_spec(spec)
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        Self::from_spec(severity)
    }
}

impl From<usize> for Level {
    fn from(index: usize) -> Self {
        Self::from_spec(index)
    }
}

impl From<&str> for Level {
    fn from(text: &str) -> Self {
        Self::from_spec(text)
    }
}

impl From<String> for Level {
    fn from(text: String) -> Self {
        Self::from_spec(text)
    }
}

impl From<RangeInclusive<Severity>> for Level {
    fn from(range: RangeInclusive<Severity>) -> Self {
        Self::from_spec(range)
    }
}

impl From<RangeInclusive<usize>> for Level {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::from_spec(range)
    }
}
