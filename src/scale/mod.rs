//! The ordered severity scale that every level mask is built over.
//!
//! The scale is immutable and shared: the default five-step scale lives in a
//! process-wide static, and custom scales are injected into [`crate::Level`]
//! by reference rather than looked up through global mutable state.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Derives `Ord` so callers can compare a message's severity against another directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug = 0,
    /// Normal operational milestones — connection established, config loaded, etc.
    #[default]
    Info = 1,
    /// Non-fatal anomalies that may need attention (deprecated features, retries).
    Warn = 2,
    /// Failures that prevent the current operation from completing.
    Error = 3,
    /// Failures the process cannot continue past.
    Fatal = 4,
}

impl Severity {
    /// Lowercase because config files and level directives use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Convenience for iteration — used to build the default scale and by tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
        ]
    }

    /// Position on the default scale, usable as a mask index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

static DEFAULT_SCALE: LazyLock<Scale> =
    LazyLock::new(|| Scale::new(Severity::all().map(Severity::as_str)));

/// The fixed, ordered severity name table a [`crate::Level`] mask is indexed by.
///
/// Immutable after construction; name lookup is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    names: Vec<String>,
}

impl Scale {
    /// Names must be given from least to most severe — index order is severity order.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The process-wide default scale: `debug < info < warn < error < fatal`.
    ///
    /// Built once on first use; every [`crate::Level`] without an explicit
    /// scale borrows this one.
    #[must_use]
    pub fn shared() -> &'static Self {
        &DEFAULT_SCALE
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Case-insensitive — config strings mix casings freely.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Names in scale order, least severe first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// A severity argument as callers hand it in: by name or by raw scale index.
///
/// Resolution is permissive — an unknown name or out-of-range index resolves
/// to `None`, which modifiers treat as a no-op and queries as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeverityRef {
    /// Raw position on the scale.
    Index(usize),
    /// Scale name, matched case-insensitively.
    Name(String),
}

impl SeverityRef {
    #[must_use]
    pub fn resolve(&self, scale: &Scale) -> Option<usize> {
        match self {
            Self::Index(i) => (*i < scale.len()).then_some(*i),
            Self::Name(name) => scale.index_of(name),
        }
    }
}

impl From<usize> for SeverityRef {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for SeverityRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SeverityRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Severity> for SeverityRef {
    fn from(severity: Severity) -> Self {
        Self::Index(severity.index())
    }
}
