//! The severity mask that decides which records a logger dispatches.
//!
//! A [`Level`] is a boolean per scale index, all `true` at birth. The five
//! modifiers carve it down under one combination rule: the first modifier on
//! a fresh mask resets it destructively, every later one only refines what is
//! still enabled. That rule is what makes `Level::from_spec("info").lte("error")`
//! mean "info through error inclusive" instead of "everything up to error".

mod directive;
mod spec;

pub use spec::LevelSpec;

use crate::scale::{Scale, SeverityRef};
use std::fmt;

/// The five mask-shaping operations, dispatched by a plain `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    /// Enable exactly this index (reset on first touch, additive afterwards).
    At,
    /// Keep only indices strictly above.
    Gt,
    /// Keep only indices at or above.
    Gte,
    /// Keep only indices strictly below.
    Lt,
    /// Keep only indices at or below.
    Lte,
}

/// Whether the mask has been narrowed at least once.
///
/// Transitions to `Constrained` on the first successfully resolved modifier
/// and never back — it decides whether the next modifier resets or refines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaskState {
    Unconstrained,
    Constrained,
}

/// A boolean mask over the severity scale, one flag per index.
///
/// Fresh masks are unrestricted (every severity enabled). Modifiers consume
/// and return `self` so specs chain: `Level::new().gte("warn").lte("error")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    scale: &'static Scale,
    mask: Vec<bool>,
    state: MaskState,
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

impl Level {
    /// Unrestricted mask over the default scale — every severity logs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scale(Scale::shared())
    }

    /// Unrestricted mask over a caller-provided scale.
    ///
    /// The scale is borrowed for the process lifetime — build it once at
    /// startup (e.g. in a `LazyLock` static) and share it across masks.
    #[must_use]
    pub fn with_scale(scale: &'static Scale) -> Self {
        Self {
            scale,
            mask: vec![true; scale.len()],
            state: MaskState::Unconstrained,
        }
    }

    /// Builds a mask from any spec shape: a severity, an index, an inclusive
    /// range, a list, or a textual directive string.
    #[must_use]
    pub fn from_spec(spec: impl Into<LevelSpec>) -> Self {
        Self::new().apply_spec(spec.into())
    }

    /// [`Self::from_spec`] over a caller-provided scale.
    #[must_use]
    pub fn from_spec_with_scale(scale: &'static Scale, spec: impl Into<LevelSpec>) -> Self {
        Self::with_scale(scale).apply_spec(spec.into())
    }

    fn apply_spec(mut self, spec: LevelSpec) -> Self {
        match spec {
            LevelSpec::Unrestricted => self,
            LevelSpec::Minimum(severity) => self.gte(severity),
            LevelSpec::Set(severities) => self.at(severities),
            // gte first, so the lower bound is the destructive reset and
            // lte only narrows from above.
            LevelSpec::Range(lo, hi) => self.gte(lo).lte(hi),
            LevelSpec::Text(text) => {
                self.interpret(&text);
                self
            }
        }
    }

    /// Enables exactly the given severities.
    ///
    /// Within one call the severities union: only the first resets the mask,
    /// the rest just switch their index on. Unresolvable entries are skipped.
    #[must_use]
    pub fn at<I>(mut self, severities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SeverityRef>,
    {
        for severity in severities {
            self.apply(Modifier::At, &severity.into());
        }
        self
    }

    /// Keeps only severities strictly above the given one.
    #[must_use]
    pub fn gt(mut self, severity: impl Into<SeverityRef>) -> Self {
        self.apply(Modifier::Gt, &severity.into());
        self
    }

    /// Keeps only severities at or above the given one.
    #[must_use]
    pub fn gte(mut self, severity: impl Into<SeverityRef>) -> Self {
        self.apply(Modifier::Gte, &severity.into());
        self
    }

    /// Keeps only severities strictly below the given one.
    #[must_use]
    pub fn lt(mut self, severity: impl Into<SeverityRef>) -> Self {
        self.apply(Modifier::Lt, &severity.into());
        self
    }

    /// Keeps only severities at or below the given one.
    #[must_use]
    pub fn lte(mut self, severity: impl Into<SeverityRef>) -> Self {
        self.apply(Modifier::Lte, &severity.into());
        self
    }

    /// Is this severity enabled? Unknown names and out-of-range indices are
    /// `false`, never an error — a skewed config string must not crash a
    /// logging path.
    #[must_use]
    pub fn enabled_at(&self, severity: impl Into<SeverityRef>) -> bool {
        severity
            .into()
            .resolve(self.scale)
            .is_some_and(|index| self.mask[index])
    }

    /// Index of the least severe enabled severity, or `None` when the mask
    /// has been narrowed to nothing. Kept for callers that compare against a
    /// single numeric threshold.
    #[must_use]
    pub fn min_enabled_index(&self) -> Option<usize> {
        self.mask.iter().position(|&enabled| enabled)
    }

    /// Names of all enabled severities in scale order.
    #[must_use]
    pub fn enabled_names(&self) -> Vec<&str> {
        self.mask
            .iter()
            .enumerate()
            .filter(|&(_, &enabled)| enabled)
            .filter_map(|(index, _)| self.scale.name(index))
            .collect()
    }

    /// Debug rendering, e.g. `"Level severities: warn, error, fatal"`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// The scale this mask is indexed by.
    #[must_use]
    pub const fn scale(&self) -> &Scale {
        self.scale
    }

    /// `true` once any modifier has successfully narrowed the mask.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.state == MaskState::Constrained
    }

    /// Unresolvable severities fall out here without touching mask or state.
    fn apply(&mut self, modifier: Modifier, severity: &SeverityRef) {
        if let Some(index) = severity.resolve(self.scale) {
            self.calculate(modifier, index);
        }
    }

    fn calculate(&mut self, modifier: Modifier, index: usize) {
        match modifier {
            Modifier::At => {
                if self.state == MaskState::Unconstrained {
                    self.mask.fill(false);
                }
                self.mask[index] = true;
            }
            Modifier::Gt => self.disable_below(index + 1),
            Modifier::Gte => self.disable_below(index),
            Modifier::Lt => self.disable_above(index.checked_sub(1)),
            Modifier::Lte => self.disable_above(Some(index)),
        }
        self.state = MaskState::Constrained;
    }

    /// Range modifiers only ever disable, so reset and refine are the same
    /// code path: on a fresh mask everything outside the bound was enabled
    /// and gets cleared; on a constrained mask already-disabled flags stay off.
    fn disable_below(&mut self, bound: usize) {
        let cut = bound.min(self.mask.len());
        self.mask[..cut].fill(false);
    }

    /// `None` keeps nothing — `lt` of the least severe index clears the mask.
    fn disable_above(&mut self, keep: Option<usize>) {
        let start = keep.map_or(0, |k| k + 1).min(self.mask.len());
        self.mask[start..].fill(false);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level severities: {}", self.enabled_names().join(", "))
    }
}
