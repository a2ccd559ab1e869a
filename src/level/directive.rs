//! Interpreter for the textual level mini-language.
//!
//! A spec string is whitespace-separated directives, each `severity` or
//! `modifier.severity` (`"warn"`, `"gte.info lte.error"`, `"at.debug at.fatal"`).
//! Directives run left to right through the same reset-then-refine rule as
//! direct modifier calls, so `"info gte.error"` and `"gte.info gte.error"`
//! are identical. Garbled directives are skipped, never an error.

use super::{Level, Modifier};
use crate::scale::SeverityRef;
use regex::Regex;
use std::sync::LazyLock;

static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(at|gte|gt|lte|lt)\.)?([a-z]+)$").expect("Invalid directive regex")
});

impl Level {
    /// Applies each directive in order. A missing modifier prefix defaults to
    /// `gte`, matching the "minimum level" reading of a bare severity name.
    pub(super) fn interpret(&mut self, text: &str) {
        for token in text.split_whitespace() {
            let Some(caps) = DIRECTIVE_RE.captures(token) else {
                continue;
            };
            let modifier = caps
                .get(1)
                .map_or(Modifier::Gte, |m| parse_modifier(m.as_str()));
            self.apply(modifier, &SeverityRef::from(&caps[2]));
        }
    }
}

/// The regex only admits the five known prefixes, so the fallback arm is `gte`.
fn parse_modifier(s: &str) -> Modifier {
    match s.to_ascii_lowercase().as_str() {
        "at" => Modifier::At,
        "gt" => Modifier::Gt,
        "lt" => Modifier::Lt,
        "lte" => Modifier::Lte,
        _ => Modifier::Gte,
    }
}
