//! Tests for the level mask engine: construction shapes, modifier
//! combination rules, and the directive mini-language.

use gatelog::{Level, Scale, Severity};
use std::sync::LazyLock;

fn enabled(level: &Level) -> Vec<&str> {
    level.enabled_names()
}

#[test]
fn fresh_level_is_unrestricted() {
    let level = Level::new();
    for severity in Severity::all() {
        assert!(level.enabled_at(severity));
    }
    assert!(!level.is_constrained());
}

#[test]
fn gte_keeps_severity_and_above() {
    let level = Level::new().gte("warn");
    assert!(!level.enabled_at("debug"));
    assert!(!level.enabled_at("info"));
    assert!(level.enabled_at("warn"));
    assert!(level.enabled_at("error"));
    assert!(level.enabled_at("fatal"));
}

#[test]
fn lte_keeps_severity_and_below() {
    let level = Level::new().lte("warn");
    assert!(level.enabled_at("debug"));
    assert!(level.enabled_at("info"));
    assert!(level.enabled_at("warn"));
    assert!(!level.enabled_at("error"));
    assert!(!level.enabled_at("fatal"));
}

#[test]
fn gt_and_lt_are_exclusive() {
    let level = Level::new().gt("warn");
    assert!(!level.enabled_at("warn"));
    assert!(level.enabled_at("error"));

    let level = Level::new().lt("warn");
    assert!(level.enabled_at("info"));
    assert!(!level.enabled_at("warn"));
}

#[test]
fn first_call_resets_later_calls_refine() {
    // Reset to >= info, then narrow to <= error: info through error inclusive.
    let level = Level::from_spec("info").lte("error");
    assert_eq!(enabled(&level), ["info", "warn", "error"]);
}

#[test]
fn gte_lte_same_severity_yields_exactly_that_severity() {
    let level = Level::new().gte("warn").lte("warn");
    assert_eq!(enabled(&level), ["warn"]);
}

#[test]
fn range_spec_is_inclusive_on_both_ends() {
    let level = Level::from_spec(Severity::Info..=Severity::Error);
    assert_eq!(enabled(&level), ["info", "warn", "error"]);

    // Same set as the explicit gte-then-lte chain.
    let chained = Level::new().gte("info").lte("error");
    assert_eq!(level, chained);
}

#[test]
fn index_range_spec_matches_severity_range() {
    let by_index = Level::from_spec(1..=3);
    let by_name = Level::from_spec(Severity::Info..=Severity::Error);
    assert_eq!(by_index, by_name);
}

#[test]
fn single_severity_spec_means_minimum() {
    let level = Level::from_spec(Severity::Warn);
    assert_eq!(enabled(&level), ["warn", "error", "fatal"]);

    let level = Level::from_spec(2);
    assert_eq!(enabled(&level), ["warn", "error", "fatal"]);
}

#[test]
fn refinement_only_narrows() {
    // gt.warn leaves {error, fatal}; gte.info cannot re-enable anything below.
    let level = Level::from_spec("gt.warn gte.info");
    assert_eq!(enabled(&level), ["error", "fatal"]);
}

#[test]
fn repeated_at_directives_accumulate() {
    let level = Level::from_spec("at.debug at.error");
    assert!(level.enabled_at("debug"));
    assert!(level.enabled_at("error"));
    assert!(!level.enabled_at("info"));
    assert!(!level.enabled_at("warn"));
    assert!(!level.enabled_at("fatal"));
}

#[test]
fn at_unions_within_one_call() {
    let level = Level::new().at(["info", "fatal"]);
    assert_eq!(enabled(&level), ["info", "fatal"]);
}

#[test]
fn at_after_range_modifier_sets_without_reset() {
    // Once the mask is constrained, at only switches its own index on.
    let level = Level::new().gte("warn").at(["debug"]);
    assert_eq!(enabled(&level), ["debug", "warn", "error", "fatal"]);
}

#[test]
fn list_spec_selects_exactly_those_severities() {
    let level = Level::from_spec(["debug", "error"]);
    assert_eq!(enabled(&level), ["debug", "error"]);
}

#[test]
fn bare_directive_defaults_to_gte() {
    assert_eq!(Level::from_spec("info"), Level::from_spec("gte.info"));
}

#[test]
fn directives_are_case_insensitive() {
    let level = Level::from_spec("GTE.Warn");
    assert!(level.enabled_at("WARN"));
    assert!(!level.enabled_at("Info"));
}

#[test]
fn unknown_severity_query_is_false_not_an_error() {
    let level = Level::new();
    assert!(!level.enabled_at("verbose"));
    assert!(!level.enabled_at(99));
}

#[test]
fn unknown_severity_modifier_is_a_no_op() {
    let level = Level::new().gte("verbose");
    assert!(!level.is_constrained());
    for severity in Severity::all() {
        assert!(level.enabled_at(severity));
    }
}

#[test]
fn garbled_directives_are_skipped() {
    // "bogus.warn" has no valid modifier prefix, "gte.verbose" no known
    // severity; only "gte.error" applies.
    let level = Level::from_spec("bogus.warn gte.verbose gte.error");
    assert_eq!(enabled(&level), ["error", "fatal"]);
}

#[test]
fn empty_text_spec_leaves_the_mask_unrestricted() {
    let level = Level::from_spec("");
    assert!(!level.is_constrained());
    assert!(level.enabled_at("debug"));
}

#[test]
fn min_enabled_index_reports_the_lowest_flag() {
    assert_eq!(Level::new().min_enabled_index(), Some(0));
    assert_eq!(Level::from_spec("gte.warn").min_enabled_index(), Some(2));
}

#[test]
fn min_enabled_index_is_none_when_nothing_is_enabled() {
    // lt of the least severe index clears the whole mask.
    let level = Level::new().lt("debug");
    assert!(level.is_constrained());
    assert_eq!(level.min_enabled_index(), None);
}

#[test]
fn describe_lists_enabled_names_in_scale_order() {
    let level = Level::from_spec("gte.warn");
    assert_eq!(level.describe(), "Level severities: warn, error, fatal");
    assert_eq!(level.to_string(), level.describe());
}

#[test]
fn describe_round_trips_through_at() {
    let original = Level::from_spec("gte.info lte.error");
    let names: Vec<String> = original
        .enabled_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    let rebuilt = Level::new().at(names);
    assert_eq!(original, rebuilt);
}

static PRIORITY_SCALE: LazyLock<Scale> =
    LazyLock::new(|| Scale::new(["low", "medium", "high", "critical"]));

#[test]
fn custom_scale_masks_resolve_against_that_scale() {
    let level = Level::from_spec_with_scale(&PRIORITY_SCALE, "gte.high");
    assert!(!level.enabled_at("low"));
    assert!(level.enabled_at("high"));
    assert!(level.enabled_at("critical"));
    // Default-scale names mean nothing here.
    assert!(!level.enabled_at("warn"));
    assert_eq!(level.min_enabled_index(), Some(2));
}

#[test]
fn setter_conversions_cover_every_spec_shape() {
    assert_eq!(Level::from("gte.warn"), Level::new().gte("warn"));
    assert_eq!(Level::from(Severity::Warn), Level::new().gte("warn"));
    assert_eq!(Level::from(2), Level::new().gte("warn"));
    assert_eq!(
        Level::from(Severity::Info..=Severity::Error),
        Level::new().gte("info").lte("error")
    );
}
