//! Tests for the size limit of the warning set.
//!
//! Filling the set would starve the other warning tests of room, so this runs
//! as its own test binary.

use tagsoup_common::warning::{
    MAX_RECORDED_WARNINGS, has_warned, set_warnings_enabled, warn_once, warning_count,
};

#[test]
fn test_recorded_set_is_bounded() {
    set_warnings_enabled(false);
    for i in 0..MAX_RECORDED_WARNINGS * 2 {
        warn_once("TestBound", &format!("distinct message {i}"));
    }
    assert_eq!(warning_count(), MAX_RECORDED_WARNINGS);
    assert!(has_warned("TestBound", "distinct message 0"));
    assert!(!has_warned(
        "TestBound",
        &format!("distinct message {}", MAX_RECORDED_WARNINGS * 2 - 1)
    ));

    // Already recorded messages are still deduplicated when full.
    warn_once("TestBound", "distinct message 0");
    assert_eq!(warning_count(), MAX_RECORDED_WARNINGS);
}
