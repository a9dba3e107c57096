//! Integration tests for open/close balance repair.

use tagsoup_common::warning::has_warned;
use tagsoup_markup::{BalanceRepairer, RepairOptions, fix_broken_html, fix_broken_tags};

#[test]
fn test_balanced_input_is_unchanged() {
    let input = r#"<div class="x"><p>Hi <b>there</b></p></div>"#;
    assert_eq!(fix_broken_tags(input), input);
}

#[test]
fn test_unclosed_tag_gets_closer() {
    assert_eq!(fix_broken_tags("<b>bold"), "<b>bold</b>");
}

#[test]
fn test_closers_are_innermost_first() {
    assert_eq!(fix_broken_tags("<b><i>x"), "<b><i>x</i></b>");
}

#[test]
fn test_orphaned_closer_is_dropped() {
    assert_eq!(fix_broken_tags("x</b>y"), "xy");
}

#[test]
fn test_misnested_closer_is_dropped() {
    // </b> does not match the innermost <i>, so it goes; </i> closes <i>
    // and <b> is closed at the end.
    assert_eq!(fix_broken_tags("<b><i>x</b></i>"), "<b><i>x</i></b>");
}

#[test]
fn test_names_match_case_insensitively() {
    assert_eq!(fix_broken_tags("<B>x</b>"), "<B>x</b>");
}

#[test]
fn test_synthesized_closer_is_lowercase() {
    assert_eq!(fix_broken_tags("<DIV>x"), "<DIV>x</div>");
}

#[test]
fn test_single_tags_and_non_tags_pass_through() {
    let input = "<br/>a < b > c<!-- note --><?pi x?>";
    assert_eq!(fix_broken_tags(input), input);
}

#[test]
fn test_attributes_are_kept_verbatim() {
    assert_eq!(
        fix_broken_tags(r#"<a href="x" TARGET=_blank>y"#),
        r#"<a href="x" TARGET=_blank>y</a>"#
    );
}

#[test]
fn test_xml_mode_closes_void_names() {
    assert_eq!(fix_broken_tags("<p>a<br>b"), "<p>a<br>b</br></p>");
}

#[test]
fn test_html_mode_leaves_void_elements_open() {
    assert_eq!(fix_broken_html("<p>a<br>b<img src=x>"), "<p>a<br>b<img src=x></p>");
}

#[test]
fn test_html_mode_drops_void_closers() {
    assert_eq!(fix_broken_html("a</br>b"), "ab");
}

#[test]
fn test_unclosed_tail_bracket_stays_last() {
    assert_eq!(fix_broken_tags("<p>text<b"), "<p>text</p><b");
}

#[test]
fn test_repairer_with_explicit_options() {
    let repaired = BalanceRepairer::new("<ul><li>one<li>two", RepairOptions::html()).run();
    assert_eq!(repaired, "<ul><li>one<li>two</li></li></ul>");
}

#[test]
fn test_repair_is_idempotent_on_examples() {
    for input in [
        "<b><i>x</b></i>",
        "x<b>y<i",
        "</a></b>text",
        "<a<b>c</a>",
        "<p>a<br>b",
        "<<p>>",
    ] {
        let once = fix_broken_tags(input);
        assert_eq!(fix_broken_tags(&once), once, "{input}");
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(fix_broken_tags(""), "");
}

#[test]
fn test_recoveries_are_reported() {
    let _ = fix_broken_tags("</orphan><unclosed>");
    assert!(has_warned("Repair", "dropped orphaned closer"));
    assert!(has_warned("Repair", "synthesized missing closer"));
}

#[test]
fn test_reports_do_not_repeat_tag_names() {
    let soup: String = (0..200).map(|i| format!("</n{i}><m{i}>")).collect();
    let _ = fix_broken_tags(&soup);
    assert!(has_warned("Repair", "dropped orphaned closer"));
    assert!(!has_warned("Repair", "dropped orphaned closer </n7>"));
    assert!(!has_warned("Repair", "synthesized closer </m7>"));
}
