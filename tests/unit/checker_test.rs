//! Tests for the tag balance checker
//!
//! Parameterized with test-case over the documented edge cases.

use tagcheck::core::models::Defect;
use tagcheck::core::services::{Checker, TagScanner, check_text};
use test_case::test_case;

fn kinds(text: &str) -> Vec<&'static str> {
    check_text(text).defects.iter().map(Defect::kind).collect()
}

// =============================================================================
// Clean Documents
// =============================================================================

#[test_case("<div><span></span></div>" ; "nested on one line")]
#[test_case("<DIV></div>" ; "case insensitive")]
#[test_case("<img src=\"x\">" ; "void tag alone")]
#[test_case("<br/><hr /><input type=\"text\"><meta charset=\"utf-8\"><link rel=\"icon\">" ; "all void tags")]
#[test_case("<p class=\"a\" data-x='1'>text</p>" ; "attributes ignored")]
#[test_case("<details>\n<summary>Title</summary>\n\nBody\n</details>" ; "tags across lines")]
#[test_case("No tags at all.\n\nJust text with 1 < 2 and 3 > 2." ; "comparisons")]
#[test_case("" ; "empty document")]
#[test_case("<table>\n  <tr><td>1</td></tr>\n</table>" ; "indented table")]
fn test_clean_documents(text: &str) {
    let result = check_text(text);
    assert!(!result.has_error, "unexpected defects: {:?}", result.defects);
    assert!(result.messages.is_empty());
}

// =============================================================================
// Fenced Code
// =============================================================================

#[test_case("```\n<div><span></div>\n```" ; "plain fence")]
#[test_case("```html\n</p></p>\n```" ; "fence with language")]
#[test_case("   ```\n<ul>\n   ```" ; "indented fence")]
#[test_case("```\n<a>\n```\n\n```\n</b>\n```" ; "two fences")]
fn test_fenced_tags_ignored(text: &str) {
    assert!(!check_text(text).has_error);
}

#[test]
fn test_tilde_fence_not_recognized() {
    assert_eq!(kinds("~~~\n<div>\n~~~"), vec!["unclosed_tag"]);
}

#[test]
fn test_longer_fence_still_toggles() {
    // A four-backtick line starts with three backticks.
    let result = check_text("````\n<div>\n````\n");
    assert!(!result.has_error);
}

#[test]
fn test_unterminated_fence_hides_rest() {
    let result = check_text("<p>ok</p>\n```\n<div>\n</span>\n");
    assert!(!result.has_error);
    assert_eq!(result.unterminated_fence, Some(2));
}

// =============================================================================
// Defects
// =============================================================================

#[test_case("<div><span></div></span>", &["mismatched_tag", "unclosed_tag"] ; "crossed nesting")]
#[test_case("</span>", &["unmatched_end_tag"] ; "end tag on empty stack")]
#[test_case("<div>", &["unclosed_tag"] ; "never closed")]
#[test_case("<div></span></div>", &["mismatched_tag"] ; "stray end tag inside")]
#[test_case("</a></b>", &["unmatched_end_tag", "unmatched_end_tag"] ; "two unmatched")]
#[test_case("<ul>\n</ol>\n</li>", &["mismatched_tag", "mismatched_tag", "unclosed_tag"] ; "mismatch cascades")]
fn test_defect_kinds(text: &str, expected: &[&str]) {
    assert_eq!(kinds(text), expected);
}

#[test]
fn test_crossed_nesting_details() {
    let result = check_text("<div><span></div></span>");
    assert_eq!(
        result.defects[0],
        Defect::MismatchedTag {
            expected: "span".to_string(),
            opened_at: 1,
            found: "div".to_string(),
            line: 1,
            content: "<div><span></div></span>".to_string(),
        }
    );
}

#[test]
fn test_unclosed_reports_opening_line() {
    let result = check_text("# Notes\n\nSome text\n  <section id=\"a\">\n");
    assert_eq!(
        result.defects,
        vec![Defect::UnclosedTag {
            tag: "section".to_string(),
            line: 4
        }]
    );
    assert_eq!(result.messages, vec!["<section> opened on line 4 is never closed"]);
}

#[test]
fn test_names_preserved_verbatim() {
    let result = check_text("<Details>\n</SUMMARY>");
    match &result.defects[0] {
        Defect::MismatchedTag { expected, found, .. } => {
            assert_eq!(expected, "Details");
            assert_eq!(found, "SUMMARY");
        },
        other => panic!("expected a mismatch, got {other:?}"),
    }
}

#[test]
fn test_content_is_trimmed() {
    let result = check_text("    </em>   ");
    assert_eq!(
        result.messages,
        vec![
            "Line 1: closing tag </em> has no matching opening tag".to_string(),
            "   Content: </em>".to_string(),
        ]
    );
}

#[test]
fn test_end_tag_before_start_tag_on_same_line() {
    // Start tags on a line are pushed before its end tags are matched.
    assert!(!check_text("</i> and <i>").has_error);
}

// =============================================================================
// Scanner Configuration
// =============================================================================

#[test]
fn test_custom_void_tags() {
    let checker = Checker::new(TagScanner::with_void_tags(&["source", "wbr"]));
    assert!(!checker.check("<video>\n<source src=a.mp4>\n</video>\n<wbr>").has_error);

    // img is no longer void with this set
    assert!(checker.check("<img src=x>").has_error);
}

#[test]
fn test_repeated_runs_identical() {
    let text = "<div>\n<p>\n</div>\n```\n<x>\n```\n</p>\n</q>";
    let checker = Checker::default();
    assert_eq!(checker.check(text), checker.check(text));
    assert_eq!(check_text(text), check_text(text));
}
