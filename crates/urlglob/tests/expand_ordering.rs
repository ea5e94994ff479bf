//! Integration tests for expansion order and error propagation.

use pretty_assertions::assert_eq;
use urlglob::{expand, expand_to_vec, GlobError};

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_leftmost_brace_varies_slowest() {
    let urls = expand_to_vec("{a,b}{c,d}").unwrap();
    assert_eq!(urls, vec!["ac", "ad", "bc", "bd"]);
}

#[test]
fn test_brace_selected_before_earlier_range() {
    // The brace list is the outer loop even though the range comes first.
    let urls = expand_to_vec("[1-2]{a,b}").unwrap();
    assert_eq!(urls, vec!["1a", "2a", "1b", "2b"]);
}

#[test]
fn test_numeric_selected_before_earlier_alpha() {
    let urls = expand_to_vec("[a-b][1-2]").unwrap();
    assert_eq!(urls, vec!["a1", "b1", "a2", "b2"]);
}

#[test]
fn test_three_groups_cross_product() {
    let urls = expand_to_vec("/{x,y}/[1-2]/[a-b]").unwrap();
    assert_eq!(
        urls,
        vec![
            "/x/1/a", "/x/1/b", "/x/2/a", "/x/2/b", "/y/1/a", "/y/1/b", "/y/2/a", "/y/2/b",
        ]
    );
}

#[test]
fn test_duplicates_are_kept() {
    let urls = expand_to_vec("{a,a}").unwrap();
    assert_eq!(urls, vec!["a", "a"]);
}

// ============================================================================
// Substitutions that produce new groups
// ============================================================================

#[test]
fn test_brace_alternative_containing_range() {
    let urls = expand_to_vec("{[1-2],z}").unwrap();
    assert_eq!(urls, vec!["1", "2", "z"]);
}

#[test]
fn test_brace_content_with_open_brace() {
    // The match starts at the first '{' and stops at the first '}'.
    let urls = expand_to_vec("{a{b,c}").unwrap();
    assert_eq!(urls, vec!["a{b", "c"]);
}

#[test]
fn test_alpha_range_across_punctuation() {
    let urls = expand_to_vec("[Z-a]").unwrap();
    assert_eq!(urls, vec!["Z", "[", "\\", "]", "^", "_", "`", "a"]);
}

// ============================================================================
// Numeric formatting
// ============================================================================

#[test]
fn test_width_from_start_token_only() {
    let urls = expand_to_vec("[8-10]").unwrap();
    assert_eq!(urls, vec!["8", "9", "10"]);

    let urls = expand_to_vec("[008-010]").unwrap();
    assert_eq!(urls, vec!["008", "009", "010"]);
}

#[test]
fn test_step_past_end() {
    let urls = expand_to_vec("[1-10:4]").unwrap();
    assert_eq!(urls, vec!["1", "5", "9"]);
}

#[test]
fn test_single_value_range() {
    assert_eq!(expand_to_vec("[7-7]").unwrap(), vec!["7"]);
    assert_eq!(expand_to_vec("[q-q]").unwrap(), vec!["q"]);
}

#[test]
fn test_bounds_wider_than_u64() {
    let urls = expand_to_vec("n[18446744073709551616-18446744073709551617]").unwrap();
    assert_eq!(urls, vec!["n18446744073709551616", "n18446744073709551617"]);
}

#[test]
fn test_oversized_step_yields_start_only() {
    let urls = expand_to_vec("p[1-5:99999999999999999999]").unwrap();
    assert_eq!(urls, vec!["p1"]);

    let step = "9".repeat(60);
    let urls = expand_to_vec(&format!("{{x,y}}[a-c:{}]", step)).unwrap();
    assert_eq!(urls, vec!["xa", "ya"]);
}

// ============================================================================
// Literal text
// ============================================================================

#[test]
fn test_malformed_groups_are_literal() {
    for template in ["[a-{})", "{", "}", "{}", "[]", "[1-a]", "[a-1]", "[1-2:]", "[-]"] {
        assert_eq!(
            expand_to_vec(template).unwrap(),
            vec![template.to_string()],
            "template {:?} should pass through",
            template
        );
    }
}

#[test]
fn test_non_ascii_text_is_preserved() {
    let urls = expand_to_vec("https://例え.jp/{ä,ö}").unwrap();
    assert_eq!(urls, vec!["https://例え.jp/ä", "https://例え.jp/ö"]);
}

#[test]
fn test_non_ascii_digits_and_letters_are_literal() {
    for template in ["p[١-٣]", "p[१-३]", "p[１-３]", "p[α-γ]", "p[1-3:２]"] {
        assert_eq!(
            expand_to_vec(template).unwrap(),
            vec![template.to_string()],
            "template {:?} should pass through",
            template
        );
    }

    let urls = expand_to_vec("p[١-٣][1-2]").unwrap();
    assert_eq!(urls, vec!["p[١-٣]1", "p[١-٣]2"]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_inverted_numeric_range_isolated() {
    let results: Vec<_> = expand("[5-1]").collect();
    assert_eq!(
        results,
        vec![Err(GlobError::BadNumericRange {
            template: "[5-1]".to_string(),
        })]
    );
}

#[test]
fn test_oversized_alpha_range_isolated() {
    let results: Vec<_> = expand("[A-z]").collect();
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(GlobError::BadAlphaRange { .. })));
}

#[test]
fn test_error_reports_substituted_template() {
    let err = expand_to_vec("x{1,2}[9-3]").unwrap_err();
    assert_eq!(err.template(), "x1[9-3]");
}

#[test]
fn test_zero_step_is_an_error() {
    let err = expand_to_vec("[a-e:0]").unwrap_err();
    assert!(matches!(err, GlobError::ZeroStep { .. }));
}
