//! Per-field scoring rules, checked through the public `score` function.

use super::common::assert_close;
use mintsearch::scoring::{ALL_TERMS_BONUS, FUZZY_THRESHOLD};
use mintsearch::{query_terms, score, similarity_ratio, Record};

// ============================================================================
// NAME
// ============================================================================

#[test]
fn test_uppercase_query_hits_name_exactly() {
    // only the name field is populated, so no bonus ambiguity: 20 * 1.2
    let record = Record::new("Bluetooth");
    let terms = query_terms("BLUETOOTH");
    assert_close(score(&record, &terms), 20.0 * ALL_TERMS_BONUS);
}

#[test]
fn test_name_word_prefix_beats_inner_substring() {
    let word_prefix = Record::new("Power Management");
    let inner = Record::new("Superpower");
    let terms = ["power".to_string()];
    assert!(score(&word_prefix, &terms) > score(&inner, &terms));
}

#[test]
fn test_fuzzy_typo_matches_name() {
    let record = Record::new("Keyboard");
    // ratio("keybord", "keyboard") = 14/15
    assert_close(score(&record, &["keybord"]), 10.0 * 14.0 / 15.0);
}

#[test]
fn test_fuzzy_never_earns_bonus() {
    // the typo is not a substring of any field, so no 1.2
    let record = Record::new("Bluetooth");
    let ratio = similarity_ratio("blutooth", "bluetooth");
    assert!(ratio > FUZZY_THRESHOLD);
    assert_close(score(&record, &["blutooth"]), 10.0 * ratio);
}

#[test]
fn test_two_char_terms_never_fuzzy_match() {
    let record = Record::new("Xy");
    assert_eq!(score(&record, &["yx"]), 0.0);
}

// ============================================================================
// KEYWORDS
// ============================================================================

#[test]
fn test_keyword_exact_prefix_and_substring() {
    let record = Record::new("Zzzz").with_keywords("bluetooth;wireless;devices");
    // single term, present in keywords: every score carries the bonus
    assert_close(score(&record, &["wireless"]), 16.0 * ALL_TERMS_BONUS);
    assert_close(score(&record, &["wire"]), 12.0 * ALL_TERMS_BONUS);
    assert_close(score(&record, &["ireles"]), 8.0 * ALL_TERMS_BONUS);
}

#[test]
fn test_keyword_exact_wins_over_prefix() {
    // "pair" is both an exact entry and a prefix of "pairing"
    let record = Record::new("Zzzz").with_keywords("pairing;pair");
    assert_close(score(&record, &["pair"]), 16.0 * ALL_TERMS_BONUS);
}

// ============================================================================
// DESCRIPTION / MODULE
// ============================================================================

#[test]
fn test_description_and_module_multipliers() {
    let record = Record::new("Zzzz")
        .with_description("Adjust pointer speed")
        .with_module("mouse");
    assert_close(score(&record, &["speed"]), 7.5 * ALL_TERMS_BONUS);
    assert_close(score(&record, &["mou"]), 4.5 * ALL_TERMS_BONUS);
}

// ============================================================================
// GLOBAL BONUS
// ============================================================================

#[test]
fn test_bonus_requires_every_term() {
    let record = Record::new("Mouse").with_description("Pointer speed");
    let both = score(&record, &["mouse", "speed"]);
    let one_missing = score(&record, &["mouse", "qqqq"]);
    assert_close(both, (20.0 + 7.5) * ALL_TERMS_BONUS);
    assert_close(one_missing, 20.0);
}

#[test]
fn test_missing_fields_score_as_empty() {
    let record: Record = serde_json::from_str(r#"{"name": "Mouse", "keywords": null}"#).unwrap();
    assert_close(score(&record, &["mouse"]), 20.0 * ALL_TERMS_BONUS);
    assert_eq!(score(&record, &["keyboard"]), 0.0);
}
