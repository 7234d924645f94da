//! Runtime contracts for the scoring pipeline.
//!
//! Debug-mode assertions over the properties every search pass must keep:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure** in tests and fuzzing, at the function that broke it
//!
//! | Contract function        | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | `check_score_valid`      | scores are finite and never negative            |
//! | `check_relevance_bounds` | every match has score > 0, percentage <= 100    |
//! | `check_sorted_by`        | matches are in the order their sort key implies |
//! | `check_ratio_bounds`     | similarity ratios lie in `[0, 1]`               |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    use crate::scoring::*;

    // Every weight is positive, so any hit makes a term count.
    assert!(NAME_WEIGHT > 0.0);
    assert!(DESCRIPTION_WEIGHT > 0.0);
    assert!(MODULE_WEIGHT > 0.0);
    assert!(KEYWORDS_WEIGHT > 0.0);

    // Stronger positions never score below a plain substring hit.
    assert!(NAME_PREFIX_MULTIPLIER >= NAME_WORD_PREFIX_MULTIPLIER);
    assert!(NAME_WORD_PREFIX_MULTIPLIER >= 1.0);
    assert!(KEYWORD_EXACT_MULTIPLIER >= KEYWORD_PREFIX_MULTIPLIER);
    assert!(KEYWORD_PREFIX_MULTIPLIER >= 1.0);
    assert!(DESCRIPTION_WORD_MULTIPLIER >= 1.0);
    assert!(MODULE_PREFIX_MULTIPLIER >= 1.0);
    assert!(ALL_TERMS_BONUS >= 1.0);

    // Ratios stay below 1, so a fuzzy name hit scores under a substring hit.
    assert!(FUZZY_THRESHOLD > 0.0 && FUZZY_THRESHOLD < 1.0);
};

use crate::scoring::ranking::compare_matches;
use crate::types::{ScoredMatch, SortKey};
use std::cmp::Ordering;

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a record score is usable for ranking.
///
/// # Panics (debug builds only)
/// Panics if `score` is NaN, infinite, or negative.
#[inline]
pub fn check_score_valid(score: f64) {
    debug_assert!(
        score.is_finite() && score >= 0.0,
        "Contract violation: score must be finite and >= 0, got {}",
        score
    );
}

/// Check that a similarity ratio lies in `[0, 1]`.
#[inline]
pub fn check_ratio_bounds(ratio: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&ratio),
        "Contract violation: similarity ratio {} outside [0, 1]",
        ratio
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that every match carries a positive score and a percentage in range,
/// and that the top score maps to 100.
#[inline]
pub fn check_relevance_bounds(matches: &[ScoredMatch<'_>]) {
    for (i, m) in matches.iter().enumerate() {
        debug_assert!(
            m.score > 0.0,
            "Contract violation: matches[{}] ('{}') has score {}",
            i,
            m.record.name,
            m.score
        );
        debug_assert!(
            m.relevance <= 100,
            "Contract violation: matches[{}] has relevance {}%",
            i,
            m.relevance
        );
    }

    if let Some(top) = matches.iter().max_by(|a, b| a.score.total_cmp(&b.score)) {
        debug_assert_eq!(
            top.relevance, 100,
            "Contract violation: best match '{}' is not at 100%",
            top.record.name
        );
    }
}

/// Check that adjacent matches are ordered under `key`.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair compares `Greater`.
#[inline]
pub fn check_sorted_by(matches: &[ScoredMatch<'_>], key: SortKey) {
    for (i, pair) in matches.windows(2).enumerate() {
        debug_assert!(
            compare_matches(&pair[0], &pair[1], key) != Ordering::Greater,
            "Contract violation: matches[{}] ('{}') sorts after matches[{}] ('{}') by {}",
            i,
            pair[0].record.name,
            i + 1,
            pair[1].record.name,
            key
        );
    }
}
