// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering and relevance percentages.
//!
//! Every sort here is stable: records that compare equal keep the order they
//! had in the input catalog. Text keys compare case-insensitively (Unicode
//! lowercase), so "bluetooth" and "Bluetooth" tie.

use crate::types::{Record, ScoredMatch, SortKey};
use std::cmp::Ordering;

/// Compare two matches under `key`.
///
/// `Relevance` is score descending; every other key is its text field
/// ascending, case-insensitive. Equal keys compare `Equal` so a stable sort
/// falls back to input order.
pub fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>, key: SortKey) -> Ordering {
    match key {
        SortKey::Relevance => b.score.total_cmp(&a.score),
        _ => sort_text(a.record, key).cmp(&sort_text(b.record, key)),
    }
}

/// Lowercased text a record sorts by. Empty for `Relevance`.
fn sort_text(record: &Record, key: SortKey) -> String {
    match key {
        SortKey::Relevance => String::new(),
        SortKey::Name => record.name.to_lowercase(),
        SortKey::Type => record.record_type.to_lowercase(),
        SortKey::Module => record.module.to_lowercase(),
    }
}

/// Stable sort of scored matches in place.
pub fn sort_matches(matches: &mut [ScoredMatch<'_>], key: SortKey) {
    // INVARIANT: STABLE_TIES
    // Both arms are stable sorts, so equal keys keep catalog order.
    match key {
        SortKey::Relevance => matches.sort_by(|a, b| b.score.total_cmp(&a.score)),
        // lowercase each key once instead of on every comparison
        _ => matches.sort_by_cached_key(|m| sort_text(m.record, key)),
    }
}

/// Stable alphabetical (case-insensitive) sort of unscored records.
pub fn sort_by_name(records: &mut [&Record]) {
    records.sort_by_cached_key(|r| r.name.to_lowercase());
}

/// `round(100 * score / max)`, clamped to `0..=100`.
///
/// Returns 0 when `max` is not a positive finite number.
pub fn relevance_pct(score: f64, max: f64) -> u8 {
    if !(max.is_finite() && max > 0.0) {
        return 0;
    }
    (100.0 * score / max).round().clamp(0.0, 100.0) as u8
}

/// Percentages for a batch of scores, relative to the batch maximum.
///
/// The top score always maps to 100.
pub fn relevance_percentages(scores: &[f64]) -> Vec<u8> {
    let max = scores.iter().copied().fold(0.0_f64, f64::max);
    scores.iter().map(|&s| relevance_pct(s, max)).collect()
}
