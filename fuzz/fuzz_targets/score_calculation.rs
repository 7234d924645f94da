// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score and ranking invariants.
//!
//! Scores must be finite, non-negative, and deterministic. Percentages stay
//! in `0..=100` with the best match at 100, and every sort key returns the
//! same set of matches.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mintsearch::testing::sample_catalog;
use mintsearch::{query_terms, rank, score, SortKey};

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();

    let catalog = sample_catalog();
    let terms = query_terms(&query);

    // INVARIANT 1: Scores are finite and non-negative
    for record in &catalog {
        let s = score(record, &terms);
        assert!(s.is_finite() && s >= 0.0, "bad score {} for {:?}", s, record.name);
    }

    // INVARIANT 2: Ranking is deterministic
    let first = rank(&catalog, &query, SortKey::Relevance);
    let second = rank(&catalog, &query, SortKey::Relevance);
    assert_eq!(first, second, "same query ranked differently");

    // INVARIANT 3: Percentages are bounded, top match is 100
    if let Some(top) = first.matches().first() {
        assert_eq!(top.relevance, 100);
    }
    for m in first.matches() {
        assert!(m.score > 0.0);
        assert!(m.relevance <= 100);
    }

    // INVARIANT 4: Sort keys only reorder
    let mut baseline: Vec<&str> = first.records().into_iter().map(|r| r.name.as_str()).collect();
    baseline.sort_unstable();
    for key in SortKey::ALL {
        let ranking = rank(&catalog, &query, key);
        let mut names: Vec<&str> = ranking.records().into_iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, baseline, "sort key {} changed the match set", key);
    }
});
