// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One search pass: query in, ordered matches out.
//!
//! An empty (or whitespace-only) query is a browse request: every record
//! comes back alphabetically and nothing is scored. Anything else is split
//! into terms, every record is scored, zero scores are dropped, and the rest
//! are sorted by the requested key.
//!
//! With the `parallel` feature, records are scored on the rayon pool. The
//! indexed collect keeps input order, so the output is identical to the
//! sequential path and stable sorts still see catalog order.

use crate::contracts::{check_relevance_bounds, check_sorted_by};
use crate::scoring::ranking::{relevance_percentages, sort_by_name, sort_matches};
use crate::scoring::{score_text, ScoringText};
use crate::types::{Ranking, Record, ScoredMatch, SortKey};
use crate::utils::query_terms;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank `records` against a free-text `query`.
///
/// The returned matches borrow from `records`. Calling this twice with the
/// same inputs yields the same ranking.
pub fn rank<'a>(records: &'a [Record], query: &str, sort: SortKey) -> Ranking<'a> {
    let terms = query_terms(query);
    if terms.is_empty() {
        let mut all: Vec<&Record> = records.iter().collect();
        sort_by_name(&mut all);
        debug!(records = all.len(), "empty query, listing all records");
        return Ranking::All(all);
    }

    let mut matches = score_records(records, &terms);
    sort_matches(&mut matches, sort);

    let scores: Vec<f64> = matches.iter().map(|m| m.score).collect();
    for (m, pct) in matches.iter_mut().zip(relevance_percentages(&scores)) {
        m.relevance = pct;
    }

    check_relevance_bounds(&matches);
    check_sorted_by(&matches, sort);
    debug!(
        terms = terms.len(),
        records = records.len(),
        matches = matches.len(),
        sort = %sort,
        "ranked query"
    );

    Ranking::Matched { terms, matches }
}

/// Score every record, keeping those above zero in input order.
///
/// `relevance` is left at 0; [`rank`] fills it once the pass maximum is known.
pub fn score_records<'a>(records: &'a [Record], terms: &[String]) -> Vec<ScoredMatch<'a>> {
    let score_one = |record: &'a Record| {
        let score = score_text(&ScoringText::new(record), terms);
        (score > 0.0).then_some(ScoredMatch {
            record,
            score,
            relevance: 0,
        })
    };

    #[cfg(feature = "parallel")]
    {
        records.par_iter().filter_map(score_one).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        records.iter().filter_map(score_one).collect()
    }
}
