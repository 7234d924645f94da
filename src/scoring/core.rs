// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance scores.
//!
//! Each query term is scored against four fields, each with its own weight.
//! Within a field a term either misses (0), hits as a plain substring
//! (weight), or hits in a stronger position (weight × multiplier). The name
//! field alone gets a fuzzy fallback for near-miss spellings.
//!
//! # Constants
//!
//! | Field       | Weight | Strong hit                                  |
//! |-------------|--------|---------------------------------------------|
//! | name        | 10.0   | ×2.0 exact/starts-with, else ×1.5 word prefix |
//! | keywords    | 8.0    | ×2.0 exact entry, else ×1.5 entry prefix    |
//! | description | 5.0    | ×1.5 exact word                             |
//! | module      | 3.0    | ×1.5 starts-with                            |
//!
//! Multipliers never stack: the first applicable one wins, in table order.
//!
//! # Global bonus
//!
//! When every term lands somewhere in the record (any field, raw substring),
//! the whole total is multiplied by 1.2. Records matching only some of the
//! terms never get it.

use crate::contracts::check_score_valid;
use crate::fuzzy::similarity_ratio;
use crate::types::{Field, Record};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Weight of a name hit.
pub const NAME_WEIGHT: f64 = 10.0;

/// Weight of a description hit.
pub const DESCRIPTION_WEIGHT: f64 = 5.0;

/// Weight of a module hit.
pub const MODULE_WEIGHT: f64 = 3.0;

/// Weight of a keywords hit.
pub const KEYWORDS_WEIGHT: f64 = 8.0;

/// Name equals the term, or starts with it.
pub const NAME_PREFIX_MULTIPLIER: f64 = 2.0;

/// Some word of the name starts with the term.
pub const NAME_WORD_PREFIX_MULTIPLIER: f64 = 1.5;

/// Some word of the description equals the term.
pub const DESCRIPTION_WORD_MULTIPLIER: f64 = 1.5;

/// Module starts with the term.
pub const MODULE_PREFIX_MULTIPLIER: f64 = 1.5;

/// Some `;`-delimited keyword equals the term.
pub const KEYWORD_EXACT_MULTIPLIER: f64 = 2.0;

/// Some `;`-delimited keyword starts with the term.
pub const KEYWORD_PREFIX_MULTIPLIER: f64 = 1.5;

/// Terms must be longer than this (in characters) to try the fuzzy fallback.
pub const FUZZY_MIN_EXCLUSIVE_LEN: usize = 2;

/// Fuzzy similarity must exceed this to count.
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// Applied to the total when every term hits somewhere in the record.
pub const ALL_TERMS_BONUS: f64 = 1.2;

/// Base weight of a field.
pub fn field_weight(field: Field) -> f64 {
    match field {
        Field::Name => NAME_WEIGHT,
        Field::Description => DESCRIPTION_WEIGHT,
        Field::Module => MODULE_WEIGHT,
        Field::Keywords => KEYWORDS_WEIGHT,
    }
}

// =============================================================================
// LOWERCASED VIEW
// =============================================================================

/// Lowercased copies of a record's scored fields.
///
/// Built once per record per pass so each term doesn't re-lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringText {
    pub name: String,
    pub description: String,
    pub module: String,
    pub keywords: String,
}

impl ScoringText {
    pub fn new(record: &Record) -> Self {
        Self {
            name: record.name.to_lowercase(),
            description: record.description.to_lowercase(),
            module: record.module.to_lowercase(),
            keywords: record.keywords.to_lowercase(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Module => &self.module,
            Field::Keywords => &self.keywords,
        }
    }

    /// Is `term` a substring of at least one field?
    pub fn contains_anywhere(&self, term: &str) -> bool {
        Field::ALL.iter().any(|&field| self.get(field).contains(term))
    }
}

// =============================================================================
// PER-FIELD SUB-SCORES
// =============================================================================

/// Name sub-score. `name` and `term` must already be lowercase.
///
/// Substring hit first; otherwise, for terms longer than two characters,
/// `weight * ratio` when the similarity ratio against the whole name
/// exceeds 0.6.
pub fn name_score(name: &str, term: &str) -> f64 {
    if name.contains(term) {
        if name.starts_with(term) {
            // covers term == name too
            NAME_WEIGHT * NAME_PREFIX_MULTIPLIER
        } else if name.split_whitespace().any(|word| word.starts_with(term)) {
            NAME_WEIGHT * NAME_WORD_PREFIX_MULTIPLIER
        } else {
            NAME_WEIGHT
        }
    } else if term.chars().count() > FUZZY_MIN_EXCLUSIVE_LEN {
        let ratio = similarity_ratio(term, name);
        if ratio > FUZZY_THRESHOLD {
            NAME_WEIGHT * ratio
        } else {
            0.0
        }
    } else {
        0.0
    }
}

/// Description sub-score.
pub fn description_score(description: &str, term: &str) -> f64 {
    if !description.contains(term) {
        return 0.0;
    }
    if description.split_whitespace().any(|word| word == term) {
        DESCRIPTION_WEIGHT * DESCRIPTION_WORD_MULTIPLIER
    } else {
        DESCRIPTION_WEIGHT
    }
}

/// Module sub-score.
pub fn module_score(module: &str, term: &str) -> f64 {
    if !module.contains(term) {
        return 0.0;
    }
    if module.starts_with(term) {
        MODULE_WEIGHT * MODULE_PREFIX_MULTIPLIER
    } else {
        MODULE_WEIGHT
    }
}

/// Keywords sub-score.
///
/// The substring test runs on the raw string (so a term can straddle a `;`),
/// the multipliers on the trimmed entries.
pub fn keywords_score(keywords: &str, term: &str) -> f64 {
    if !keywords.contains(term) {
        return 0.0;
    }
    let mut entries = keywords.split(';').map(str::trim);
    if entries.clone().any(|entry| entry == term) {
        KEYWORDS_WEIGHT * KEYWORD_EXACT_MULTIPLIER
    } else if entries.any(|entry| entry.starts_with(term)) {
        KEYWORDS_WEIGHT * KEYWORD_PREFIX_MULTIPLIER
    } else {
        KEYWORDS_WEIGHT
    }
}

/// One term's contribution, broken down by field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TermScore {
    pub name: f64,
    pub description: f64,
    pub module: f64,
    pub keywords: f64,
}

impl TermScore {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Name => self.name,
            Field::Description => self.description,
            Field::Module => self.module,
            Field::Keywords => self.keywords,
        }
    }

    pub fn total(&self) -> f64 {
        self.name + self.description + self.module + self.keywords
    }
}

/// Score one lowercase term against every field.
pub fn score_term(text: &ScoringText, term: &str) -> TermScore {
    TermScore {
        name: name_score(&text.name, term),
        description: description_score(&text.description, term),
        module: module_score(&text.module, term),
        keywords: keywords_score(&text.keywords, term),
    }
}

// =============================================================================
// RECORD SCORE
// =============================================================================

/// Total relevance of pre-lowercased fields for a list of lowercase terms.
///
/// Empty terms are ignored. Returns 0.0 when no term contributed.
pub fn score_text<S: AsRef<str>>(text: &ScoringText, terms: &[S]) -> f64 {
    let mut total = 0.0;
    let mut all_terms_hit = true;

    for term in terms.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()) {
        let term_total = score_term(text, term).total();
        if term_total > 0.0 {
            total += term_total;
        }
        if all_terms_hit && !text.contains_anywhere(term) {
            all_terms_hit = false;
        }
    }

    // INVARIANT: BONUS_NEEDS_SCORE
    // The bonus scales a positive total; it never creates a match.
    if total > 0.0 && all_terms_hit {
        total *= ALL_TERMS_BONUS;
    }

    check_score_valid(total);
    total
}

/// Relevance of `record` for lowercase `terms` (see [`crate::query_terms`]).
pub fn score<S: AsRef<str>>(record: &Record, terms: &[S]) -> f64 {
    score_text(&ScoringText::new(record), terms)
}
