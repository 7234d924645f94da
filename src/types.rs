// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search pass.
//!
//! A `Record` is one searchable item: a settings panel, a utility, or a
//! fine-grained sub-setting. A `Ranking` is what one search pass produces,
//! and `ScoredMatch` pairs a borrowed record with its score.
//!
//! # Invariants
//!
//! - **Record**: `name` is never empty. Every other field is a string that
//!   defaults to `""` (JSON `null` included), so the engine never has to
//!   think about missing fields.
//!
//! - **ScoredMatch**: `score > 0` and `relevance <= 100`. Zero-score records
//!   never become matches.
//!
//! - **Ranking**: `All` (no query) and `Matched` (query that may have matched
//!   nothing) are different answers and stay different types.

use crate::error::SearchError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// RECORD
// =============================================================================

/// One searchable item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display title. Required, never empty.
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Identifier of the underlying system action (e.g. `mouse`, `windows:alt-tab-behavior`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub module: String,
    /// Semicolon-separated tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: String,
    /// Category tag: "Setting", "Utility", "System Tool", "Specific Setting", ...
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub record_type: String,
    /// Action to invoke. Opaque to the engine.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub command: String,
    /// Name of the owning record, if any.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parent: String,
    /// Icon name or path. Presentation only, never scored.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon: String,
}

impl Record {
    /// A record with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = record_type.into();
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = parent.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Raw text of a scored field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Module => &self.module,
            Field::Keywords => &self.keywords,
        }
    }
}

/// JSON `null` and missing fields both become the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// FIELDS
// =============================================================================

/// The four record fields that take part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Module,
    Keywords,
}

impl Field {
    /// All scored fields, in scoring order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Description,
        Field::Module,
        Field::Keywords,
    ];
}

// =============================================================================
// SORT KEYS
// =============================================================================

/// How ranked matches are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Score descending.
    #[default]
    Relevance,
    /// Name, case-insensitive ascending.
    Name,
    /// Record type, case-insensitive ascending.
    Type,
    /// Module, case-insensitive ascending.
    Module,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::Name,
        SortKey::Type,
        SortKey::Module,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Name => "name",
            SortKey::Type => "type",
            SortKey::Module => "module",
        }
    }
}

impl FromStr for SortKey {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "name" => Ok(SortKey::Name),
            "type" => Ok(SortKey::Type),
            "module" => Ok(SortKey::Module),
            _ => Err(SearchError::InvalidSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A record that matched a query, with its score and display percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    pub record: &'a Record,
    /// Raw relevance score. Always `> 0`.
    pub score: f64,
    /// `round(100 * score / max_score)` over the pass, in `0..=100`.
    pub relevance: u8,
}

/// Output of one search pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking<'a> {
    /// Empty query: every record, alphabetical by name. Nothing is scored.
    All(Vec<&'a Record>),
    /// Non-empty query: the terms it was split into and the records that matched.
    Matched {
        terms: Vec<String>,
        matches: Vec<ScoredMatch<'a>>,
    },
}

impl<'a> Ranking<'a> {
    pub fn len(&self) -> usize {
        match self {
            Ranking::All(records) => records.len(),
            Ranking::Matched { matches, .. } => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Query terms. Empty for `All`.
    pub fn terms(&self) -> &[String] {
        match self {
            Ranking::All(_) => &[],
            Ranking::Matched { terms, .. } => terms,
        }
    }

    /// Scored matches. Empty for `All`.
    pub fn matches(&self) -> &[ScoredMatch<'a>] {
        match self {
            Ranking::All(_) => &[],
            Ranking::Matched { matches, .. } => matches,
        }
    }

    /// Records in display order, scored or not.
    pub fn records(&self) -> Vec<&'a Record> {
        match self {
            Ranking::All(records) => records.clone(),
            Ranking::Matched { matches, .. } => matches.iter().map(|m| m.record).collect(),
        }
    }
}
