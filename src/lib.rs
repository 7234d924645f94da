//! Fuzzy relevance search over desktop settings, with highlighted results.
//!
//! This crate ranks a collection of settings records (panels, utilities,
//! system tools, fine-grained sub-settings) against a free-text query. Each
//! query term is scored against four weighted fields with substring,
//! prefix, word and fuzzy matching; results come back sorted with a 0-100
//! relevance percentage and can be rendered with highlighted matches in
//! Pango, HTML or terminal markup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  catalog/   │────▶│  search.rs   │────▶│highlight.rs │
//! │ (discover,  │     │   (rank)     │     │ (Markup,    │
//! │  load_json) │     │              │     │ Highlighter)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     scoring/                         │
//! │  (field weights, multipliers, global bonus,         │
//! │   stable sorts, relevance percentages)              │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      fuzzy/                          │
//! │  (matching-block similarity ratio for name typos)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use mintsearch::{highlight, rank, Record, SortKey};
//!
//! let records = vec![
//!     Record::new("Mouse and Touchpad").with_module("mouse"),
//!     Record::new("Keyboard").with_module("keyboard"),
//! ];
//!
//! let ranking = rank(&records, "mouse", SortKey::Relevance);
//! assert_eq!(ranking.len(), 1);
//! assert_eq!(ranking.matches()[0].relevance, 100);
//!
//! let markup = highlight("Mouse and Touchpad", ranking.terms());
//! assert!(markup.starts_with("<span"));
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod contracts;
mod error;
pub mod fuzzy;
mod highlight;
pub mod logging;
pub mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use catalog::{Catalog, DesktopEntry, DetailedSettings, DiscoveryOptions, UtilitySpec};
pub use config::AppConfig;
pub use error::{Result, SearchError};
pub use fuzzy::similarity_ratio;
pub use highlight::{
    highlight, highlight_with, AnsiMarkup, Highlighter, HtmlMarkup, Markup, MarkupKind,
    PangoMarkup, PlainMarkup,
};
pub use logging::setup_console_logging;
pub use scoring::ranking::{relevance_pct, relevance_percentages};
pub use scoring::{score, ScoringText, TermScore};
pub use search::{rank, score_records};
pub use types::{Field, Ranking, Record, ScoredMatch, SortKey};
pub use utils::{default_display_name, query_terms, setting_slug};
