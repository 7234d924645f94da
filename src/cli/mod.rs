// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the mintsearch command-line interface.
//!
//! Four subcommands: `search` to rank the catalog against a query, `list` to
//! browse it, `export` to snapshot the discovered system catalog as JSON, and
//! `config` to inspect or initialize the configuration file. Without
//! `--catalog` (or a configured catalog path) the system is scanned on every
//! run.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mintsearch::{SearchError, SortKey};

#[derive(Parser)]
#[command(
    name = "mintsearch",
    about = "Fuzzy search over Linux Mint settings, utilities and system tools",
    version
)]
pub struct Cli {
    /// Configuration file (default: ~/.config/mintsearch/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level, ignoring RUST_LOG and the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog against a free-text query
    Search {
        /// Query terms (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Result order: relevance, name, type or module
        #[arg(short, long, value_parser = parse_sort_key)]
        sort: Option<SortKey>,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Catalog JSON to search instead of scanning the system
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Print results as JSON with scores and Pango markup
        #[arg(long)]
        json: bool,
    },

    /// List every record alphabetically
    List {
        /// Catalog JSON to list instead of scanning the system
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan the system and write the catalog as JSON
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Write the defaults to the configuration file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

fn parse_sort_key(s: &str) -> Result<SortKey, SearchError> {
    s.parse()
}
