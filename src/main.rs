// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;

use mintsearch::{
    highlight, setup_console_logging, AppConfig, Catalog, Highlighter, Ranking, Record, SortKey,
};

mod cli;
use cli::display::{self, dim, highlight_terminal, relevance_bar, row, truncate, type_badge};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    setup_console_logging(&config.log_level, cli.verbose)?;

    match cli.command {
        Commands::Search {
            query,
            sort,
            limit,
            catalog,
            json,
        } => {
            let catalog = open_catalog(catalog.as_deref(), &config)?;
            let query = query.join(" ");
            let sort = sort.unwrap_or(config.default_sort);
            let limit = limit.or(config.limit);
            search(&catalog, &query, sort, limit, json)
        }
        Commands::List { catalog, json } => {
            let catalog = open_catalog(catalog.as_deref(), &config)?;
            list(&catalog, json)
        }
        Commands::Export { output } => {
            let catalog = Catalog::discover(&config.discovery_options())
                .context("Failed to scan the system catalog")?;
            catalog
                .save_json(&output)
                .with_context(|| format!("Failed to export catalog to {}", output.display()))?;
            println!("✓ Wrote {} records to {}", catalog.len(), output.display());
            Ok(())
        }
        Commands::Config { init } => show_config(cli.config.as_deref(), &config, init),
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let mut config = AppConfig::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            config.apply_overrides(|key| std::env::var(key).ok())?;
            Ok(config)
        }
        None => AppConfig::load().context("Failed to load config"),
    }
}

/// `--catalog`, then the configured catalog, then a live scan.
fn open_catalog(explicit: Option<&Path>, config: &AppConfig) -> Result<Catalog> {
    match explicit.or(config.catalog_path.as_deref()) {
        Some(path) => Catalog::load_json(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => {
            info!("no catalog file configured, scanning the system");
            Catalog::discover(&config.discovery_options()).context("Failed to scan the system catalog")
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn search(catalog: &Catalog, query: &str, sort: SortKey, limit: Option<usize>, as_json: bool) -> Result<()> {
    let ranking = catalog.rank(query, sort);
    let shown = limit.unwrap_or(usize::MAX);

    if as_json {
        let output = match &ranking {
            Ranking::All(records) => json!({
                "query": query,
                "terms": [],
                "results": records.iter().take(shown).map(|r| record_json(r, None)).collect::<Vec<_>>(),
            }),
            Ranking::Matched { terms, matches } => json!({
                "query": query,
                "sort": sort,
                "terms": terms,
                "results": matches
                    .iter()
                    .take(shown)
                    .map(|m| {
                        let mut value = record_json(m.record, Some(terms.as_slice()));
                        value["score"] = json!(m.score);
                        value["relevance"] = json!(m.relevance);
                        value
                    })
                    .collect::<Vec<_>>(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let total = ranking.len();
    let label = match &ranking {
        Ranking::All(_) => format!("ALL SETTINGS ({})", total),
        Ranking::Matched { .. } => format!("\"{}\" ({} results, by {})", truncate(query, 40), total, sort),
    };
    display::section_top(&label);

    if ranking.is_empty() {
        row(&format!(" {}", dim("No matching settings")));
        display::section_bot();
        return Ok(());
    }

    let highlighter = Highlighter::new(ranking.terms());
    match &ranking {
        Ranking::All(records) => {
            for record in records.iter().take(shown) {
                print_record(record, &highlighter, None);
            }
        }
        Ranking::Matched { matches, .. } => {
            for (i, m) in matches.iter().take(shown).enumerate() {
                if i > 0 {
                    display::section_mid();
                }
                print_record(m.record, &highlighter, Some(m.relevance));
            }
        }
    }
    if shown < total {
        display::section_mid();
        row(&format!(" {}", dim(&format!("… {} more", total - shown))));
    }
    display::section_bot();
    Ok(())
}

fn print_record(record: &Record, highlighter: &Highlighter, relevance: Option<u8>) {
    let name = highlight_terminal(highlighter, &truncate(&record.name, 40));
    let head = match relevance {
        Some(pct) => format!(" {} {}", relevance_bar(pct), name),
        None => format!(" {}", name),
    };
    let badge = type_badge(&record.record_type);
    let gap = display::BOX_WIDTH
        .saturating_sub(display::visible_len(&head) + display::visible_len(&badge) + 1);
    row(&format!("{}{}{} ", head, " ".repeat(gap), badge));

    if !record.description.is_empty() {
        row(&format!("   {}", highlight_terminal(highlighter, &truncate(&record.description, 72))));
    }

    let mut location = record.module.clone();
    if !record.parent.is_empty() {
        location = format!("{} · in {}", location, record.parent);
    }
    if !location.is_empty() {
        row(&format!("   {}", dim(&truncate(&location, 72))));
    }
}

fn record_json(record: &Record, terms: Option<&[String]>) -> serde_json::Value {
    let mut value = json!({
        "name": record.name,
        "description": record.description,
        "module": record.module,
        "type": record.record_type,
        "parent": record.parent,
        "command": record.command,
        "icon": record.icon,
    });
    if let Some(terms) = terms {
        value["name_markup"] = json!(highlight(&record.name, terms));
        value["description_markup"] = json!(highlight(&record.description, terms));
    }
    value
}

// ═══════════════════════════════════════════════════════════════════════════
// LIST / CONFIG
// ═══════════════════════════════════════════════════════════════════════════

fn list(catalog: &Catalog, as_json: bool) -> Result<()> {
    let records = catalog.sorted_refs();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    for record in records {
        println!(
            "{:<40} {:<18} {}",
            truncate(&record.name, 40),
            record.record_type,
            dim(&record.module)
        );
    }
    Ok(())
}

fn show_config(explicit: Option<&Path>, config: &AppConfig, init: bool) -> Result<()> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => AppConfig::default_path().context("No configuration directory on this platform")?,
    };

    if init {
        if path.exists() {
            bail!("{} already exists", path.display());
        }
        AppConfig::default()
            .save_to(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Wrote default configuration to {}", path.display());
        return Ok(());
    }

    println!("{}", dim(&format!("# {}", path.display())));
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
