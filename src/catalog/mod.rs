// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record collection a search runs over.
//!
//! A catalog comes from one of two places: a JSON file written earlier, or a
//! live scan of the system (Cinnamon panels, desktop files, curated tables).
//! Either way it ends up as a flat, name-sorted list of [`Record`]s.
//!
//! ```ignore
//! let catalog = Catalog::discover(&DiscoveryOptions::default())?;
//! catalog.save_json(Path::new("settings.json"))?;
//!
//! let catalog = Catalog::load_json(Path::new("settings.json"))?;
//! let ranking = catalog.rank("mouse speed", SortKey::Relevance);
//! ```

pub mod desktop_entry;
pub mod sources;
pub mod tables;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

pub use desktop_entry::DesktopEntry;
pub use tables::{DetailedSettings, UtilitySpec};

use crate::error::{Result, SearchError};
use crate::scoring::ranking::sort_by_name;
use crate::search::rank;
use crate::types::{Ranking, Record, SortKey};

pub const DEFAULT_APPLICATIONS_DIR: &str = "/usr/share/applications";
pub const DEFAULT_CINNAMON_MODULES_DIR: &str = "/usr/share/cinnamon/cinnamon-settings/modules";

/// Where discovery looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub applications_dir: PathBuf,
    pub cinnamon_modules_dir: PathBuf,
    /// Replaces the built-in detailed settings table when set.
    pub detailed_settings_path: Option<PathBuf>,
    /// Probed for Bluetooth managers when none was discovered.
    pub binary_dirs: Vec<PathBuf>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            applications_dir: PathBuf::from(DEFAULT_APPLICATIONS_DIR),
            cinnamon_modules_dir: PathBuf::from(DEFAULT_CINNAMON_MODULES_DIR),
            detailed_settings_path: None,
            binary_dirs: vec![PathBuf::from("/usr/bin"), PathBuf::from("/usr/sbin")],
        }
    }
}

/// A name-sorted collection of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Wrap records as-is. Call [`Catalog::sort_by_name`] if order matters.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stable, case-insensitive sort by name.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by_cached_key(|r| r.name.to_lowercase());
    }

    /// Records alphabetically, without moving the stored ones.
    pub fn sorted_refs(&self) -> Vec<&Record> {
        let mut refs: Vec<&Record> = self.records.iter().collect();
        sort_by_name(&mut refs);
        refs
    }

    /// Rank this catalog against `query`.
    pub fn rank(&self, query: &str, sort: SortKey) -> Ranking<'_> {
        rank(&self.records, query, sort)
    }

    // =========================================================================
    // JSON
    // =========================================================================

    /// Parse a JSON array of records. Missing and `null` fields become empty
    /// strings; an empty name is rejected with its index.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let records: Vec<Record> =
            serde_json::from_str(json).map_err(|e| SearchError::json(origin, e))?;
        validate(&records)?;
        Ok(Self::new(records))
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| SearchError::io("read catalog", path, e))?;
        let catalog = Self::from_json_str(&content, path)?;
        info!(path = %path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|e| SearchError::json("<catalog>", e))
    }

    /// Write the catalog as pretty JSON, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| SearchError::io("create directory", parent, e))?;
        }
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| SearchError::io("write catalog", path, e))?;
        info!(path = %path.display(), records = self.len(), "saved catalog");
        Ok(())
    }

    // =========================================================================
    // DISCOVERY
    // =========================================================================

    /// Scan the system for settings panels, utilities and their sub-settings.
    ///
    /// Unreadable desktop files are skipped with a warning. Only a broken
    /// table (built-in or override) is an error.
    pub fn discover(options: &DiscoveryOptions) -> Result<Self> {
        let utilities = tables::builtin_utilities()?;
        let detailed = match &options.detailed_settings_path {
            Some(path) => DetailedSettings::load(path)?,
            None => DetailedSettings::builtin()?,
        };

        let apps = options.applications_dir.as_path();
        let mut records = Vec::new();
        sources::cinnamon_modules(&options.cinnamon_modules_dir, apps, &mut records);
        sources::settings_apps(apps, &mut records);
        sources::utilities(apps, &utilities, &mut records);
        sources::system_tools(apps, &utilities, &mut records);
        let specific = detailed.expand(&records);
        records.extend(specific);
        sources::bluetooth_fallback(&options.binary_dirs, &mut records);

        let mut catalog = Self::new(records);
        catalog.sort_by_name();
        info!(
            records = catalog.len(),
            applications_dir = %apps.display(),
            "discovered catalog"
        );
        Ok(catalog)
    }
}

fn validate(records: &[Record]) -> Result<()> {
    match records.iter().position(|r| r.name.is_empty()) {
        Some(index) => Err(SearchError::InvalidRecord {
            index,
            reason: "name is empty".to_string(),
        }),
        None => Ok(()),
    }
}

impl From<Vec<Record>> for Catalog {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
