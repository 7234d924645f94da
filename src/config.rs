// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! User configuration.
//!
//! Stored as JSON at `<config dir>/mintsearch/config.json`
//! (`~/.config/mintsearch/config.json` on Linux). Every field is optional
//! in the file; a missing file means all defaults. A few environment
//! variables override the file:
//!
//! | Variable             | Field          |
//! |----------------------|----------------|
//! | `MINTSEARCH_CATALOG` | `catalog_path` |
//! | `MINTSEARCH_SORT`    | `default_sort` |
//! | `MINTSEARCH_LOG`     | `log_level`    |

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{DiscoveryOptions, DEFAULT_APPLICATIONS_DIR, DEFAULT_CINNAMON_MODULES_DIR};
use crate::error::{Result, SearchError};
use crate::logging::parse_log_level;
use crate::types::SortKey;

pub const ENV_CATALOG: &str = "MINTSEARCH_CATALOG";
pub const ENV_SORT: &str = "MINTSEARCH_SORT";
pub const ENV_LOG: &str = "MINTSEARCH_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Saved catalog to search. Unset means discover the system each run.
    pub catalog_path: Option<PathBuf>,
    pub applications_dir: PathBuf,
    pub cinnamon_modules_dir: PathBuf,
    /// Replacement for the built-in detailed settings table.
    pub detailed_settings_path: Option<PathBuf>,
    pub default_sort: SortKey,
    /// Maximum results printed by `search`. Unset means all.
    pub limit: Option<usize>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            applications_dir: PathBuf::from(DEFAULT_APPLICATIONS_DIR),
            cinnamon_modules_dir: PathBuf::from(DEFAULT_CINNAMON_MODULES_DIR),
            detailed_settings_path: None,
            default_sort: SortKey::default(),
            limit: None,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/mintsearch/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mintsearch").join("config.json"))
    }

    /// Load from the default path (or defaults) and apply env overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents =
            fs::read_to_string(path).map_err(|e| SearchError::io("read config", path, e))?;
        let config: AppConfig =
            serde_json::from_str(&contents).map_err(|e| SearchError::json(path, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| SearchError::io("create config directory", parent, e))?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SearchError::json(path, e))?;
        fs::write(path, contents).map_err(|e| SearchError::io("write config", path, e))
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`AppConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG).filter(|v| !v.is_empty()) {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(sort) = lookup(ENV_SORT).filter(|v| !v.is_empty()) {
            self.default_sort = sort.parse()?;
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(SearchError::Config(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        if self.limit == Some(0) {
            return Err(SearchError::Config("limit must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            applications_dir: self.applications_dir.clone(),
            cinnamon_modules_dir: self.cinnamon_modules_dir.clone(),
            detailed_settings_path: self.detailed_settings_path.clone(),
            ..DiscoveryOptions::default()
        }
    }
}
