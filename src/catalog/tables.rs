// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Curated tables compiled into the binary.
//!
//! Two JSON tables ship under `data/`: the list of known utilities (which
//! desktop files to look for and what extra keywords to give them) and the
//! fine-grained settings that live inside each settings panel. The detailed
//! table can be replaced at runtime by a file of the same shape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::sources::TYPE_SPECIFIC_SETTING;
use crate::error::{Result, SearchError};
use crate::types::Record;
use crate::utils::setting_slug;

const UTILITIES_JSON: &str = include_str!("../../data/utilities.json");
const DETAILED_SETTINGS_JSON: &str = include_str!("../../data/detailed_settings.json");

// =============================================================================
// UTILITIES
// =============================================================================

/// One known utility: a desktop file to look for, with extra keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilitySpec {
    pub desktop_file: String,
    pub keywords: String,
    /// Replaces the entry's own `Exec=` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_command: Option<String>,
    /// Preference among Bluetooth managers, lower is better.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl UtilitySpec {
    /// Desktop file name without `.desktop`.
    pub fn module(&self) -> &str {
        self.desktop_file
            .strip_suffix(".desktop")
            .unwrap_or(&self.desktop_file)
    }
}

/// The built-in utilities table.
pub fn builtin_utilities() -> Result<Vec<UtilitySpec>> {
    serde_json::from_str(UTILITIES_JSON).map_err(|e| SearchError::json("data/utilities.json", e))
}

// =============================================================================
// DETAILED SETTINGS
// =============================================================================

/// A single option inside a settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedSetting {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
}

/// The detailed settings of one parent module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSettings {
    pub module: String,
    pub settings: Vec<DetailedSetting>,
}

/// Module → sub-settings table, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailedSettings(pub Vec<ModuleSettings>);

impl DetailedSettings {
    /// The table compiled into the crate.
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(DETAILED_SETTINGS_JSON)
            .map_err(|e| SearchError::json("data/detailed_settings.json", e))
    }

    /// A replacement table from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SearchError::io("read detailed settings", path, e))?;
        serde_json::from_str(&content).map_err(|e| SearchError::json(path, e))
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|m| m.module.as_str())
    }

    /// Total sub-settings across all modules.
    pub fn len(&self) -> usize {
        self.0.iter().map(|m| m.settings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// "Specific Setting" records for every module whose parent is in
    /// `records`. The parent is the first record with that exact module.
    pub fn expand(&self, records: &[Record]) -> Vec<Record> {
        let mut out = Vec::new();
        for group in &self.0 {
            let Some(parent) = records.iter().find(|r| r.module == group.module) else {
                continue;
            };
            out.extend(group.settings.iter().map(|s| specific_setting(parent, s)));
        }
        out
    }
}

fn specific_setting(parent: &Record, setting: &DetailedSetting) -> Record {
    Record::new(setting.name.clone())
        .with_description(setting.description.clone())
        .with_module(format!("{}:{}", parent.module, setting_slug(&setting.name)))
        .with_icon(parent.icon.clone())
        .with_command(format!("cinnamon-settings {}", parent.module))
        .with_parent(parent.name.clone())
        .with_keywords(format!("{};{};{}", setting.keywords, parent.module, parent.name))
        .with_type(TYPE_SPECIFIC_SETTING)
}
