// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading `.desktop` files (XDG Desktop Entry).
//!
//! Only the keys discovery needs are kept. Localized variants like
//! `Name[de]=` are different keys and are ignored, and the first occurrence
//! of a key wins. Lines outside the `[Desktop Entry]` group (actions,
//! vendor extensions) are skipped.

use std::fs;
use std::path::Path;

use crate::error::{Result, SearchError};

/// Field codes the launcher would substitute, removed from `Exec=`.
const FIELD_CODES: &[char] = &['f', 'F', 'u', 'U', 'd', 'D', 'n', 'N', 'i', 'c', 'k', 'v', 'm'];

const MAIN_GROUP: &str = "Desktop Entry";

/// The parts of a desktop entry that become a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: Option<String>,
    /// `Comment=`, used as the description.
    pub comment: Option<String>,
    pub icon: Option<String>,
    /// Raw `Exec=` line, field codes included.
    pub exec: Option<String>,
    /// Raw `Keywords=` value, semicolons kept.
    pub keywords: Option<String>,
    /// Raw `Categories=` value.
    pub categories: Option<String>,
    /// `NoDisplay=true`: the entry asks to be hidden from menus.
    pub no_display: bool,
}

impl DesktopEntry {
    /// Parse the text of a desktop file. Never fails: unknown or malformed
    /// lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut entry = Self::default();
        // Lines before any group header count as the main group.
        let mut in_main_group = true;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(group) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_main_group = group == MAIN_GROUP;
                continue;
            }
            if !in_main_group {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            let slot = match key.trim() {
                "Name" => &mut entry.name,
                "Comment" => &mut entry.comment,
                "Icon" => &mut entry.icon,
                "Exec" => &mut entry.exec,
                "Keywords" => &mut entry.keywords,
                "Categories" => &mut entry.categories,
                "NoDisplay" => {
                    entry.no_display = entry.no_display || value == "true";
                    continue;
                }
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }

        entry
    }

    /// Read and parse a desktop file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| SearchError::io("read desktop entry", path, e))?;
        Ok(Self::parse(&content))
    }

    /// `Exec=` with field codes (`%f`, `%U`, ...) removed and whitespace trimmed.
    pub fn exec_command(&self) -> Option<String> {
        self.exec.as_deref().map(strip_field_codes)
    }

    /// Lowercased categories, for substring tests.
    pub fn categories_lower(&self) -> Option<String> {
        self.categories.as_deref().map(str::to_lowercase)
    }
}

/// Remove `%X` field codes from an `Exec=` value.
pub fn strip_field_codes(exec: &str) -> String {
    let mut out = String::with_capacity(exec.len());
    let mut chars = exec.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            if let Some(&code) = chars.peek() {
                if FIELD_CODES.contains(&code) {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out.trim().to_string()
}
