// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where records come from.
//!
//! Each source scans one corner of the system and appends records. They run
//! in a fixed order because later sources look at what earlier ones found:
//! system tools skip modules already present, detailed settings hang off
//! their parent panels, and the Bluetooth fallback only fires when nothing
//! earlier could manage Bluetooth.
//!
//! Directory listings are sorted by file name so discovery is repeatable on
//! any filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::desktop_entry::DesktopEntry;
use super::tables::UtilitySpec;
use crate::types::Record;
use crate::utils::default_display_name;

pub const TYPE_SETTING: &str = "Setting";
pub const TYPE_UTILITY: &str = "Utility";
pub const TYPE_SYSTEM_TOOL: &str = "System Tool";
pub const TYPE_BLUETOOTH_MANAGER: &str = "Bluetooth Manager";
pub const TYPE_SPECIFIC_SETTING: &str = "Specific Setting";

const SETTINGS_ICON: &str = "preferences-system";
const APPLICATION_ICON: &str = "application-x-executable";
const BLUETOOTH_MODULE: &str = "bluetooth-manager";

/// Known Bluetooth managers, best first. Only the first word is probed.
pub const BLUETOOTH_COMMANDS: &[&str] = &[
    "blueberry",
    "blueman-manager",
    "bluetooth-sendto",
    "cinnamon-settings bluetooth",
    "gnome-control-center bluetooth",
];

// =============================================================================
// DIRECTORY HELPERS
// =============================================================================

/// File names in `dir`, sorted. A missing or unreadable directory is empty.
fn sorted_file_names(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), %err, "cannot list directory");
            return Vec::new();
        }
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

/// Parse a desktop file, logging and skipping it when unreadable.
fn read_entry(path: &Path) -> Option<DesktopEntry> {
    match DesktopEntry::load(path) {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!(%err, "skipping desktop entry");
            None
        }
    }
}

/// `base` plus `;Keywords` from the entry, when it has any.
fn merged_keywords(base: &str, entry: &DesktopEntry) -> String {
    match &entry.keywords {
        Some(extra) => format!("{};{}", base, extra),
        None => base.to_string(),
    }
}

/// A record from a desktop entry, with the fallbacks discovery uses.
fn entry_record(entry: &DesktopEntry, module: &str, default_icon: &str) -> Record {
    Record::new(
        entry
            .name
            .clone()
            .unwrap_or_else(|| default_display_name(module)),
    )
    .with_description(entry.comment.clone().unwrap_or_default())
    .with_module(module)
    .with_icon(entry.icon.clone().unwrap_or_else(|| default_icon.to_string()))
    .with_command(entry.exec_command().unwrap_or_default())
}

// =============================================================================
// SOURCES
// =============================================================================

/// Cinnamon settings panels: one record per `cs_<module>.py`.
///
/// Name, description, icon and keywords come from the matching
/// `cinnamon-settings-<module>.desktop` when it exists.
pub fn cinnamon_modules(modules_dir: &Path, applications_dir: &Path, out: &mut Vec<Record>) {
    if !modules_dir.is_dir() {
        debug!(dir = %modules_dir.display(), "no cinnamon modules directory");
        return;
    }

    let before = out.len();
    for file_name in sorted_file_names(modules_dir) {
        let Some(module) = file_name
            .strip_prefix("cs_")
            .and_then(|rest| rest.strip_suffix(".py"))
        else {
            continue;
        };

        let desktop_path = applications_dir.join(format!("cinnamon-settings-{}.desktop", module));
        let entry = if desktop_path.exists() {
            read_entry(&desktop_path).unwrap_or_default()
        } else {
            DesktopEntry::default()
        };

        out.push(
            entry_record(&entry, module, SETTINGS_ICON)
                .with_command(format!("cinnamon-settings {}", module))
                .with_keywords(merged_keywords(module, &entry))
                .with_type(TYPE_SETTING),
        );
    }
    debug!(count = out.len() - before, "cinnamon modules");
}

/// Other settings applications: `*settings*.desktop`, excluding Cinnamon's own.
pub fn settings_apps(applications_dir: &Path, out: &mut Vec<Record>) {
    let before = out.len();
    for file_name in sorted_file_names(applications_dir) {
        let Some(module) = file_name.strip_suffix(".desktop") else {
            continue;
        };
        if !file_name.to_lowercase().contains("settings") || file_name.starts_with("cinnamon-settings") {
            continue;
        }
        let Some(entry) = read_entry(&applications_dir.join(&file_name)) else {
            continue;
        };
        if entry.no_display {
            continue;
        }

        out.push(
            entry_record(&entry, module, SETTINGS_ICON)
                .with_keywords(merged_keywords(module, &entry))
                .with_type(TYPE_SETTING),
        );
    }
    debug!(count = out.len() - before, "settings applications");
}

/// Known utilities from the curated table.
///
/// Utilities whose keywords and module both mention Bluetooth are typed as
/// Bluetooth managers. If one of those has a priority, a synthetic
/// "Bluetooth Manager" record pointing at the first such tool is added too.
pub fn utilities(applications_dir: &Path, table: &[UtilitySpec], out: &mut Vec<Record>) {
    let before = out.len();
    let mut preferred_bluetooth: Option<String> = None;

    for spec in table {
        let path = applications_dir.join(&spec.desktop_file);
        if !path.exists() {
            continue;
        }
        let Some(entry) = read_entry(&path) else {
            continue;
        };
        if entry.no_display {
            continue;
        }

        let module = spec.module();
        let mut record = entry_record(&entry, module, APPLICATION_ICON)
            .with_keywords(merged_keywords(&spec.keywords, &entry))
            .with_type(TYPE_UTILITY);
        if let Some(command) = &spec.direct_command {
            record.command = command.clone();
        }

        if is_bluetooth_tool(&record) {
            record.record_type = TYPE_BLUETOOTH_MANAGER.to_string();
            if preferred_bluetooth.is_none() && spec.priority.is_some() {
                debug!(command = %record.command, "preferred bluetooth manager");
                preferred_bluetooth = Some(record.command.clone());
            }
        }
        out.push(record);
    }

    if let Some(command) = preferred_bluetooth {
        out.push(
            bluetooth_manager(command)
                .with_description("Connect and manage Bluetooth devices")
                .with_keywords("bluetooth;wireless;devices;pair;connect;headphones;speakers;mouse;keyboard"),
        );
    }
    debug!(count = out.len() - before, "utilities");
}

fn is_bluetooth_tool(record: &Record) -> bool {
    record.keywords.to_lowercase().contains("bluetooth")
        && record.module.to_lowercase().contains("bluetooth")
}

/// Administrative and system applications not covered by anything else.
///
/// A desktop file qualifies when its categories mention `admin` or `system`
/// but not `settings`. Files in the utilities table, Cinnamon's own settings
/// files, and modules already discovered are skipped.
pub fn system_tools(applications_dir: &Path, table: &[UtilitySpec], out: &mut Vec<Record>) {
    let before = out.len();
    for file_name in sorted_file_names(applications_dir) {
        let Some(module) = file_name.strip_suffix(".desktop") else {
            continue;
        };
        if table.iter().any(|spec| spec.desktop_file == file_name) {
            continue;
        }
        let Some(entry) = read_entry(&applications_dir.join(&file_name)) else {
            continue;
        };
        if entry.no_display {
            continue;
        }
        let Some(categories) = entry.categories_lower() else {
            continue;
        };
        let is_system = categories.contains("admin") || categories.contains("system");
        if !is_system || categories.contains("settings") || file_name.starts_with("cinnamon-settings") {
            continue;
        }
        if out.iter().any(|r| r.module == module) {
            continue;
        }

        let base_keywords = format!("{};{}", module, categories);
        out.push(
            entry_record(&entry, module, APPLICATION_ICON)
                .with_keywords(merged_keywords(&base_keywords, &entry))
                .with_type(TYPE_SYSTEM_TOOL),
        );
    }
    debug!(count = out.len() - before, "system tools");
}

/// Add a Bluetooth manager when discovery found none, probing `binary_dirs`
/// for the first known manager that is installed.
pub fn bluetooth_fallback(binary_dirs: &[PathBuf], out: &mut Vec<Record>) {
    if out.iter().any(manages_bluetooth) {
        return;
    }

    let installed = BLUETOOTH_COMMANDS.iter().find(|command| {
        let program = command.split_whitespace().next().unwrap_or_default();
        binary_dirs.iter().any(|dir| dir.join(program).exists())
    });

    match installed {
        Some(command) => {
            debug!(command, "bluetooth fallback");
            out.push(
                bluetooth_manager(command.to_string())
                    .with_description("Configure and connect to Bluetooth devices")
                    .with_keywords(
                        "bluetooth;wireless;devices;transfer;audio;headphones;speakers;mouse;keyboard;pairing;connect",
                    ),
            );
        }
        None => debug!("no bluetooth manager installed"),
    }
}

/// Does this record already launch something that manages Bluetooth?
fn manages_bluetooth(record: &Record) -> bool {
    let mentions = record.keywords.to_lowercase().contains("bluetooth")
        || record.name.to_lowercase().contains("bluetooth");
    if !mentions || record.command.is_empty() {
        return false;
    }
    let command = record.command.to_lowercase();
    record.record_type == TYPE_BLUETOOTH_MANAGER
        || ["blueberry", "blueman", "bluetooth-"]
            .iter()
            .any(|tool| command.contains(tool))
}

fn bluetooth_manager(command: String) -> Record {
    Record::new("Bluetooth Manager")
        .with_module(BLUETOOTH_MODULE)
        .with_icon("bluetooth")
        .with_command(command)
        .with_type(TYPE_BLUETOOTH_MANAGER)
}
