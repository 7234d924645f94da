//! System discovery against a fake `/usr/share` tree.

use std::fs;

use crate::common::{by_name, desktop_entry, FakeSystem};
use mintsearch::{Catalog, SearchError, SortKey};

fn discover(system: &FakeSystem) -> Catalog {
    Catalog::discover(&system.options()).unwrap()
}

// ============================================================================
// CINNAMON MODULES
// ============================================================================

#[test]
fn test_cinnamon_module_uses_desktop_file() {
    let system = FakeSystem::new();
    system.cinnamon_module("mouse").desktop(
        "cinnamon-settings-mouse.desktop",
        &desktop_entry(
            "Mouse and Touchpad",
            "Comment=Control mouse and touchpad settings\nIcon=cs-mouse\nKeywords=pointer;cursor;",
        ),
    );

    let catalog = discover(&system);
    let mouse = by_name(catalog.records(), "Mouse and Touchpad");
    assert_eq!(mouse.module, "mouse");
    assert_eq!(mouse.record_type, "Setting");
    assert_eq!(mouse.command, "cinnamon-settings mouse");
    assert_eq!(mouse.icon, "cs-mouse");
    assert_eq!(mouse.keywords, "mouse;pointer;cursor;");
    assert_eq!(mouse.description, "Control mouse and touchpad settings");
}

#[test]
fn test_cinnamon_module_without_desktop_file() {
    let system = FakeSystem::new();
    system.cinnamon_module("hotcorner");

    let catalog = discover(&system);
    let record = by_name(catalog.records(), "Hotcorner");
    assert_eq!(record.icon, "preferences-system");
    assert_eq!(record.keywords, "hotcorner");
    assert_eq!(record.command, "cinnamon-settings hotcorner");
}

#[test]
fn test_non_module_files_ignored() {
    let system = FakeSystem::new();
    fs::write(system.modules_dir().join("__init__.py"), "").unwrap();
    fs::write(system.modules_dir().join("cs_mouse.pyc"), "").unwrap();
    assert!(discover(&system).is_empty());
}

// ============================================================================
// SETTINGS APPS, UTILITIES, SYSTEM TOOLS
// ============================================================================

#[test]
fn test_settings_apps_skip_hidden_and_cinnamon_files() {
    let system = FakeSystem::new();
    system
        .desktop(
            "blueman-settings.desktop",
            &desktop_entry("Bluetooth Settings", "Exec=blueman-settings %f"),
        )
        .desktop(
            "hidden-settings.desktop",
            &desktop_entry("Hidden", "NoDisplay=true"),
        )
        .desktop(
            "cinnamon-settings-mouse.desktop",
            &desktop_entry("Mouse and Touchpad", ""),
        );

    let catalog = discover(&system);
    let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bluetooth Settings"]);
    let record = &catalog.records()[0];
    assert_eq!(record.record_type, "Setting");
    assert_eq!(record.command, "blueman-settings");
    assert_eq!(record.keywords, "blueman-settings");
}

#[test]
fn test_known_utility_gets_table_keywords() {
    let system = FakeSystem::new();
    system.desktop(
        "mintupdate.desktop",
        &desktop_entry("Update Manager", "Exec=mintupdate\nIcon=mintupdate"),
    );

    let catalog = discover(&system);
    let record = by_name(catalog.records(), "Update Manager");
    assert_eq!(record.record_type, "Utility");
    assert_eq!(record.module, "mintupdate");
    assert!(record.keywords.starts_with("update;upgrade;"));

    let ranking = catalog.rank("upgrade", SortKey::Relevance);
    assert_eq!(ranking.records()[0].name, "Update Manager");
}

#[test]
fn test_bluetooth_utility_adds_synthetic_manager() {
    let system = FakeSystem::new();
    system.desktop(
        "bluetooth-sendto.desktop",
        &desktop_entry("Bluetooth Transfer", "Exec=bluetooth-sendto %F"),
    );
    system.binary("blueberry");

    let catalog = discover(&system);
    let tool = by_name(catalog.records(), "Bluetooth Transfer");
    assert_eq!(tool.record_type, "Bluetooth Manager");
    assert_eq!(tool.command, "bluetooth-sendto");

    let managers: Vec<_> = catalog
        .records()
        .iter()
        .filter(|r| r.name == "Bluetooth Manager")
        .collect();
    assert_eq!(managers.len(), 1, "fallback must not add a second manager");
    assert_eq!(managers[0].command, "bluetooth-sendto");
    assert_eq!(managers[0].module, "bluetooth-manager");
}

#[test]
fn test_utility_without_bluetooth_module_stays_utility() {
    let system = FakeSystem::new();
    system.desktop("blueberry.desktop", &desktop_entry("Bluetooth", "Exec=blueberry"));

    let catalog = discover(&system);
    let record = by_name(catalog.records(), "Bluetooth");
    assert_eq!(record.record_type, "Utility");
    assert!(catalog.records().iter().all(|r| r.name != "Bluetooth Manager"));
}

#[test]
fn test_system_tools_by_category() {
    let system = FakeSystem::new();
    system
        .desktop(
            "org.gnome.DiskUtility.desktop",
            &desktop_entry("Disks", "Exec=gnome-disks\nCategories=GTK;System;Utility;"),
        )
        .desktop(
            "gnome-calculator.desktop",
            &desktop_entry("Calculator", "Categories=GNOME;Utility;Calculator;"),
        )
        .desktop(
            "printer-settings.desktop",
            &desktop_entry("Printers", "Categories=System;Settings;"),
        );

    let catalog = discover(&system);
    let disks = by_name(catalog.records(), "Disks");
    assert_eq!(disks.record_type, "System Tool");
    assert_eq!(disks.keywords, "org.gnome.DiskUtility;gtk;system;utility;");
    assert!(catalog.records().iter().all(|r| r.name != "Calculator"));

    // Found once, as a settings app.
    let printers: Vec<_> = catalog.records().iter().filter(|r| r.name == "Printers").collect();
    assert_eq!(printers.len(), 1);
    assert_eq!(printers[0].record_type, "Setting");
}

#[test]
fn test_system_tool_skips_known_module() {
    let system = FakeSystem::new();
    system.desktop(
        "gnome-system-settings.desktop",
        &desktop_entry("System Settings", "Categories=System;"),
    );

    let catalog = discover(&system);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].record_type, "Setting");
}

// ============================================================================
// DETAILED SETTINGS
// ============================================================================

#[test]
fn test_detailed_settings_expand_under_parent() {
    let system = FakeSystem::new();
    system
        .cinnamon_module("windows")
        .desktop("cinnamon-settings-windows.desktop", &desktop_entry("Windows", "Icon=cs-windows"));

    let catalog = discover(&system);
    let alt_tab = by_name(catalog.records(), "Alt-Tab Behavior");
    assert_eq!(alt_tab.record_type, "Specific Setting");
    assert_eq!(alt_tab.module, "windows:alt-tab-behavior");
    assert_eq!(alt_tab.parent, "Windows");
    assert_eq!(alt_tab.icon, "cs-windows");
    assert_eq!(alt_tab.command, "cinnamon-settings windows");
    assert!(alt_tab.keywords.ends_with(";windows;Windows"));

    let children = catalog.records().iter().filter(|r| r.parent == "Windows").count();
    assert_eq!(children, 3);
}

#[test]
fn test_detailed_settings_need_parent() {
    let system = FakeSystem::new();
    system.cinnamon_module("sound");
    let catalog = discover(&system);
    assert!(catalog.records().iter().all(|r| r.record_type != "Specific Setting"));
}

#[test]
fn test_detailed_settings_override_file() {
    let system = FakeSystem::new();
    system.cinnamon_module("sound");
    let table = system.path("detailed.json");
    fs::write(
        &table,
        r#"[{"module": "sound", "settings": [{"name": "Output Device", "keywords": "speakers;hdmi"}]}]"#,
    )
    .unwrap();

    let mut options = system.options();
    options.detailed_settings_path = Some(table);
    let catalog = Catalog::discover(&options).unwrap();

    let output = by_name(catalog.records(), "Output Device");
    assert_eq!(output.module, "sound:output-device");
    assert_eq!(output.parent, "Sound");
    assert_eq!(output.keywords, "speakers;hdmi;sound;Sound");
}

#[test]
fn test_broken_override_file_is_error() {
    let system = FakeSystem::new();
    let table = system.path("detailed.json");
    fs::write(&table, "{not json").unwrap();

    let mut options = system.options();
    options.detailed_settings_path = Some(table);
    let err = Catalog::discover(&options).unwrap_err();
    assert!(matches!(err, SearchError::Json { .. }));
}

// ============================================================================
// BLUETOOTH FALLBACK
// ============================================================================

#[test]
fn test_bluetooth_fallback_prefers_first_installed() {
    let system = FakeSystem::new();
    system.binary("blueman-manager").binary("blueberry");

    let catalog = discover(&system);
    assert_eq!(catalog.len(), 1);
    let manager = &catalog.records()[0];
    assert_eq!(manager.name, "Bluetooth Manager");
    assert_eq!(manager.command, "blueberry");
    assert_eq!(manager.record_type, "Bluetooth Manager");
}

#[test]
fn test_bluetooth_fallback_multiword_command() {
    let system = FakeSystem::new();
    system.binary("cinnamon-settings");
    let catalog = discover(&system);
    assert_eq!(catalog.records()[0].command, "cinnamon-settings bluetooth");
}

#[test]
fn test_bluetooth_panel_alone_still_gets_manager() {
    let system = FakeSystem::new();
    system.cinnamon_module("bluetooth").binary("blueman-manager");

    let catalog = discover(&system);
    let manager = by_name(catalog.records(), "Bluetooth Manager");
    assert_eq!(manager.command, "blueman-manager");
}

#[test]
fn test_no_bluetooth_anywhere() {
    let system = FakeSystem::new();
    system.cinnamon_module("mouse");
    let catalog = discover(&system);
    assert!(catalog.records().iter().all(|r| r.record_type != "Bluetooth Manager"));
}

// ============================================================================
// WHOLE CATALOG
// ============================================================================

#[test]
fn test_discovery_sorted_by_name_and_repeatable() {
    let system = FakeSystem::new();
    system
        .cinnamon_module("windows")
        .cinnamon_module("mouse")
        .cinnamon_module("keyboard")
        .desktop("mintupdate.desktop", &desktop_entry("Update Manager", ""))
        .binary("blueberry");

    let first = discover(&system);
    let names: Vec<String> = first.records().iter().map(|r| r.name.to_lowercase()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    assert_eq!(discover(&system), first);
}

#[test]
fn test_missing_directories_give_empty_catalog() {
    let system = FakeSystem::new();
    let mut options = system.options();
    options.applications_dir = system.path("does-not-exist");
    options.cinnamon_modules_dir = system.path("also-missing");
    options.binary_dirs.clear();
    assert!(Catalog::discover(&options).unwrap().is_empty());
}
