//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record fixtures so tests agree on what a
//! "settings panel" or a "utility" looks like.

#![doc(hidden)]

use crate::types::Record;

/// A Cinnamon settings panel the way discovery builds it.
pub fn make_setting(name: &str, module: &str, description: &str) -> Record {
    Record::new(name)
        .with_description(description)
        .with_module(module)
        .with_keywords(module)
        .with_type("Setting")
        .with_command(format!("cinnamon-settings {}", module))
        .with_icon("preferences-system")
}

/// A utility application with its own keyword list.
pub fn make_utility(name: &str, module: &str, keywords: &str) -> Record {
    Record::new(name)
        .with_module(module)
        .with_keywords(keywords)
        .with_type("Utility")
        .with_command(module)
}

/// A sub-setting hanging off `parent`.
pub fn make_specific(parent: &Record, name: &str, description: &str, keywords: &str) -> Record {
    Record::new(name)
        .with_description(description)
        .with_module(format!("{}:{}", parent.module, crate::utils::setting_slug(name)))
        .with_keywords(format!("{};{};{}", keywords, parent.module, parent.name))
        .with_type("Specific Setting")
        .with_command(parent.command.clone())
        .with_parent(parent.name.clone())
        .with_icon(parent.icon.clone())
}

/// A small catalog covering every record type.
pub fn sample_catalog() -> Vec<Record> {
    let mouse = make_setting("Mouse and Touchpad", "mouse", "Control mouse and touchpad settings");
    let windows = make_setting("Windows", "windows", "Manage window preferences");
    let alt_tab = make_specific(
        &windows,
        "Alt-Tab Behavior",
        "Configure Alt-Tab window switching",
        "alt-tab;switcher;window switching",
    );
    let speed = make_specific(
        &mouse,
        "Pointer Speed",
        "Adjust how fast the pointer moves",
        "speed;acceleration;pointer",
    );
    vec![
        mouse,
        windows,
        alt_tab,
        speed,
        make_setting("Keyboard", "keyboard", "Manage keyboard settings and shortcuts"),
        make_setting("Bluetooth", "bluetooth", "Configure Bluetooth devices"),
        make_utility("Disks", "gnome-disks", "disk;partition;format;usb"),
        make_utility("Bluetooth Manager", "blueman-manager", "bluetooth;devices;wireless"),
        make_utility("Terminal", "gnome-terminal", "terminal;shell;console;command"),
        Record::new("Software Sources")
            .with_description("Configure the sources for installable software")
            .with_module("mintsources")
            .with_keywords("mintsources;System;Settings;repositories;ppa")
            .with_type("System Tool")
            .with_command("pkexec mintsources"),
    ]
}
