//! Desktop entry parsing as discovery sees it.

use std::fs;

use mintsearch::catalog::desktop_entry::strip_field_codes;
use mintsearch::{DesktopEntry, SearchError};

#[test]
fn test_parse_reads_main_group_only() {
    let entry = DesktopEntry::parse(
        "[Desktop Entry]\n\
         Name=Disks\n\
         Comment=Manage drives and media\n\
         Exec=gnome-disks %U\n\
         Categories=GTK;System;Utility;\n\
         \n\
         [Desktop Action Format]\n\
         Name=Format Disk\n\
         Exec=gnome-disks --format\n",
    );
    assert_eq!(entry.name.as_deref(), Some("Disks"));
    assert_eq!(entry.comment.as_deref(), Some("Manage drives and media"));
    assert_eq!(entry.exec_command().as_deref(), Some("gnome-disks"));
    assert_eq!(entry.categories_lower().as_deref(), Some("gtk;system;utility;"));
    assert!(!entry.no_display);
}

#[test]
fn test_parse_first_value_wins_and_empty_values_skipped() {
    let entry = DesktopEntry::parse("[Desktop Entry]\nName=\nName=Printers\nName=Other\nIcon=printer\n");
    assert_eq!(entry.name.as_deref(), Some("Printers"));
    assert_eq!(entry.icon.as_deref(), Some("printer"));
    assert_eq!(entry.keywords, None);
}

#[test]
fn test_parse_ignores_localized_keys_and_comments() {
    let entry = DesktopEntry::parse(
        "# generated\n[Desktop Entry]\nName[fr]=Clavier\nName=Keyboard\nKeywords[de]=Tastatur;\n",
    );
    assert_eq!(entry.name.as_deref(), Some("Keyboard"));
    assert_eq!(entry.keywords, None);
}

#[test]
fn test_parse_no_display() {
    assert!(DesktopEntry::parse("[Desktop Entry]\nNoDisplay=true\n").no_display);
    assert!(!DesktopEntry::parse("[Desktop Entry]\nNoDisplay=false\n").no_display);
}

#[test]
fn test_strip_field_codes() {
    assert_eq!(strip_field_codes("blueman-manager %f"), "blueman-manager");
    assert_eq!(strip_field_codes("xed %U"), "xed");
    assert_eq!(strip_field_codes("printf 100%%"), "printf 100%%");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DesktopEntry::load(&dir.path().join("missing.desktop")).unwrap_err();
    assert!(matches!(err, SearchError::Io { .. }));
}

#[test]
fn test_load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xed.desktop");
    fs::write(&path, "[Desktop Entry]\nName=Text Editor\nExec=xed %U\n").unwrap();
    let entry = DesktopEntry::load(&path).unwrap();
    assert_eq!(entry.name.as_deref(), Some("Text Editor"));
    assert_eq!(entry.exec_command().as_deref(), Some("xed"));
}
