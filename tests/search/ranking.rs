//! Ranking over a realistic catalog: filtering, sort keys, percentages.

use super::common::{names, sample_catalog};
use mintsearch::{rank, relevance_percentages, Ranking, SortKey};

#[test]
fn test_empty_query_returns_everything_alphabetically() {
    let catalog = sample_catalog();
    for sort in SortKey::ALL {
        let ranking = rank(&catalog, "", sort);
        assert!(matches!(ranking, Ranking::All(_)));
        assert_eq!(
            names(&ranking),
            vec![
                "Alt-Tab Behavior",
                "Bluetooth",
                "Bluetooth Manager",
                "Disks",
                "Keyboard",
                "Mouse and Touchpad",
                "Pointer Speed",
                "Software Sources",
                "Terminal",
                "Windows",
            ]
        );
        assert!(ranking.matches().is_empty());
    }
}

#[test]
fn test_relevance_order_and_percentages() {
    let catalog = sample_catalog();
    let ranking = rank(&catalog, "bluetooth", SortKey::Relevance);
    assert_eq!(names(&ranking), vec!["Bluetooth", "Bluetooth Manager"]);

    let pcts: Vec<u8> = ranking.matches().iter().map(|m| m.relevance).collect();
    // 57.6 vs 43.2
    assert_eq!(pcts, vec![100, 75]);
}

#[test]
fn test_multi_term_query_prefers_records_matching_all_terms() {
    let catalog = sample_catalog();
    let ranking = rank(&catalog, "mouse speed", SortKey::Relevance);
    assert_eq!(names(&ranking), vec!["Pointer Speed", "Mouse and Touchpad"]);
}

#[test]
fn test_sub_settings_found_through_parent_keywords() {
    let catalog = sample_catalog();
    let ranking = rank(&catalog, "window", SortKey::Relevance);
    assert_eq!(names(&ranking), vec!["Windows", "Alt-Tab Behavior"]);
    assert_eq!(ranking.matches()[1].record.parent, "Windows");
}

#[test]
fn test_typo_still_finds_record() {
    let catalog = sample_catalog();
    let ranking = rank(&catalog, "keybord", SortKey::Relevance);
    assert_eq!(names(&ranking), vec!["Keyboard"]);
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let catalog = sample_catalog();
    // all three score 9.0
    let ranking = rank(&catalog, "configure", SortKey::Relevance);
    assert_eq!(
        names(&ranking),
        vec!["Alt-Tab Behavior", "Bluetooth", "Software Sources"]
    );
    assert!(ranking.matches().iter().all(|m| m.relevance == 100));
}

#[test]
fn test_sort_by_name_type_module() {
    let catalog = sample_catalog();

    let by_name = rank(&catalog, "settings", SortKey::Name);
    assert_eq!(
        names(&by_name),
        vec!["Keyboard", "Mouse and Touchpad", "Software Sources"]
    );

    let by_type = rank(&catalog, "settings", SortKey::Type);
    assert_eq!(
        names(&by_type),
        vec!["Mouse and Touchpad", "Keyboard", "Software Sources"]
    );

    let by_module = rank(&catalog, "settings", SortKey::Module);
    assert_eq!(
        names(&by_module),
        vec!["Keyboard", "Software Sources", "Mouse and Touchpad"]
    );
}

#[test]
fn test_percentages_follow_max_even_when_sorted_by_name() {
    let catalog = sample_catalog();
    let ranking = rank(&catalog, "settings", SortKey::Name);
    let pcts: Vec<(&str, u8)> = ranking
        .matches()
        .iter()
        .map(|m| (m.record.name.as_str(), m.relevance))
        .collect();
    // 9.0 / 19.2 = 46.875%
    assert_eq!(
        pcts,
        vec![
            ("Keyboard", 47),
            ("Mouse and Touchpad", 47),
            ("Software Sources", 100)
        ]
    );
}

#[test]
fn test_no_match_is_empty_but_not_all() {
    let catalog = sample_catalog();
    let ranking = rank(&catalog, "zzz", SortKey::Relevance);
    assert!(ranking.is_empty());
    assert_eq!(ranking.terms(), ["zzz"]);
}

#[test]
fn test_percentage_scale() {
    assert_eq!(relevance_percentages(&[40.0, 20.0, 10.0]), vec![100, 50, 25]);
}
