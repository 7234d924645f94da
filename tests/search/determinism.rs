//! Same inputs, same output: no hidden state between passes.

use super::common::{names, sample_catalog};
use mintsearch::{rank, score_records, query_terms, SortKey};

#[test]
fn test_repeated_ranking_is_identical() {
    let catalog = sample_catalog();
    for query in ["mouse", "bluetooth", "settings", "configure", "a", "zzz", ""] {
        for sort in SortKey::ALL {
            let first = rank(&catalog, query, sort);
            let second = rank(&catalog, query, sort);
            assert_eq!(first, second, "query {:?} sort {}", query, sort);
        }
    }
}

#[test]
fn test_scoring_preserves_input_order() {
    let catalog = sample_catalog();
    let terms = query_terms("e");
    let scored: Vec<&str> = score_records(&catalog, &terms)
        .iter()
        .map(|m| m.record.name.as_str())
        .collect();
    let expected: Vec<&str> = catalog
        .iter()
        .filter(|r| mintsearch::score(r, &terms) > 0.0)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(scored, expected);
}

#[test]
fn test_reversed_catalog_reverses_ties_only() {
    let catalog = sample_catalog();
    let mut reversed = catalog.clone();
    reversed.reverse();

    let forward = rank(&catalog, "configure", SortKey::Relevance);
    let backward = rank(&reversed, "configure", SortKey::Relevance);
    let mut flipped = names(&backward);
    flipped.reverse();
    assert_eq!(names(&forward), flipped);
}
