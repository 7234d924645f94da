// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlight markup safety.
//!
//! Whatever the text and terms, the output must be well-formed: no raw `<`
//! or `>` outside the inserted spans, and removing the spans then unescaping
//! must give back the input text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mintsearch::{highlight_with, Highlighter, HtmlMarkup, PlainMarkup};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    terms: Vec<String>,
}

fuzz_target!(|input: Input| {
    let text: String = input.text.chars().take(500).collect();
    let terms: Vec<String> = input.terms.into_iter().take(8).collect();

    let html = highlight_with(&HtmlMarkup, &text, &terms);
    let stripped = html.replace("<mark>", "").replace("</mark>", "");

    // INVARIANT 1: Nothing unescaped leaks through
    assert!(!stripped.contains('<'), "raw '<' in {:?}", html);
    assert!(!stripped.contains('>'), "raw '>' in {:?}", html);

    // INVARIANT 2: Text survives the round trip
    let unescaped = stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    assert_eq!(unescaped, text);

    // INVARIANT 3: Spans are sorted, disjoint, on char boundaries
    let spans = Highlighter::new(&terms).spans(&text);
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start, "overlapping spans {:?}", spans);
    }
    for span in &spans {
        assert!(text.is_char_boundary(span.start) && text.is_char_boundary(span.end));
    }

    // INVARIANT 4: Plain markup is the identity
    assert_eq!(highlight_with(&PlainMarkup, &text, &terms), text);
});
