// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighted renderings of matched text.
//!
//! Matching runs on the raw text: each term is found case-insensitively as a
//! literal substring, the hits from all terms are merged into spans, and only
//! then is each plain segment escaped for the target markup. Escaping after
//! matching means a term like `amp` can never land inside an `&amp;` the
//! escaper produced, and nothing a term matches can inject tags.
//!
//! Hits that overlap (from different terms, e.g. `blue` and `luet` in
//! "Bluetooth") collapse into one span. Hits that merely touch stay separate.
//!
//! The markup dialect is a [`Markup`] implementation: Pango for GTK labels
//! (the default), HTML, ANSI for terminals, or plain text.

use crate::error::SearchError;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// MARKUP DIALECTS
// =============================================================================

/// How highlighted spans are written and plain text is escaped.
pub trait Markup {
    /// Make raw text safe to embed in this markup.
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str>;

    /// Inserted before each highlighted span.
    fn open(&self) -> &str;

    /// Inserted after each highlighted span.
    fn close(&self) -> &str;
}

/// Pango markup with a yellow background, as used by GTK list views.
#[derive(Debug, Clone, Copy, Default)]
pub struct PangoMarkup;

impl Markup for PangoMarkup {
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        // & < > " ' all escaped, like g_markup_escape_text
        html_escape::encode_quoted_attribute(text)
    }

    fn open(&self) -> &str {
        r##"<span background="#FFFF66" foreground="#000000">"##
    }

    fn close(&self) -> &str {
        "</span>"
    }
}

/// HTML `<mark>` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        html_escape::encode_text(text)
    }

    fn open(&self) -> &str {
        "<mark>"
    }

    fn close(&self) -> &str {
        "</mark>"
    }
}

/// Bold black-on-yellow ANSI escapes. Control characters in the text are
/// dropped so record content cannot emit its own escape sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiMarkup;

impl Markup for AnsiMarkup {
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if text.chars().any(char::is_control) {
            Cow::Owned(text.chars().filter(|c| !c.is_control()).collect())
        } else {
            Cow::Borrowed(text)
        }
    }

    fn open(&self) -> &str {
        "\x1b[1;30;103m"
    }

    fn close(&self) -> &str {
        "\x1b[0m"
    }
}

/// No spans and no escaping: the text comes back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkup;

impl Markup for PlainMarkup {
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(text)
    }

    fn open(&self) -> &str {
        ""
    }

    fn close(&self) -> &str {
        ""
    }
}

/// Named markup dialects, for configuration and the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    #[default]
    Pango,
    Html,
    Ansi,
    Plain,
}

impl MarkupKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkupKind::Pango => "pango",
            MarkupKind::Html => "html",
            MarkupKind::Ansi => "ansi",
            MarkupKind::Plain => "plain",
        }
    }

    pub fn markup(self) -> &'static dyn Markup {
        match self {
            MarkupKind::Pango => &PangoMarkup,
            MarkupKind::Html => &HtmlMarkup,
            MarkupKind::Ansi => &AnsiMarkup,
            MarkupKind::Plain => &PlainMarkup,
        }
    }
}

impl FromStr for MarkupKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pango" => Ok(MarkupKind::Pango),
            "html" => Ok(MarkupKind::Html),
            "ansi" => Ok(MarkupKind::Ansi),
            "plain" | "text" => Ok(MarkupKind::Plain),
            _ => Err(SearchError::InvalidMarkup(s.to_string())),
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// HIGHLIGHTER
// =============================================================================

/// Compiled term matchers, reusable across many texts.
///
/// Build one per query and render every visible field with it.
#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<Regex>,
}

impl Highlighter {
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        let patterns = terms
            .iter()
            .map(AsRef::as_ref)
            .filter(|term| !term.is_empty())
            .filter_map(|term| {
                RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| debug!(term, %err, "skipping unhighlightable term"))
                    .ok()
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Byte ranges of `text` to highlight: sorted, non-overlapping, non-empty.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut hits: Vec<Range<usize>> = self
            .patterns
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| m.range()))
            .filter(|r| !r.is_empty())
            .collect();
        hits.sort_by_key(|r| (r.start, r.end));

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(hits.len());
        for hit in hits {
            match merged.last_mut() {
                Some(last) if hit.start < last.end => last.end = last.end.max(hit.end),
                _ => merged.push(hit),
            }
        }
        merged
    }

    /// Render `text` with every span wrapped in `markup`'s tags.
    pub fn render(&self, markup: &dyn Markup, text: &str) -> String {
        let spans = self.spans(text);
        if spans.is_empty() {
            return markup.escape(text).into_owned();
        }

        // INVARIANT: ESCAPE_EVERY_SEGMENT
        // All of `text` passes through `escape`, inside and outside spans.
        let mut out = String::with_capacity(text.len() + spans.len() * 48);
        let mut cursor = 0;
        for span in spans {
            out.push_str(&markup.escape(&text[cursor..span.start]));
            out.push_str(markup.open());
            out.push_str(&markup.escape(&text[span.start..span.end]));
            out.push_str(markup.close());
            cursor = span.end;
        }
        out.push_str(&markup.escape(&text[cursor..]));
        out
    }
}

/// Pango-highlight every case-insensitive occurrence of `terms` in `text`.
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    highlight_with(&PangoMarkup, text, terms)
}

/// [`highlight`] in any markup dialect.
pub fn highlight_with<S: AsRef<str>>(markup: &dyn Markup, text: &str, terms: &[S]) -> String {
    if text.is_empty() || terms.is_empty() {
        return markup.escape(text).into_owned();
    }
    Highlighter::new(terms).render(markup, text)
}
