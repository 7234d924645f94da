// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence similarity from matching blocks.
//!
//! The ratio is `2 * M / (len(a) + len(b))` where `M` is the number of
//! characters covered by matching blocks. Blocks are found recursively: take
//! the longest common run, then recurse on the pieces to its left and right.
//! That makes the measure order-sensitive in a way edit distance is not -
//! "mose" vs "mouse" scores 0.89, "esom" vs "mouse" scores far lower.
//!
//! Lengths are in characters, not bytes.
//!
//! # Autojunk
//!
//! When `b` has 200 or more characters, characters occurring more than
//! `len(b) / 100 + 1` times are "popular" and never seed a match (they can
//! still extend one). Names are short, so in practice this never fires, but
//! it keeps ratios identical to difflib for long strings.

use crate::contracts::check_ratio_bounds;
use std::collections::HashMap;

/// `b` lengths at or above this enable the popular-character heuristic.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity of two strings in `[0.0, 1.0]`.
///
/// Two empty strings are identical (1.0). One empty string against a
/// non-empty one shares nothing (0.0).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = SequenceMatcher::new(&a, &b).matching_chars();
    let ratio = 2.0 * matched as f64 / total as f64;
    check_ratio_bounds(ratio);
    ratio
}

/// A run of `size` equal characters at `a[a_start..]` and `b[b_start..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Longest-common-run matcher over two character sequences.
pub struct SequenceMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions of each character in `b`, ascending. Popular characters removed.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'s> SequenceMatcher<'s> {
    pub fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest matching run within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the run that starts earliest in `a`, then earliest in `b`.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // j2len[j] = length of the longest run ending at a[i-1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = prev + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular characters never seed a run but may still extend one.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// All matching blocks, ordered by position.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.size);
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|b| (b.a_start, b.b_start));
        blocks
    }

    /// Total characters covered by matching blocks.
    pub fn matching_chars(&self) -> usize {
        self.matching_blocks().iter().map(|b| b.size).sum()
    }
}
