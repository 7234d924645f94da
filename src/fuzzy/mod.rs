// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via matching-block similarity.
//!
//! Only the name field uses this, and only as a fallback when a term is not
//! a substring of the name. The measure is the Ratcliff/Obershelp ratio as
//! computed by difflib's `SequenceMatcher`, so scores line up with the
//! settings browser this crate grew out of.

mod sequence;

pub use sequence::*;
