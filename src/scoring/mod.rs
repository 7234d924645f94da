// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! `core` turns a record and a list of terms into one raw score. `ranking`
//! orders scored matches by the requested key and turns raw scores into the
//! 0-100 percentages shown next to each result.

mod core;
pub mod ranking;

pub use self::core::*;
