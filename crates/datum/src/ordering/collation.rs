// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use super::native::compare_chars;

/// Total order over character values, supplied by the caller.
///
/// Locale-aware implementations live outside this crate and are passed
/// explicitly to every comparison.
pub trait Collator: Send + Sync {
	fn compare(&self, left: &[char], right: &[char]) -> Ordering;

	/// Whether `c` maps to exactly one collation element. `LIKE` matching
	/// can only work character by character when this holds.
	fn has_single_collation_element(&self, c: char) -> bool;
}

/// Code point order with SQL blank padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryCollator;

impl Collator for BinaryCollator {
	fn compare(&self, left: &[char], right: &[char]) -> Ordering {
		compare_chars(left, right)
	}

	fn has_single_collation_element(&self, _c: char) -> bool {
		true
	}
}
