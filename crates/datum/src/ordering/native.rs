// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

/// Pad used when comparing binary values of different length.
pub const BINARY_PAD: u8 = 0x20;

/// Pad used when comparing character values of different length.
pub const CHAR_PAD: char = ' ';

/// Lexicographic order where the shorter operand behaves as if it were
/// padded with `pad` to the length of the longer one.
pub(crate) fn padded_cmp<T: Ord + Copy>(left: &[T], right: &[T], pad: T) -> Ordering {
	let common = left.len().min(right.len());
	match left[..common].cmp(&right[..common]) {
		Ordering::Equal => {}
		other => return other,
	}

	let tail = left[common..].iter().map(|unit| unit.cmp(&pad));
	let tail = tail.chain(right[common..].iter().map(|unit| pad.cmp(unit)));
	for ordering in tail {
		if ordering != Ordering::Equal {
			return ordering;
		}
	}
	Ordering::Equal
}

/// SQL character order: code point order with trailing blanks ignored.
pub fn compare_chars(left: &[char], right: &[char]) -> Ordering {
	padded_cmp(left, right, CHAR_PAD)
}

/// Binary order with the shorter operand padded with `0x20`.
pub fn compare_bytes(left: &[u8], right: &[u8]) -> Ordering {
	padded_cmp(left, right, BINARY_PAD)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chars(text: &str) -> Vec<char> {
		text.chars().collect()
	}

	#[test]
	fn test_trailing_blanks_are_ignored() {
		assert_eq!(compare_chars(&chars("ab"), &chars("ab   ")), Ordering::Equal);
		assert_eq!(compare_chars(&chars("ab  "), &chars("ab")), Ordering::Equal);
	}

	#[test]
	fn test_tail_compared_against_blank() {
		// '\t' sorts below the pad, so the longer string is smaller
		assert_eq!(compare_chars(&chars("ab\t"), &chars("ab")), Ordering::Less);
		assert_eq!(compare_chars(&chars("ab"), &chars("ab\t")), Ordering::Greater);
		assert_eq!(compare_chars(&chars("abc"), &chars("ab")), Ordering::Greater);
		assert_eq!(compare_chars(&chars("ab"), &chars("abc")), Ordering::Less);
	}

	#[test]
	fn test_prefix_decides_first() {
		assert_eq!(compare_chars(&chars("b"), &chars("abc")), Ordering::Greater);
		assert_eq!(compare_chars(&chars(""), &chars("")), Ordering::Equal);
	}

	#[test]
	fn test_bytes_pad_with_0x20() {
		assert_eq!(compare_bytes(&[1, 2], &[1, 2, 0x20]), Ordering::Equal);
		assert_eq!(compare_bytes(&[1, 2], &[1, 2, 0x00]), Ordering::Greater);
		assert_eq!(compare_bytes(&[1, 2], &[1, 2, 0x21]), Ordering::Less);
		assert_eq!(compare_bytes(&[0xFF], &[0x00, 0xFF]), Ordering::Greater);
	}
}
