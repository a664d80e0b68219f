// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use zeroize::{DefaultIsZeroes, Zeroize};

/// Overwrites `buf` with zeros in place, keeping its length.
pub(crate) fn wipe<T: DefaultIsZeroes>(buf: &mut [T]) {
	buf.zeroize();
}

/// Splits `buf` at `width`, zeroes the tail and drops it.
pub(crate) fn truncate_and_wipe<T: DefaultIsZeroes>(buf: &mut Vec<T>, width: usize) {
	if buf.len() <= width {
		return;
	}
	buf[width..].zeroize();
	buf.truncate(width);
}

/// Copies `buf` and zeroes the original in place.
pub(crate) fn take_and_wipe<T: DefaultIsZeroes>(buf: &mut [T]) -> Vec<T> {
	let copy = buf.to_vec();
	buf.zeroize();
	copy
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_wipe_chars() {
		let mut buf = vec!['s', 'e', 'c'];
		wipe(&mut buf);
		assert_eq!(buf, vec!['\0'; 3]);
	}

	#[test]
	fn test_truncate_and_wipe_zeroes_tail_before_release() {
		let mut buf = vec!['a', 'b', 'c', 'd'];
		let tail_ptr = buf[2..].as_ptr();
		truncate_and_wipe(&mut buf, 2);
		assert_eq!(buf, vec!['a', 'b']);

		// Truncation keeps the allocation, so the wiped slots are still
		// observable through the spare capacity.
		assert!(buf.capacity() >= 4);
		let tail = unsafe { std::slice::from_raw_parts(tail_ptr, 2) };
		assert_eq!(tail, &['\0', '\0']);
	}

	#[test]
	fn test_take_and_wipe() {
		let mut buf = vec![1u8, 2, 3];
		let taken = take_and_wipe(&mut buf);
		assert_eq!(taken, vec![1, 2, 3]);
		assert_eq!(buf, vec![0, 0, 0]);
	}
}
