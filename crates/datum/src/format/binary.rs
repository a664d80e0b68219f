// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Length prefix of binary payloads.
//!
//! | Prefix | Length |
//! |--------|--------|
//! | `0x80 \| n` | `n <= 31` |
//! | `0xA0`, u16 | `n <= 65535` |
//! | `0xC0`, u32 | otherwise |
//!
//! A first byte with the top bit clear starts the legacy prefix: a 4-byte
//! big-endian bit count.

use std::io::{self, ErrorKind, Read, Write};

use crate::error::StreamError;

const SHORT: u8 = 0x80;
const MEDIUM: u8 = 0xA0;
const LONG: u8 = 0xC0;

/// Writes the prefix for `length` and returns the number of bytes written.
pub fn write_length(out: &mut dyn Write, length: usize) -> io::Result<usize> {
	if length <= 31 {
		out.write_all(&[SHORT | length as u8])?;
		Ok(1)
	} else if length <= 0xFFFF {
		out.write_all(&[MEDIUM])?;
		out.write_all(&(length as u16).to_be_bytes())?;
		Ok(3)
	} else {
		let length = u32::try_from(length).map_err(|_| io::Error::new(ErrorKind::InvalidInput, "binary value too long"))?;
		out.write_all(&[LONG])?;
		out.write_all(&length.to_be_bytes())?;
		Ok(5)
	}
}

/// Reads a prefix. Zero means the payload runs to the end of the stream.
pub fn read_length(input: &mut dyn Read) -> crate::Result<usize> {
	let mut first = [0u8; 1];
	input.read_exact(&mut first)?;
	let first = first[0];

	if first & 0x80 == 0 {
		let mut rest = [0u8; 3];
		input.read_exact(&mut rest)?;
		let bits = u32::from_be_bytes([first, rest[0], rest[1], rest[2]]) as usize;
		return Ok(bits.div_ceil(8));
	}

	match first {
		LONG => {
			let mut bytes = [0u8; 4];
			input.read_exact(&mut bytes)?;
			Ok(u32::from_be_bytes(bytes) as usize)
		}
		MEDIUM => {
			let mut bytes = [0u8; 2];
			input.read_exact(&mut bytes)?;
			Ok(u16::from_be_bytes(bytes) as usize)
		}
		_ => Ok((first & 0x1F) as usize),
	}
}

/// Reads the payload announced by a prefix of `length`.
pub fn read_payload(input: &mut dyn Read, length: usize, grow_by: usize) -> crate::Result<Vec<u8>> {
	if length == 0 {
		let mut bytes = Vec::with_capacity(grow_by);
		input.read_to_end(&mut bytes)?;
		return Ok(bytes);
	}

	let mut bytes = Vec::with_capacity(length.min(grow_by.max(1) * 16));
	let read = Read::take(&mut *input, length as u64).read_to_end(&mut bytes)?;
	if read != length {
		crate::return_error!(StreamError::InexactLength {
			expected: length,
			actual: read,
		});
	}
	Ok(bytes)
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn prefix(length: usize) -> Vec<u8> {
		let mut out = Vec::new();
		let written = write_length(&mut out, length).unwrap();
		assert_eq!(written, out.len());
		out
	}

	#[test]
	fn test_prefix_forms() {
		assert_eq!(prefix(0), vec![0x80]);
		assert_eq!(prefix(31), vec![0x9F]);
		assert_eq!(prefix(32), vec![0xA0, 0x00, 0x20]);
		assert_eq!(prefix(65535), vec![0xA0, 0xFF, 0xFF]);
		assert_eq!(prefix(65536), vec![0xC0, 0x00, 0x01, 0x00, 0x00]);
	}

	#[test]
	fn test_read_prefix() {
		for length in [1usize, 31, 32, 1000, 65535, 65536, 1 << 24] {
			let bytes = prefix(length);
			assert_eq!(read_length(&mut Cursor::new(bytes)).unwrap(), length);
		}
	}

	#[test]
	fn test_legacy_bit_count_rounds_up() {
		assert_eq!(read_length(&mut Cursor::new(vec![0, 0, 0, 16])).unwrap(), 2);
		assert_eq!(read_length(&mut Cursor::new(vec![0, 0, 0, 17])).unwrap(), 3);
	}

	#[test]
	fn test_zero_reads_to_end() {
		let mut input = Cursor::new(vec![1u8, 2, 3]);
		assert_eq!(read_payload(&mut input, 0, 16).unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn test_short_payload() {
		let err = read_payload(&mut Cursor::new(vec![1u8, 2]), 4, 16).unwrap_err();
		assert_eq!(err.code(), "STREAM_007");
	}
}
