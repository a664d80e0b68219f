// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Modified UTF-8 over UTF-16 code units.
//!
//! U+0001..=U+007F take one byte, U+0000 and U+0080..=U+07FF two bytes and
//! every other code unit three bytes. Supplementary characters are written as
//! two encoded surrogates.

use std::io::{self, ErrorKind, Read, Write};

use tracing::debug;

use super::header::EOF_MARKER;
use crate::error::StreamError;

const WRITE_CHUNK: usize = 8 * 1024;

/// How far a decoder may read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
	/// Exactly this many encoded bytes.
	Bytes(usize),
	/// Exactly this many UTF-16 code units.
	Units(usize),
	/// Until the EOF marker or the end of the stream.
	Unbounded,
}

fn unit_length(unit: u16) -> usize {
	match unit {
		0x0001..=0x007F => 1,
		0x0000 | 0x0080..=0x07FF => 2,
		_ => 3,
	}
}

fn push_unit(unit: u16, out: &mut Vec<u8>) {
	match unit_length(unit) {
		1 => out.push(unit as u8),
		2 => {
			out.push(0xC0 | ((unit >> 6) & 0x1F) as u8);
			out.push(0x80 | (unit & 0x3F) as u8);
		}
		_ => {
			out.push(0xE0 | ((unit >> 12) & 0x0F) as u8);
			out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
			out.push(0x80 | (unit & 0x3F) as u8);
		}
	}
}

/// Encoded length of `chars` in bytes.
pub fn utf_length(chars: &[char]) -> usize {
	let mut units = [0u16; 2];
	chars.iter().map(|c| c.encode_utf16(&mut units).iter().map(|u| unit_length(*u)).sum::<usize>()).sum()
}

/// Number of UTF-16 code units in `chars`.
pub fn utf16_length(chars: &[char]) -> usize {
	chars.iter().map(|c| c.len_utf16()).sum()
}

pub fn encode_into(chars: &[char], out: &mut Vec<u8>) {
	let mut units = [0u16; 2];
	for c in chars {
		for unit in c.encode_utf16(&mut units) {
			push_unit(*unit, out);
		}
	}
}

/// Streams the encoding of `chars` to `out` and returns the bytes written.
pub fn write_chars(chars: &[char], out: &mut dyn Write) -> io::Result<u64> {
	let mut buffer = Vec::with_capacity(WRITE_CHUNK + 3);
	let mut written = 0u64;
	let mut units = [0u16; 2];
	for c in chars {
		for unit in c.encode_utf16(&mut units) {
			push_unit(*unit, &mut buffer);
		}
		if buffer.len() >= WRITE_CHUNK {
			out.write_all(&buffer)?;
			written += buffer.len() as u64;
			buffer.clear();
		}
	}
	out.write_all(&buffer)?;
	written += buffer.len() as u64;
	Ok(written)
}

fn read_byte(input: &mut dyn Read) -> io::Result<Option<u8>> {
	let mut byte = [0u8; 1];
	loop {
		match input.read(&mut byte) {
			Ok(0) => return Ok(None),
			Ok(_) => return Ok(Some(byte[0])),
			Err(err) if err.kind() == ErrorKind::Interrupted => continue,
			Err(err) => return Err(err),
		}
	}
}

fn continuation(byte: u8, offset: usize) -> crate::Result<u16> {
	if byte & 0xC0 != 0x80 {
		crate::return_error!(StreamError::MalformedUtf8 {
			offset,
			reason: format!("expected a continuation byte, found 0x{:02x}", byte),
		});
	}
	Ok((byte & 0x3F) as u16)
}

fn sequence_past_limit(offset: usize) -> crate::Error {
	crate::error!(StreamError::MalformedUtf8 {
		offset,
		reason: "sequence runs past the declared length".to_string(),
	})
}

/// Decodes characters from `input` up to `limit`. `grow_by` is the minimum
/// buffer growth while the final length is unknown.
pub fn decode(input: &mut dyn Read, limit: Limit, grow_by: usize) -> crate::Result<Vec<char>> {
	let initial = match limit {
		Limit::Bytes(n) | Limit::Units(n) => n.min(u16::MAX as usize),
		Limit::Unbounded => grow_by,
	};
	let mut units: Vec<u16> = Vec::with_capacity(initial);
	let mut offset = 0usize;

	loop {
		match limit {
			Limit::Bytes(n) if offset >= n => break,
			Limit::Units(n) if units.len() >= n => break,
			_ => {}
		}

		let Some(first) = read_byte(input)? else {
			if limit == Limit::Unbounded {
				break;
			}
			return Err(io::Error::from(ErrorKind::UnexpectedEof).into());
		};

		if units.len() == units.capacity() {
			units.reserve(grow_by.max(1));
		}

		let unit = if first & 0x80 == 0x00 {
			offset += 1;
			first as u16
		} else if first & 0xE0 == 0xC0 {
			if matches!(limit, Limit::Bytes(n) if offset + 2 > n) {
				return Err(sequence_past_limit(offset));
			}
			let mut rest = [0u8; 1];
			input.read_exact(&mut rest)?;
			let unit = ((first & 0x1F) as u16) << 6 | continuation(rest[0], offset + 1)?;
			offset += 2;
			unit
		} else if first & 0xF0 == 0xE0 {
			if matches!(limit, Limit::Bytes(n) if offset + 3 > n) {
				return Err(sequence_past_limit(offset));
			}
			let mut rest = [0u8; 2];
			input.read_exact(&mut rest)?;
			if limit == Limit::Unbounded && [first, rest[0], rest[1]] == EOF_MARKER {
				debug!(offset, "read eof marker");
				break;
			}
			let unit = ((first & 0x0F) as u16) << 12
				| continuation(rest[0], offset + 1)? << 6
				| continuation(rest[1], offset + 2)?;
			offset += 3;
			unit
		} else {
			crate::return_error!(StreamError::MalformedUtf8 {
				offset,
				reason: format!("invalid leading byte 0x{:02x}", first),
			});
		};
		units.push(unit);
	}

	from_units(&units)
}

fn from_units(units: &[u16]) -> crate::Result<Vec<char>> {
	let mut chars = Vec::with_capacity(units.len());
	let mut index = 0usize;
	for decoded in char::decode_utf16(units.iter().copied()) {
		match decoded {
			Ok(c) => {
				index += c.len_utf16();
				chars.push(c);
			}
			Err(err) => {
				crate::return_error!(StreamError::MalformedUtf8 {
					offset: index,
					reason: format!("unpaired surrogate 0x{:04x}", err.unpaired_surrogate()),
				});
			}
		}
	}
	Ok(chars)
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn encode(text: &str) -> Vec<u8> {
		let chars: Vec<char> = text.chars().collect();
		let mut out = Vec::new();
		encode_into(&chars, &mut out);
		assert_eq!(out.len(), utf_length(&chars));
		out
	}

	#[test]
	fn test_encoding_widths() {
		assert_eq!(encode("A"), vec![0x41]);
		assert_eq!(encode("\0"), vec![0xC0, 0x80]);
		assert_eq!(encode("\u{e9}"), vec![0xC3, 0xA9]);
		assert_eq!(encode("\u{20ac}"), vec![0xE2, 0x82, 0xAC]);
		// surrogate pair, 3 bytes each
		assert_eq!(encode("\u{1F600}").len(), 6);
	}

	#[test]
	fn test_decode_known_length() {
		let text = "h\u{e9}llo \u{20ac} \u{1F600}\0";
		let bytes = encode(text);
		let chars = decode(&mut Cursor::new(bytes.clone()), Limit::Bytes(bytes.len()), 64).unwrap();
		assert_eq!(chars.iter().collect::<String>(), text);
	}

	#[test]
	fn test_decode_stops_at_marker() {
		let mut bytes = encode("abc");
		bytes.extend_from_slice(&EOF_MARKER);
		bytes.extend_from_slice(b"trailing");
		let mut input = Cursor::new(bytes);
		let chars = decode(&mut input, Limit::Unbounded, 1).unwrap();
		assert_eq!(chars, vec!['a', 'b', 'c']);
		assert_eq!(input.position(), 6);
	}

	#[test]
	fn test_decode_unbounded_without_marker_reads_to_end() {
		let bytes = encode("long value");
		let chars = decode(&mut Cursor::new(bytes), Limit::Unbounded, 2).unwrap();
		assert_eq!(chars.iter().collect::<String>(), "long value");
	}

	#[test]
	fn test_decode_units() {
		let bytes = encode("a\u{1F600}bc");
		let chars = decode(&mut Cursor::new(bytes), Limit::Units(4), 64).unwrap();
		assert_eq!(chars, vec!['a', '\u{1F600}', 'b']);
	}

	#[test]
	fn test_known_length_premature_end() {
		let bytes = encode("ab");
		let err = decode(&mut Cursor::new(bytes), Limit::Bytes(5), 64).unwrap_err();
		assert_eq!(err.code(), "STREAM_001");
	}

	#[test]
	fn test_malformed_input() {
		let err = decode(&mut Cursor::new(vec![0x80]), Limit::Bytes(1), 64).unwrap_err();
		assert_eq!(err.code(), "STREAM_005");

		let err = decode(&mut Cursor::new(vec![0xC3, 0x41]), Limit::Bytes(2), 64).unwrap_err();
		assert_eq!(err.code(), "STREAM_005");

		// lone high surrogate
		let err = decode(&mut Cursor::new(vec![0xED, 0xA0, 0x80]), Limit::Bytes(3), 64).unwrap_err();
		assert_eq!(err.code(), "STREAM_005");

		// two byte sequence crossing the declared length
		let err = decode(&mut Cursor::new(vec![0x41, 0xC3, 0xA9]), Limit::Bytes(2), 64).unwrap_err();
		assert_eq!(err.code(), "STREAM_005");
	}

	#[test]
	fn test_write_chars_matches_encode_into() {
		let chars: Vec<char> = "x\u{e9}".repeat(5000).chars().collect();
		let mut streamed = Vec::new();
		let written = write_chars(&chars, &mut streamed).unwrap();
		let mut buffered = Vec::new();
		encode_into(&chars, &mut buffered);
		assert_eq!(streamed, buffered);
		assert_eq!(written as usize, utf_length(&chars));
	}
}
