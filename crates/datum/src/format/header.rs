// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::io::{self, Write};

use tracing::debug;

use super::descriptor::{HeaderDescriptor, Shift};

/// Terminates a payload whose length could not be encoded in its header.
///
/// The sequence is never valid modified UTF-8, so it cannot be confused with
/// character data.
pub const EOF_MARKER: [u8; 3] = [0xE0, 0x00, 0x00];

/// Largest header any generator in this module writes.
pub const MAX_HEADER_LENGTH: usize = 5;

/// Largest length the 2-byte header encodes exactly.
pub const MAX_SHORT_LENGTH: i64 = 0xFFFF;

/// Largest character count the CLOB header encodes exactly.
pub const MAX_CLOB_LENGTH: i64 = u32::MAX as i64;

/// Produces the header in front of a streamed character value.
///
/// Generators never fail on a length: negative lengths mean "unknown", and
/// lengths the header cannot hold are resolved by the EOF marker. Writers that
/// only learn the length after the payload was streamed depend on this.
pub trait StreamHeaderGenerator {
	/// Whether `length` counts characters (`true`) or encoded bytes.
	fn expects_char_count(&self) -> bool;

	fn max_header_length(&self) -> usize;

	/// Writes the header for `length` into `buffer` at `offset` and returns
	/// the number of bytes written.
	fn generate_into(&self, buffer: &mut [u8], offset: usize, length: i64) -> usize;

	/// Whether a payload of `length` must be followed by [`EOF_MARKER`].
	fn requires_eof(&self, length: i64) -> bool;

	/// Per-byte recipe used to revise a header once the length is known.
	fn recipe(&self) -> Vec<Shift>;

	/// Whether the header can carry `length` exactly.
	fn can_encode(&self, length: i64) -> bool {
		length >= 0 && !self.requires_eof(length)
	}

	fn generate_to(&self, out: &mut dyn Write, length: i64) -> io::Result<usize> {
		let mut buffer = [0u8; MAX_HEADER_LENGTH];
		let written = self.generate_into(&mut buffer, 0, length);
		out.write_all(&buffer[..written])?;
		Ok(written)
	}

	fn write_eof_into(&self, buffer: &mut [u8], offset: usize, length: i64) -> usize {
		if !self.requires_eof(length) {
			return 0;
		}
		buffer[offset..offset + EOF_MARKER.len()].copy_from_slice(&EOF_MARKER);
		debug!(length, "wrote eof marker");
		EOF_MARKER.len()
	}

	fn write_eof_to(&self, out: &mut dyn Write, length: i64) -> io::Result<usize> {
		if !self.requires_eof(length) {
			return Ok(0);
		}
		out.write_all(&EOF_MARKER)?;
		debug!(length, "wrote eof marker");
		Ok(EOF_MARKER.len())
	}

	/// An updatable descriptor of the header for `length`.
	fn descriptor(&self, length: i64) -> HeaderDescriptor {
		let mut buffer = [0u8; MAX_HEADER_LENGTH];
		let written = self.generate_into(&mut buffer, 0, length);
		HeaderDescriptor::with_recipe(
			buffer[..written].to_vec(),
			self.recipe(),
			self.expects_char_count(),
			self.requires_eof(length),
		)
	}
}

/// The 2-byte header holding the modified UTF-8 byte length of the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharStreamHeader;

impl StreamHeaderGenerator for CharStreamHeader {
	fn expects_char_count(&self) -> bool {
		false
	}

	fn max_header_length(&self) -> usize {
		2
	}

	fn generate_into(&self, buffer: &mut [u8], offset: usize, length: i64) -> usize {
		let (high, low) = if (1..=MAX_SHORT_LENGTH).contains(&length) {
			((length >> 8) as u8, length as u8)
		} else {
			(0x00, 0x00)
		};
		buffer[offset] = high;
		buffer[offset + 1] = low;
		2
	}

	fn requires_eof(&self, length: i64) -> bool {
		length < 0 || length > MAX_SHORT_LENGTH
	}

	fn recipe(&self) -> Vec<Shift> {
		vec![Shift::Bits(8), Shift::Bits(0)]
	}
}

/// The 5-byte CLOB header holding the character count. The middle byte is a
/// format marker and never changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClobStreamHeader;

const CLOB_MARKER: u8 = 0xF0;

impl StreamHeaderGenerator for ClobStreamHeader {
	fn expects_char_count(&self) -> bool {
		true
	}

	fn max_header_length(&self) -> usize {
		5
	}

	fn generate_into(&self, buffer: &mut [u8], offset: usize, length: i64) -> usize {
		let length = if self.requires_eof(length) {
			0
		} else {
			length
		};
		buffer[offset] = (length >> 24) as u8;
		buffer[offset + 1] = (length >> 16) as u8;
		buffer[offset + 2] = CLOB_MARKER;
		buffer[offset + 3] = (length >> 8) as u8;
		buffer[offset + 4] = length as u8;
		5
	}

	fn requires_eof(&self, length: i64) -> bool {
		length < 0 || length > MAX_CLOB_LENGTH
	}

	fn recipe(&self) -> Vec<Shift> {
		vec![Shift::Bits(24), Shift::Bits(16), Shift::Fixed, Shift::Bits(8), Shift::Bits(0)]
	}
}

/// A header read back from a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadHeader {
	/// Exact length in bytes (2-byte header) or characters (CLOB header).
	Known(usize),
	/// Read until the EOF marker or the end of the stream.
	Unknown,
}

/// Parses a 2-byte header. Zero means unknown; a true empty value has no
/// payload, so reading to the end yields nothing.
pub fn parse_char_header(bytes: [u8; 2]) -> ReadHeader {
	match u16::from_be_bytes(bytes) {
		0 => ReadHeader::Unknown,
		n => ReadHeader::Known(n as usize),
	}
}

/// Parses a 5-byte CLOB header. Returns `None` if the marker byte is wrong.
pub fn parse_clob_header(bytes: [u8; 5]) -> Option<ReadHeader> {
	if bytes[2] != CLOB_MARKER {
		return None;
	}
	let length = u32::from_be_bytes([bytes[0], bytes[1], bytes[3], bytes[4]]) as usize;
	Some(match length {
		0 => ReadHeader::Unknown,
		n => ReadHeader::Known(n),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn header(length: i64) -> ([u8; 2], Vec<u8>) {
		let mut buffer = [0u8; 2];
		assert_eq!(CharStreamHeader.generate_into(&mut buffer, 0, length), 2);
		let mut eof = Vec::new();
		CharStreamHeader.write_eof_to(&mut eof, length).unwrap();
		(buffer, eof)
	}

	#[test]
	fn test_representable_lengths_round_trip_without_marker() {
		for length in [1i64, 2, 255, 256, 4096, 65534, 65535] {
			let (bytes, eof) = header(length);
			assert_eq!(parse_char_header(bytes), ReadHeader::Known(length as usize));
			assert!(eof.is_empty(), "unexpected marker for {length}");
		}
	}

	#[test]
	fn test_zero_length_has_no_marker() {
		let (bytes, eof) = header(0);
		assert_eq!(bytes, [0, 0]);
		assert!(eof.is_empty());
	}

	#[test]
	fn test_unknown_and_overflow_lengths_get_marker() {
		for length in [-1i64, -65536, 65536, 70000, i64::MAX] {
			let (bytes, eof) = header(length);
			assert_eq!(bytes, [0, 0]);
			assert_eq!(eof, EOF_MARKER.to_vec(), "missing marker for {length}");
		}
	}

	#[test]
	fn test_buffer_and_sink_agree() {
		for length in [-5i64, 0, 1, 300, 65535, 65536] {
			let mut buffer = [0xFFu8; 4];
			CharStreamHeader.generate_into(&mut buffer, 1, length);
			let mut sink = Vec::new();
			CharStreamHeader.generate_to(&mut sink, length).unwrap();
			assert_eq!(&buffer[1..3], sink.as_slice());

			let mut eof_buffer = [0u8; 3];
			let n = CharStreamHeader.write_eof_into(&mut eof_buffer, 0, length);
			let mut eof_sink = Vec::new();
			CharStreamHeader.write_eof_to(&mut eof_sink, length).unwrap();
			assert_eq!(&eof_buffer[..n], eof_sink.as_slice());
		}
	}

	#[test]
	fn test_clob_header_layout() {
		let mut buffer = [0u8; 5];
		assert_eq!(ClobStreamHeader.generate_into(&mut buffer, 0, 0x0001_0203), 5);
		assert_eq!(buffer, [0x00, 0x01, 0xF0, 0x02, 0x03]);
		assert_eq!(parse_clob_header(buffer), Some(ReadHeader::Known(0x0001_0203)));

		ClobStreamHeader.generate_into(&mut buffer, 0, -1);
		assert_eq!(buffer, [0, 0, 0xF0, 0, 0]);
		assert_eq!(parse_clob_header(buffer), Some(ReadHeader::Unknown));

		assert!(ClobStreamHeader.requires_eof(-1));
		assert!(!ClobStreamHeader.requires_eof(0));
		assert!(!ClobStreamHeader.requires_eof(1 << 20));
		assert_eq!(parse_clob_header([0, 0, 0, 0, 0]), None);
	}

	#[test]
	fn test_clob_length_beyond_u32_gets_marker() {
		let too_long = MAX_CLOB_LENGTH + 6;
		let mut buffer = [0xFFu8; 5];
		ClobStreamHeader.generate_into(&mut buffer, 0, too_long);
		assert_eq!(buffer, [0, 0, 0xF0, 0, 0]);
		assert!(ClobStreamHeader.requires_eof(too_long));
		assert!(!ClobStreamHeader.can_encode(too_long));

		let mut eof = Vec::new();
		assert_eq!(ClobStreamHeader.write_eof_to(&mut eof, too_long).unwrap(), 3);
		assert_eq!(eof, EOF_MARKER.to_vec());

		ClobStreamHeader.generate_into(&mut buffer, 0, MAX_CLOB_LENGTH);
		assert_eq!(buffer, [0xFF, 0xFF, 0xF0, 0xFF, 0xFF]);
		assert!(ClobStreamHeader.can_encode(MAX_CLOB_LENGTH));
	}

	#[test]
	fn test_descriptor_revision() {
		let provisional = CharStreamHeader.descriptor(-1);
		assert_eq!(provisional.bytes(), &[0, 0]);
		assert!(provisional.writes_eof());
		assert!(!provisional.is_char_count());

		let revised = provisional.update_length(0x1234, false).unwrap();
		assert_eq!(revised.bytes(), &[0x12, 0x34]);

		let clob = ClobStreamHeader.descriptor(-1).update_length(10, false).unwrap();
		assert_eq!(clob.bytes(), &[0, 0, 0xF0, 0, 10]);
		assert!(clob.is_char_count());
	}

	#[test]
	fn test_max_header_length() {
		assert_eq!(CharStreamHeader.max_header_length(), 2);
		assert_eq!(ClobStreamHeader.max_header_length(), 5);
	}
}
