// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![no_main]

use libfuzzer_sys::fuzz_target;
use reifydb_datum::format::{
	CharStreamHeader, ClobStreamHeader, EOF_MARKER, MAX_CLOB_LENGTH, MAX_SHORT_LENGTH, ReadHeader, StreamHeaderGenerator,
	parse_char_header, parse_clob_header,
};

fuzz_target!(|length: i64| {
	let mut header = [0u8; 2];
	assert_eq!(CharStreamHeader.generate_into(&mut header, 0, length), 2);
	let mut marker = Vec::new();
	CharStreamHeader.write_eof_to(&mut marker, length).unwrap();

	if (1..=MAX_SHORT_LENGTH).contains(&length) {
		assert_eq!(parse_char_header(header), ReadHeader::Known(length as usize));
		assert!(marker.is_empty());
	} else {
		assert_eq!(header, [0, 0]);
		assert_eq!(marker.is_empty(), length == 0);
		if !marker.is_empty() {
			assert_eq!(marker, EOF_MARKER);
		}
	}

	let mut clob = [0u8; 5];
	ClobStreamHeader.generate_into(&mut clob, 0, length);
	let parsed = parse_clob_header(clob).unwrap();
	if (1..=MAX_CLOB_LENGTH).contains(&length) {
		assert_eq!(parsed, ReadHeader::Known(length as usize));
		assert!(!ClobStreamHeader.requires_eof(length));
	} else if length != 0 {
		assert_eq!(parsed, ReadHeader::Unknown);
		assert!(ClobStreamHeader.requires_eof(length));
	}

	if let Ok(revised) = CharStreamHeader.descriptor(-1).update_length(length, false) {
		assert_eq!(revised.header_length(), 2);
	}
});
