// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use reifydb_datum::{
	Category, FormatConfig,
	format::{read_value, write_value},
};

fuzz_target!(|data: &[u8]| {
	let Some((selector, stored)) = data.split_first() else {
		return;
	};
	let category = Category::ALL[*selector as usize % Category::ALL.len()];
	let config = if selector & 0x80 == 0 {
		FormatConfig::default()
	} else {
		FormatConfig::legacy()
	};

	// Decoding arbitrary bytes must fail cleanly; anything decoded must be
	// written back and decode to the same value.
	if let Ok(mut value) = read_value(category, &mut Cursor::new(stored), &config) {
		let mut rewritten = Vec::new();
		write_value(&mut value, &mut rewritten, &config).unwrap();
		let again = read_value(category, &mut Cursor::new(rewritten), &config).unwrap();
		assert_eq!(value, again);
	}
});
