// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reifydb_datum::{Category, TruncationPolicy, Value, normalize::normalize};

#[derive(Debug, Arbitrary)]
struct Input {
	target: u8,
	width: u16,
	text: String,
}

fuzz_target!(|input: Input| {
	let character = [
		Category::Char,
		Category::Varchar,
		Category::LongVarchar,
		Category::Clob,
		Category::SecureChar,
	];
	let category = character[input.target as usize % character.len()];
	let width = input.width as usize;
	let source = if category == Category::SecureChar {
		Value::secure(&input.text.chars().collect::<Vec<_>>())
	} else {
		Value::varchar(&input.text)
	};
	let length = source.length().unwrap_or(0);

	match normalize(category, width, source) {
		Ok(value) => {
			let result = value.length().unwrap_or(0);
			match category.policy() {
				Some(TruncationPolicy::PadAndCheck) => assert_eq!(result, width),
				Some(TruncationPolicy::TruncateAndWipe) => assert_eq!(result, length.min(width)),
				_ => assert!(result <= width.max(length) && (length <= width || result == width)),
			}
		}
		Err(err) => {
			assert_eq!(err.code(), "TRUNCATION_001");
			assert!(length > width);
		}
	}
});
