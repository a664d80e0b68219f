// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Header written in front of CLOB payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClobHeaderFormat {
	/// 5-byte header carrying the character count.
	Modern,
	/// 2-byte header carrying the encoded byte count, as written before the
	/// 5-byte header was introduced.
	Legacy,
}

/// Configuration for value serialization and materialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
	/// Header format used for CLOB values
	pub clob_header: ClobHeaderFormat,
	/// Minimum buffer growth, in characters, when decoding a character value
	/// of unknown length
	pub char_grow_by: usize,
	/// Minimum buffer growth, in bytes, when decoding a binary value of
	/// unknown length
	pub long_grow_by: usize,
}

impl Default for FormatConfig {
	fn default() -> Self {
		Self {
			clob_header: ClobHeaderFormat::Modern,
			char_grow_by: 64,
			long_grow_by: 4096,
		}
	}
}

impl FormatConfig {
	pub fn legacy() -> Self {
		Self {
			clob_header: ClobHeaderFormat::Legacy,
			..Self::default()
		}
	}
}
