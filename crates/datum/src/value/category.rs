// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{Precedence, TruncationPolicy};

/// Maximum widths of the bounded character and binary categories.
pub const CHAR_MAX_WIDTH: usize = 254;
pub const VARCHAR_MAX_WIDTH: usize = 32_672;
pub const LONG_VARCHAR_MAX_WIDTH: usize = 32_700;
pub const LOB_MAX_WIDTH: usize = i32::MAX as usize;

/// SQL value categories handled by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
	/// Fixed-width, blank padded character string
	Char,
	/// Variable-width character string
	Varchar,
	/// Variable-width character string that is never truncated
	LongVarchar,
	/// Character large object
	Clob,
	/// Fixed-width, pad filled binary string (`CHAR FOR BIT DATA`)
	Bit,
	/// Variable-width binary string
	Varbit,
	/// Variable-width binary string that is never truncated
	LongVarbit,
	/// Binary large object
	Blob,
	Boolean,
	SmallInt,
	Integer,
	BigInt,
	Double,
	/// Character data that must never leak, e.g. credentials. Excluded from
	/// implicit conversion and comparison with other categories.
	SecureChar,
}

/// Broad grouping of categories sharing a representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
	Character,
	Binary,
	Boolean,
	Numeric,
}

impl Category {
	pub const ALL: [Category; 14] = [
		Category::Char,
		Category::Varchar,
		Category::LongVarchar,
		Category::Clob,
		Category::Bit,
		Category::Varbit,
		Category::LongVarbit,
		Category::Blob,
		Category::Boolean,
		Category::SmallInt,
		Category::Integer,
		Category::BigInt,
		Category::Double,
		Category::SecureChar,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Category::Char => "CHAR",
			Category::Varchar => "VARCHAR",
			Category::LongVarchar => "LONG VARCHAR",
			Category::Clob => "CLOB",
			Category::Bit => "CHAR () FOR BIT DATA",
			Category::Varbit => "VARCHAR () FOR BIT DATA",
			Category::LongVarbit => "LONG VARCHAR FOR BIT DATA",
			Category::Blob => "BLOB",
			Category::Boolean => "BOOLEAN",
			Category::SmallInt => "SMALLINT",
			Category::Integer => "INTEGER",
			Category::BigInt => "BIGINT",
			Category::Double => "DOUBLE",
			Category::SecureChar => "SECURE CHAR",
		}
	}

	pub fn family(&self) -> Family {
		match self {
			Category::Char
			| Category::Varchar
			| Category::LongVarchar
			| Category::Clob
			| Category::SecureChar => Family::Character,
			Category::Bit | Category::Varbit | Category::LongVarbit | Category::Blob => Family::Binary,
			Category::Boolean => Family::Boolean,
			Category::SmallInt | Category::Integer | Category::BigInt | Category::Double => Family::Numeric,
		}
	}

	pub fn policy(&self) -> Option<TruncationPolicy> {
		match self {
			Category::Char | Category::Bit => Some(TruncationPolicy::PadAndCheck),
			Category::Varchar | Category::Varbit | Category::Clob => Some(TruncationPolicy::CheckOnly),
			Category::LongVarchar | Category::LongVarbit | Category::Blob => Some(TruncationPolicy::Forbidden),
			Category::SecureChar => Some(TruncationPolicy::TruncateAndWipe),
			Category::Boolean
			| Category::SmallInt
			| Category::Integer
			| Category::BigInt
			| Category::Double => None,
		}
	}

	pub fn precedence(&self) -> Option<Precedence> {
		match self {
			Category::Char => Some(Precedence::CHAR),
			Category::Varchar => Some(Precedence::VARCHAR),
			Category::LongVarchar => Some(Precedence::LONG_VARCHAR),
			Category::Clob => Some(Precedence::CLOB),
			Category::SmallInt => Some(Precedence::SMALLINT),
			Category::Integer => Some(Precedence::INTEGER),
			Category::BigInt => Some(Precedence::BIGINT),
			Category::Double => Some(Precedence::DOUBLE),
			Category::Boolean => Some(Precedence::BOOLEAN),
			Category::Bit => Some(Precedence::BIT),
			Category::Varbit => Some(Precedence::VARBIT),
			Category::LongVarbit => Some(Precedence::LONG_VARBIT),
			Category::Blob => Some(Precedence::BLOB),
			Category::SecureChar => None,
		}
	}

	/// The unit a fixed-width value is padded with, and which may be
	/// discarded on truncation. Binaries pad with `0x20`.
	pub fn pad(&self) -> Option<char> {
		match self.family() {
			Family::Character | Family::Binary => Some(' '),
			Family::Boolean | Family::Numeric => None,
		}
	}

	/// Absolute maximum width: characters for the character family, bytes
	/// otherwise.
	pub fn max_width(&self) -> usize {
		match self {
			Category::Char | Category::Bit => CHAR_MAX_WIDTH,
			Category::Varchar | Category::Varbit | Category::SecureChar => VARCHAR_MAX_WIDTH,
			Category::LongVarchar | Category::LongVarbit => LONG_VARCHAR_MAX_WIDTH,
			Category::Clob | Category::Blob => LOB_MAX_WIDTH,
			Category::Boolean => 1,
			Category::SmallInt => 2,
			Category::Integer => 4,
			Category::BigInt | Category::Double => 8,
		}
	}

	/// The next wider category of the same family, used when a
	/// concatenation no longer fits.
	pub fn widened(&self) -> Option<Category> {
		match self {
			Category::Char => Some(Category::Varchar),
			Category::Varchar => Some(Category::LongVarchar),
			Category::Bit => Some(Category::Varbit),
			Category::Varbit => Some(Category::LongVarbit),
			_ => None,
		}
	}

	pub fn is_character(&self) -> bool {
		self.family() == Family::Character
	}

	pub fn is_binary(&self) -> bool {
		self.family() == Family::Binary
	}
}

impl Display for Category {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
