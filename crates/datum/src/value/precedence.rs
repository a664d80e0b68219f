// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Rank deciding the direction of implicit conversion: when two
/// categories meet, the lower ranked operand converts to the higher one.
///
/// The ranks are curated, not derived. Gaps leave room for categories
/// that are not represented in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Precedence(pub u16);

impl Precedence {
	pub const CHAR: Precedence = Precedence(0);
	pub const VARCHAR: Precedence = Precedence(10);
	pub const LONG_VARCHAR: Precedence = Precedence(12);
	pub const CLOB: Precedence = Precedence(14);
	pub const SMALLINT: Precedence = Precedence(40);
	pub const INTEGER: Precedence = Precedence(50);
	pub const BIGINT: Precedence = Precedence(60);
	pub const DOUBLE: Precedence = Precedence(90);
	pub const BOOLEAN: Precedence = Precedence(130);
	pub const BIT: Precedence = Precedence(140);
	pub const VARBIT: Precedence = Precedence(150);
	pub const LONG_VARBIT: Precedence = Precedence(160);
	pub const BLOB: Precedence = Precedence(170);
}

impl Display for Precedence {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
