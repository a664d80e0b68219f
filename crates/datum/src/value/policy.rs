// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// How a category reacts when a value does not match the declared width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruncationPolicy {
	/// Pad short values to the width; long values may lose only pad units.
	PadAndCheck,
	/// Leave short values alone; long values may lose only pad units.
	CheckOnly,
	/// Leave short values alone; long values are always rejected.
	Forbidden,
	/// Keep the leading units of long values and zero the discarded tail.
	TruncateAndWipe,
}

impl TruncationPolicy {
	pub fn pads(&self) -> bool {
		matches!(self, TruncationPolicy::PadAndCheck)
	}
}
