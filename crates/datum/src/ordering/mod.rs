// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! SQL comparisons under three-valued logic.
//!
//! Operands of different categories are resolved by [`Precedence`]: the
//! lower ranked operand converts toward the higher ranked category and the
//! pair is compared by that category's native order. A null operand yields
//! [`Truth::Unknown`].
//!
//! [`Precedence`]: crate::Precedence

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tracing::instrument;

mod collation;
mod convert;
mod native;

pub use collation::{BinaryCollator, Collator};
pub use native::{BINARY_PAD, CHAR_PAD, compare_bytes, compare_chars};

use crate::{
	Category, Truth, Value,
	error::{StreamError, TypeError},
	value::Family,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
	LessThan,
	Equals,
	LessOrEqual,
	GreaterThan,
	GreaterOrEqual,
}

impl ComparisonOp {
	/// The operator that gives the same result with the operands swapped.
	pub fn flip(self) -> ComparisonOp {
		match self {
			ComparisonOp::LessThan => ComparisonOp::GreaterThan,
			ComparisonOp::GreaterThan => ComparisonOp::LessThan,
			ComparisonOp::LessOrEqual => ComparisonOp::GreaterOrEqual,
			ComparisonOp::GreaterOrEqual => ComparisonOp::LessOrEqual,
			ComparisonOp::Equals => ComparisonOp::Equals,
		}
	}

	/// Whether `left.cmp(right) == ordering` satisfies `left <op> right`.
	pub fn accepts(self, ordering: Ordering) -> bool {
		match self {
			ComparisonOp::LessThan => ordering.is_lt(),
			ComparisonOp::Equals => ordering.is_eq(),
			ComparisonOp::LessOrEqual => ordering.is_le(),
			ComparisonOp::GreaterThan => ordering.is_gt(),
			ComparisonOp::GreaterOrEqual => ordering.is_ge(),
		}
	}

	pub fn symbol(&self) -> &'static str {
		match self {
			ComparisonOp::LessThan => "<",
			ComparisonOp::Equals => "=",
			ComparisonOp::LessOrEqual => "<=",
			ComparisonOp::GreaterThan => ">",
			ComparisonOp::GreaterOrEqual => ">=",
		}
	}
}

impl Display for ComparisonOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.symbol())
	}
}

/// Whether values of the two categories can be compared at all.
///
/// SECURE CHAR only compares with itself. Otherwise categories of one family
/// compare, and character data converts to numbers and booleans.
pub fn comparable(left: Category, right: Category) -> bool {
	if left == right {
		return true;
	}
	if left == Category::SecureChar || right == Category::SecureChar {
		return false;
	}
	match (left.family(), right.family()) {
		(l, r) if l == r => true,
		(Family::Character, Family::Numeric | Family::Boolean)
		| (Family::Numeric | Family::Boolean, Family::Character) => true,
		_ => false,
	}
}

fn ensure_comparable(left: &Value, right: &Value) -> crate::Result<()> {
	if !comparable(left.category(), right.category()) {
		crate::return_error!(TypeError::NotComparable {
			left: left.category(),
			right: right.category(),
		});
	}
	Ok(())
}

/// Orders two non-null operands of comparable categories.
fn compare_present(left: &Value, right: &Value, collator: &dyn Collator) -> crate::Result<Ordering> {
	for value in [left, right] {
		if value.is_stream() {
			crate::return_error!(StreamError::NotMaterialized {
				category: value.category().name().to_string(),
			});
		}
	}
	let target = match (left.category().precedence(), right.category().precedence()) {
		(Some(l), Some(r)) if l < r => right.category(),
		_ => left.category(),
	};

	let ordering = match target.family() {
		Family::Character => match (left.as_chars(), right.as_chars()) {
			(Some(l), Some(r)) => collator.compare(l, r),
			_ => unreachable_family(left, right)?,
		},
		Family::Binary => match (left.as_bytes(), right.as_bytes()) {
			(Some(l), Some(r)) => compare_bytes(l, r),
			_ => unreachable_family(left, right)?,
		},
		Family::Boolean => {
			let l = boolean_operand(left)?;
			let r = boolean_operand(right)?;
			l.cmp(&r)
		}
		Family::Numeric => {
			let l = numeric_operand(left, target)?;
			let r = numeric_operand(right, target)?;
			l.compare(r)
		}
	};
	Ok(ordering)
}

fn unreachable_family(left: &Value, right: &Value) -> crate::Result<Ordering> {
	crate::err!(TypeError::NotComparable {
		left: left.category(),
		right: right.category(),
	})
}

fn boolean_operand(value: &Value) -> crate::Result<bool> {
	if let Some(b) = value.as_bool() {
		return Ok(b);
	}
	match value.as_chars() {
		Some(chars) => convert::chars_to_bool(chars, value.category()),
		None => crate::err!(TypeError::TypeMismatch {
			expected: Category::Boolean,
			actual: value.repr().kind().to_string(),
		}),
	}
}

fn numeric_operand(value: &Value, target: Category) -> crate::Result<convert::Number> {
	if let Some(number) = convert::number(value) {
		return Ok(number);
	}
	match value.as_chars() {
		Some(chars) => convert::chars_to_number(chars, value.category(), target),
		None => crate::err!(TypeError::TypeMismatch {
			expected: target,
			actual: value.repr().kind().to_string(),
		}),
	}
}

/// Orders two operands, or `None` when either is null.
pub fn compare_values(left: &Value, right: &Value, collator: &dyn Collator) -> crate::Result<Option<Ordering>> {
	ensure_comparable(left, right)?;
	if left.is_null() || right.is_null() {
		return Ok(None);
	}
	compare_present(left, right, collator).map(Some)
}

/// Evaluates `left <op> right`.
#[instrument(name = "datum::ordering::compare", level = "trace", skip(left, right, collator), fields(left = %left.category(), right = %right.category()))]
pub fn compare(op: ComparisonOp, left: &Value, right: &Value, collator: &dyn Collator) -> crate::Result<Truth> {
	let outcome = compare_values(left, right, collator)?.map(|ordering| op.accepts(ordering)).unwrap_or(false);
	Ok(Truth::from_comparison(left, right, outcome))
}

/// Evaluates `left <> right`.
pub fn not_equals(left: &Value, right: &Value, collator: &dyn Collator) -> crate::Result<Truth> {
	compare(ComparisonOp::Equals, left, right, collator).map(Truth::not)
}

/// Total order for sorting and index keys: nulls sort high and equal each
/// other.
pub fn compare_ordered(left: &Value, right: &Value, collator: &dyn Collator) -> crate::Result<Ordering> {
	ensure_comparable(left, right)?;
	match (left.is_null(), right.is_null()) {
		(true, true) => Ok(Ordering::Equal),
		(true, false) => Ok(Ordering::Greater),
		(false, true) => Ok(Ordering::Less),
		(false, false) => compare_present(left, right, collator),
	}
}
