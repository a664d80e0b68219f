// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use crate::{
	Category, Repr, Value,
	error::TypeError,
	format::{FormatConfig, materialize},
};

fn dominant(left: Category, right: Category) -> Category {
	match (left.precedence(), right.precedence()) {
		(Some(l), Some(r)) if r > l => right,
		_ => left,
	}
}

/// `left || right` for character or binary operands.
///
/// The result takes the higher precedence category of the operands and is
/// promoted to a wider category while it does not fit. Categories that
/// cannot be widened fail with an overflow instead of clipping.
#[instrument(name = "datum::normalize::concatenate", level = "trace", skip_all, fields(left = %left.category(), right = %right.category()))]
pub fn concatenate(mut left: Value, mut right: Value) -> crate::Result<Value> {
	for (value, other) in [(&left, &right), (&right, &left)] {
		let category = value.category();
		if category == Category::SecureChar || !(category.is_character() || category.is_binary()) {
			crate::return_error!(TypeError::TypeMismatch {
				expected: if other.category().is_binary() {
					Category::Varbit
				} else {
					Category::Varchar
				},
				actual: category.name().to_string(),
			});
		}
	}
	if left.category().family() != right.category().family() {
		crate::return_error!(TypeError::TypeMismatch {
			expected: left.category(),
			actual: right.category().name().to_string(),
		});
	}

	let mut category = dominant(left.category(), right.category());
	if left.is_null() || right.is_null() {
		return Ok(Value::null(category));
	}

	let config = FormatConfig::default();
	materialize(&mut left, &config)?;
	materialize(&mut right, &config)?;

	let length = left.length().unwrap_or(0) + right.length().unwrap_or(0);
	while length > category.max_width() {
		match category.widened() {
			Some(wider) => category = wider,
			None => crate::return_error!(TypeError::Overflow {
				type_name: category.name().to_string(),
				length,
				max: category.max_width(),
			}),
		}
	}

	let repr = match (left.into_repr(), right.into_repr()) {
		(Repr::Chars(mut l), Repr::Chars(r)) => {
			l.extend_from_slice(&r);
			Repr::Chars(l)
		}
		(Repr::Bytes(mut l), Repr::Bytes(r)) => {
			l.extend_from_slice(&r);
			Repr::Bytes(l)
		}
		(l, r) => crate::return_error!(TypeError::TypeMismatch {
			expected: category,
			actual: format!("{} and {}", l.kind(), r.kind()),
		}),
	};
	Value::new(category, repr)
}
