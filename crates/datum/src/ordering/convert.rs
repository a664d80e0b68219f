// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use crate::{Category, Value, error::TypeError};

/// A numeric operand after implicit conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Number {
	Integer(i64),
	Double(f64),
}

impl Number {
	fn as_f64(self) -> f64 {
		match self {
			Number::Integer(v) => v as f64,
			Number::Double(v) => v,
		}
	}

	/// Integers compare exactly; a DOUBLE on either side widens both.
	pub(crate) fn compare(self, other: Number) -> Ordering {
		match (self, other) {
			(Number::Integer(l), Number::Integer(r)) => l.cmp(&r),
			(l, r) => l.as_f64().total_cmp(&r.as_f64()),
		}
	}
}

fn invalid(text: &str, from: Category, to: Category) -> crate::Error {
	crate::error!(TypeError::InvalidConversion {
		value: text.to_string(),
		from,
		to,
	})
}

/// Parses character data as a number of category `to`.
pub(crate) fn chars_to_number(chars: &[char], from: Category, to: Category) -> crate::Result<Number> {
	let text: String = chars.iter().collect();
	let trimmed = text.trim();
	if to == Category::Double {
		return trimmed.parse::<f64>().map(Number::Double).map_err(|_| invalid(trimmed, from, to));
	}

	let value = trimmed.parse::<i64>().map_err(|_| invalid(trimmed, from, to))?;
	let fits = match to {
		Category::SmallInt => i16::try_from(value).is_ok(),
		Category::Integer => i32::try_from(value).is_ok(),
		_ => true,
	};
	if !fits {
		return Err(invalid(trimmed, from, to));
	}
	Ok(Number::Integer(value))
}

/// Parses `true` or `false`, ignoring case and surrounding blanks.
pub(crate) fn chars_to_bool(chars: &[char], from: Category) -> crate::Result<bool> {
	let text: String = chars.iter().collect();
	let trimmed = text.trim();
	if trimmed.eq_ignore_ascii_case("true") {
		Ok(true)
	} else if trimmed.eq_ignore_ascii_case("false") {
		Ok(false)
	} else {
		Err(invalid(trimmed, from, Category::Boolean))
	}
}

/// The numeric operand of a non-null numeric value.
pub(crate) fn number(value: &Value) -> Option<Number> {
	if let Some(v) = value.as_i64() {
		return Some(Number::Integer(v));
	}
	value.as_f64().map(Number::Double)
}
