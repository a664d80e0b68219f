// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Three-valued boolean logic.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Value, error::TypeError};

/// The result of a SQL predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Truth {
	True,
	False,
	Unknown,
}

impl Truth {
	pub fn and(self, other: Truth) -> Truth {
		match (self, other) {
			(Truth::False, _) | (_, Truth::False) => Truth::False,
			(Truth::True, Truth::True) => Truth::True,
			_ => Truth::Unknown,
		}
	}

	pub fn or(self, other: Truth) -> Truth {
		match (self, other) {
			(Truth::True, _) | (_, Truth::True) => Truth::True,
			(Truth::False, Truth::False) => Truth::False,
			_ => Truth::Unknown,
		}
	}

	/// `a IS b`, never UNKNOWN.
	pub fn is(self, other: Truth) -> Truth {
		Truth::from(self == other)
	}

	pub fn is_not(self, other: Truth) -> Truth {
		self.is(other).not()
	}

	pub fn not(self) -> Truth {
		match self {
			Truth::True => Truth::False,
			Truth::False => Truth::True,
			Truth::Unknown => Truth::Unknown,
		}
	}

	pub fn is_true(self) -> bool {
		self == Truth::True
	}

	/// Truth of a comparison whose operands may be null.
	pub fn from_comparison(left: &Value, right: &Value, outcome: bool) -> Truth {
		if left.is_null() || right.is_null() {
			Truth::Unknown
		} else {
			Truth::from(outcome)
		}
	}

	/// Rejects anything that was not proven TRUE.
	pub fn assert_true(self, owner: &str, constraint: &str) -> crate::Result<()> {
		if self.is_true() {
			return Ok(());
		}
		crate::err!(TypeError::ConstraintViolation {
			owner: owner.to_string(),
			constraint: constraint.to_string(),
		})
	}
}

impl From<bool> for Truth {
	fn from(value: bool) -> Self {
		if value {
			Truth::True
		} else {
			Truth::False
		}
	}
}

impl From<Option<bool>> for Truth {
	fn from(value: Option<bool>) -> Self {
		value.map(Truth::from).unwrap_or(Truth::Unknown)
	}
}

impl From<Truth> for Option<bool> {
	fn from(value: Truth) -> Self {
		match value {
			Truth::True => Some(true),
			Truth::False => Some(false),
			Truth::Unknown => None,
		}
	}
}

impl Display for Truth {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Truth::True => f.write_str("TRUE"),
			Truth::False => f.write_str("FALSE"),
			Truth::Unknown => f.write_str("UNKNOWN"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{Truth::*, *};

	const ALL: [Truth; 3] = [True, False, Unknown];

	#[test]
	fn test_and() {
		assert_eq!(True.and(True), True);
		assert_eq!(True.and(False), False);
		assert_eq!(True.and(Unknown), Unknown);
		assert_eq!(False.and(Unknown), False);
		assert_eq!(Unknown.and(False), False);
		assert_eq!(Unknown.and(Unknown), Unknown);
	}

	#[test]
	fn test_or() {
		assert_eq!(False.or(False), False);
		assert_eq!(False.or(True), True);
		assert_eq!(False.or(Unknown), Unknown);
		assert_eq!(True.or(Unknown), True);
		assert_eq!(Unknown.or(True), True);
		assert_eq!(Unknown.or(Unknown), Unknown);
	}

	#[test]
	fn test_and_or_commutative() {
		for a in ALL {
			for b in ALL {
				assert_eq!(a.and(b), b.and(a));
				assert_eq!(a.or(b), b.or(a));
			}
		}
	}

	#[test]
	fn test_is_is_total() {
		for a in ALL {
			for b in ALL {
				let is = a.is(b);
				assert_ne!(is, Unknown);
				assert_eq!(is, Truth::from(a == b));
				assert_eq!(a.is_not(b), is.not());
			}
		}
		assert_eq!(Unknown.is(Unknown), True);
		assert_eq!(Unknown.is_not(False), True);
	}

	#[test]
	fn test_not() {
		assert_eq!(True.not(), False);
		assert_eq!(False.not(), True);
		assert_eq!(Unknown.not(), Unknown);
	}

	#[test]
	fn test_assert_true() {
		assert!(True.assert_true("T", "CK").is_ok());

		let err = False.assert_true("APP.T", "CK_AGE").unwrap_err();
		assert_eq!(err.code(), "CONSTRAINT_001");
		assert!(err.message.contains("CK_AGE"));
		assert!(err.message.contains("APP.T"));

		let err = Unknown.assert_true("APP.T", "CK_AGE").unwrap_err();
		assert_eq!(err.code(), "CONSTRAINT_001");
	}

	#[test]
	fn test_option_conversion() {
		assert_eq!(Truth::from(None::<bool>), Unknown);
		assert_eq!(Option::<bool>::from(Unknown), None);
		assert_eq!(Option::<bool>::from(True), Some(true));
	}

	#[test]
	fn test_from_comparison() {
		let a = Value::integer(1);
		let null = Value::null(crate::Category::Integer);
		assert_eq!(Truth::from_comparison(&a, &a, true), True);
		assert_eq!(Truth::from_comparison(&a, &null, true), Unknown);
		assert_eq!(Truth::from_comparison(&null, &a, false), Unknown);
	}
}
