// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{Category, Value};
use crate::{error::TypeError, normalize::normalize};

/// Declared type of a column or CAST target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataType {
	pub category: Category,
	pub width: usize,
	pub nullable: bool,
}

impl DataType {
	pub fn new(category: Category, width: usize, nullable: bool) -> Self {
		Self {
			category,
			width,
			nullable,
		}
	}

	/// Adjusts `source` for assignment into a slot of this type.
	pub fn normalize(&self, source: Value) -> crate::Result<Value> {
		if source.is_null() && !self.nullable && self.category != Category::SecureChar {
			crate::return_error!(TypeError::NullIntoNonNullable {
				type_name: self.to_string(),
			});
		}
		let value = normalize(self.category, self.width, source)?;
		if value.is_null() && value.category() != self.category {
			return Ok(Value::null(self.category));
		}
		Ok(value)
	}

	/// The type able to hold values of both operands: the higher precedence
	/// category, the larger width, nullable if either is.
	pub fn dominant(&self, other: &DataType) -> crate::Result<DataType> {
		let category = match (self.category.precedence(), other.category.precedence()) {
			_ if self.category == other.category => self.category,
			(Some(l), Some(r)) => {
				if r > l {
					other.category
				} else {
					self.category
				}
			}
			_ => crate::return_error!(TypeError::NotComparable {
				left: self.category,
				right: other.category,
			}),
		};
		Ok(DataType {
			category,
			width: self.width.max(other.width).min(category.max_width()),
			nullable: self.nullable || other.nullable,
		})
	}
}

impl Display for DataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.category {
			Category::Char | Category::Varchar | Category::Clob | Category::Blob | Category::SecureChar => {
				write!(f, "{}({})", self.category, self.width)
			}
			Category::Bit => write!(f, "CHAR ({}) FOR BIT DATA", self.width),
			Category::Varbit => write!(f, "VARCHAR ({}) FOR BIT DATA", self.width),
			_ => Display::fmt(&self.category, f),
		}?;
		if !self.nullable {
			f.write_str(" NOT NULL")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_null_into_not_null_column() {
		let column = DataType::new(Category::Varchar, 10, false);
		let err = column.normalize(Value::null(Category::Varchar)).unwrap_err();
		assert_eq!(err.code(), "TYPE_002");
		assert_eq!(err.sql_state(), Some("23502"));
		assert!(err.message.contains("VARCHAR(10) NOT NULL"));
	}

	#[test]
	fn test_null_into_nullable_column() {
		let column = DataType::new(Category::Varchar, 10, true);
		let value = column.normalize(Value::null(Category::Char)).unwrap();
		assert!(value.is_null());
		assert_eq!(value.category(), Category::Varchar);
	}

	#[test]
	fn test_secure_null_is_type_mismatch() {
		let column = DataType::new(Category::SecureChar, 8, false);
		let err = column.normalize(Value::null(Category::SecureChar)).unwrap_err();
		assert_eq!(err.code(), "TYPE_001");
	}

	#[test]
	fn test_normalize_applies_width() {
		let column = DataType::new(Category::Char, 4, true);
		let value = column.normalize(Value::varchar("ab")).unwrap();
		assert_eq!(value.to_text().unwrap(), "ab  ");
		assert_eq!(value.category(), Category::Char);
	}

	#[test]
	fn test_dominant() {
		let char5 = DataType::new(Category::Char, 5, false);
		let varchar3 = DataType::new(Category::Varchar, 3, true);
		assert_eq!(char5.dominant(&varchar3).unwrap(), DataType::new(Category::Varchar, 5, true));
		assert_eq!(varchar3.dominant(&char5).unwrap(), DataType::new(Category::Varchar, 5, true));

		let secure = DataType::new(Category::SecureChar, 5, false);
		assert_eq!(secure.dominant(&char5).unwrap_err().code(), "COMPARE_001");
		assert_eq!(secure.dominant(&secure).unwrap(), secure);
	}
}
