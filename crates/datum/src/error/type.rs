// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{
	Diagnostic, IntoDiagnostic,
	diagnostic::sql_state,
};
use crate::value::Category;

/// Failures raised while adjusting, converting or comparing values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("A truncation error was encountered trying to shrink {type_name} '{value}' to length {width}")]
	Truncation {
		type_name: String,
		value: String,
		width: usize,
	},

	#[error("The resulting value of {type_name} is too long: {length} exceeds the maximum of {max}")]
	Overflow {
		type_name: String,
		length: usize,
		max: usize,
	},

	#[error("Expected {expected} but got {actual}")]
	TypeMismatch {
		expected: Category,
		actual: String,
	},

	#[error("Column of type {type_name} cannot accept a NULL value")]
	NullIntoNonNullable {
		type_name: String,
	},

	#[error("The check constraint '{constraint}' was violated while performing an INSERT or UPDATE on '{owner}'")]
	ConstraintViolation {
		owner: String,
		constraint: String,
	},

	#[error("Comparisons between '{left}' and '{right}' are not supported")]
	NotComparable {
		left: Category,
		right: Category,
	},

	#[error("Invalid character string format for type {to}: '{value}'")]
	InvalidConversion {
		value: String,
		from: Category,
		to: Category,
	},
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::Truncation {
				type_name,
				width,
				..
			} => Diagnostic {
				code: "TRUNCATION_001".to_string(),
				message,
				label: Some("non-pad data would be discarded".to_string()),
				help: Some(format!(
					"Shorten the value to at most {} or widen the {} column",
					width, type_name
				)),
				notes: vec![sql_state("22001")],
				cause: None,
			},
			TypeError::Overflow {
				type_name,
				..
			} => Diagnostic {
				code: "OVERFLOW_001".to_string(),
				message,
				label: Some("result exceeds the maximum width".to_string()),
				help: Some(format!("{} values are never clipped; reduce the operands", type_name)),
				notes: vec![sql_state("54006")],
				cause: None,
			},
			TypeError::TypeMismatch {
				expected,
				..
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				message,
				label: Some("type mismatch".to_string()),
				help: Some(format!("Only non-null {} values can be assigned here", expected)),
				notes: vec![sql_state("XJ001")],
				cause: None,
			},
			TypeError::NullIntoNonNullable {
				..
			} => Diagnostic {
				code: "TYPE_002".to_string(),
				message,
				label: Some("null value".to_string()),
				help: Some("Provide a value or declare the column nullable".to_string()),
				notes: vec![sql_state("23502")],
				cause: None,
			},
			TypeError::ConstraintViolation {
				..
			} => Diagnostic {
				code: "CONSTRAINT_001".to_string(),
				message,
				label: Some("constraint not satisfied".to_string()),
				help: Some("A check constraint must evaluate to TRUE; FALSE and UNKNOWN are both rejected"
					.to_string()),
				notes: vec![sql_state("23513")],
				cause: None,
			},
			TypeError::NotComparable {
				left,
				right,
			} => Diagnostic {
				code: "COMPARE_001".to_string(),
				message,
				label: Some(format!("cannot compare {} with {}", left, right)),
				help: Some("Cast one of the operands explicitly".to_string()),
				notes: vec![sql_state("42818")],
				cause: None,
			},
			TypeError::InvalidConversion {
				from,
				..
			} => Diagnostic {
				code: "CONVERT_001".to_string(),
				message,
				label: Some(format!("conversion from {} failed", from)),
				help: None,
				notes: vec![sql_state("22018")],
				cause: None,
			},
		}
	}
}
