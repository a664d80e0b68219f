// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::io;

use super::{
	Diagnostic, IntoDiagnostic,
	diagnostic::sql_state,
};

/// Failures raised while framing, reading or repositioning a streamed value.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
	#[error("I/O error while streaming a value: {0}")]
	Io(#[from] io::Error),

	#[error("Cannot reposition stream to offset {requested}: the stream ends at {end}")]
	EndOfData {
		requested: u64,
		end: u64,
	},

	#[error("This header instance does not support length updates")]
	UpdateNotAllowed,

	#[error("Update recipe has {recipe} entries but the header has {header} bytes")]
	RecipeLength {
		recipe: usize,
		header: usize,
	},

	#[error("Malformed modified UTF-8 data at byte {offset}: {reason}")]
	MalformedUtf8 {
		offset: usize,
		reason: String,
	},

	#[error("A NULL value cannot be written to a stream")]
	NullValue,

	#[error("Stream ended after {actual} bytes but {expected} were declared")]
	InexactLength {
		expected: usize,
		actual: usize,
	},

	#[error("A stream-backed {category} value must be materialized before it is compared")]
	NotMaterialized {
		category: String,
	},
}

impl IntoDiagnostic for StreamError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			StreamError::Io(err) => Diagnostic {
				code: "STREAM_001".to_string(),
				message,
				label: Some(format!("{:?}", err.kind())),
				help: None,
				notes: vec![sql_state("XCL30")],
				cause: None,
			},
			StreamError::EndOfData {
				..
			} => Diagnostic {
				code: "STREAM_002".to_string(),
				message,
				label: Some("stream was reset to offset 0".to_string()),
				help: None,
				notes: vec![sql_state("XJ073")],
				cause: None,
			},
			StreamError::UpdateNotAllowed => Diagnostic {
				code: "STREAM_003".to_string(),
				message,
				label: Some("immutable header".to_string()),
				help: Some("Headers created without an update recipe are final once written".to_string()),
				notes: vec![],
				cause: None,
			},
			StreamError::RecipeLength {
				..
			} => Diagnostic {
				code: "STREAM_004".to_string(),
				message,
				label: Some("invalid update recipe".to_string()),
				help: Some("Provide exactly one shift entry per header byte".to_string()),
				notes: vec![],
				cause: None,
			},
			StreamError::MalformedUtf8 {
				..
			} => Diagnostic {
				code: "STREAM_005".to_string(),
				message,
				label: Some("corrupt character data".to_string()),
				help: None,
				notes: vec![sql_state("XJ023")],
				cause: None,
			},
			StreamError::NullValue => Diagnostic {
				code: "STREAM_006".to_string(),
				message,
				label: Some("null value".to_string()),
				help: Some("Null values are recorded by the row format, not by the value stream".to_string()),
				notes: vec![],
				cause: None,
			},
			StreamError::InexactLength {
				..
			} => Diagnostic {
				code: "STREAM_007".to_string(),
				message,
				label: Some("truncated stream".to_string()),
				help: None,
				notes: vec![sql_state("XJ023")],
				cause: None,
			},
			StreamError::NotMaterialized {
				..
			} => Diagnostic {
				code: "STREAM_008".to_string(),
				message,
				label: Some("stream-backed operand".to_string()),
				help: Some("Call materialize on the value first".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}
