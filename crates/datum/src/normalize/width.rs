// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
	Repr, TruncationPolicy, Value,
	error::TypeError,
	format::utf,
	ordering::{BINARY_PAD, CHAR_PAD},
	value::secure,
};

/// Data was discarded by a CAST that was allowed to truncate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationWarning {
	/// Size of the value before truncation, in stored bytes.
	pub data_size: usize,
	/// Size of the value after truncation, in stored bytes.
	pub transfer_size: usize,
}

fn stored_size(repr: &Repr) -> usize {
	match repr {
		Repr::Chars(chars) => utf::utf_length(chars),
		Repr::Bytes(bytes) => bytes.len(),
		_ => 0,
	}
}

fn tail_is_pad(repr: &Repr, width: usize) -> bool {
	match repr {
		Repr::Chars(chars) => chars[width..].iter().all(|c| *c == CHAR_PAD),
		Repr::Bytes(bytes) => bytes[width..].iter().all(|b| *b == BINARY_PAD),
		_ => true,
	}
}

fn truncate(repr: &mut Repr, width: usize) {
	match repr {
		Repr::Chars(chars) => chars.truncate(width),
		Repr::Bytes(bytes) => bytes.truncate(width),
		_ => {}
	}
}

fn pad(repr: &mut Repr, width: usize) {
	match repr {
		Repr::Chars(chars) => chars.resize(width, CHAR_PAD),
		Repr::Bytes(bytes) => bytes.resize(width, BINARY_PAD),
		_ => {}
	}
}

pub(crate) fn truncation_error(value: &Value, width: usize) -> crate::Error {
	crate::error!(TypeError::Truncation {
		type_name: value.category().name().to_string(),
		value: value.printable(),
		width,
	})
}

/// Applies `policy` to a materialized character or binary value.
///
/// With `error_on_truncation` unset, discarding non-pad data under
/// [`TruncationPolicy::PadAndCheck`] or [`TruncationPolicy::CheckOnly`]
/// succeeds and reports a warning instead.
pub(crate) fn apply(
	value: &mut Value,
	width: usize,
	policy: TruncationPolicy,
	error_on_truncation: bool,
) -> crate::Result<Option<TruncationWarning>> {
	let Some(length) = value.length() else {
		return Ok(None);
	};

	if length <= width {
		if length < width && policy.pads() {
			pad(value.repr_mut(), width);
		}
		return Ok(None);
	}

	match policy {
		TruncationPolicy::TruncateAndWipe => {
			match value.repr_mut() {
				Repr::Chars(chars) => secure::truncate_and_wipe(chars, width),
				Repr::Bytes(bytes) => secure::truncate_and_wipe(bytes, width),
				_ => {}
			}
			Ok(None)
		}
		TruncationPolicy::Forbidden => Err(truncation_error(value, width)),
		TruncationPolicy::PadAndCheck | TruncationPolicy::CheckOnly => {
			if tail_is_pad(value.repr(), width) {
				truncate(value.repr_mut(), width);
				return Ok(None);
			}
			if error_on_truncation {
				return Err(truncation_error(value, width));
			}

			let data_size = stored_size(value.repr());
			truncate(value.repr_mut(), width);
			let warning = TruncationWarning {
				data_size,
				transfer_size: stored_size(value.repr()),
			};
			warn!(
				category = %value.category(),
				width,
				data_size = warning.data_size,
				transfer_size = warning.transfer_size,
				"data truncated by cast"
			);
			Ok(Some(warning))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pad_only_for_padding_policy() {
		let mut value = Value::char("AB");
		apply(&mut value, 5, TruncationPolicy::PadAndCheck, true).unwrap();
		assert_eq!(value.to_text().unwrap(), "AB   ");

		let mut value = Value::varchar("AB");
		apply(&mut value, 5, TruncationPolicy::CheckOnly, true).unwrap();
		assert_eq!(value.to_text().unwrap(), "AB");

		let mut value = Value::bit(vec![1]);
		apply(&mut value, 3, TruncationPolicy::PadAndCheck, true).unwrap();
		assert_eq!(value.as_bytes().unwrap(), &[1, 0x20, 0x20]);
	}

	#[test]
	fn test_warning_sizes_in_stored_bytes() {
		let mut value = Value::varchar("\u{e9}\u{e9}\u{e9}");
		let warning = apply(&mut value, 1, TruncationPolicy::CheckOnly, false).unwrap().unwrap();
		assert_eq!(
			warning,
			TruncationWarning {
				data_size: 6,
				transfer_size: 2,
			}
		);
		assert_eq!(value.length(), Some(1));
	}

	#[test]
	fn test_forbidden_ignores_warning_mode() {
		let mut value = Value::long_varbit(vec![1, 0x20]);
		let err = apply(&mut value, 1, TruncationPolicy::Forbidden, false).unwrap_err();
		assert_eq!(err.code(), "TRUNCATION_001");
		assert_eq!(value.length(), Some(2));
	}
}
