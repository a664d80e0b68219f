// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Width adjustment on assignment and CAST.
//!
//! | Policy | Short value | Long value |
//! |--------|-------------|------------|
//! | [`PadAndCheck`] | padded | pad units may be dropped, anything else fails |
//! | [`CheckOnly`] | kept | pad units may be dropped, anything else fails |
//! | [`Forbidden`] | kept | always fails |
//! | [`TruncateAndWipe`] | kept | cut silently, the cut tail is zeroed |
//!
//! [`PadAndCheck`]: crate::TruncationPolicy::PadAndCheck
//! [`CheckOnly`]: crate::TruncationPolicy::CheckOnly
//! [`Forbidden`]: crate::TruncationPolicy::Forbidden
//! [`TruncateAndWipe`]: crate::TruncationPolicy::TruncateAndWipe

use tracing::instrument;

mod concat;
mod width;

pub use concat::concatenate;
pub use width::TruncationWarning;

use crate::{
	Category, Repr, Value,
	error::TypeError,
	format::{FormatConfig, materialize},
	value::{Family, secure},
};

/// Adjusts `source` to a column or CAST target of `category` and `width`.
pub fn normalize(category: Category, width: usize, source: Value) -> crate::Result<Value> {
	normalize_with(&FormatConfig::default(), category, width, source)
}

/// [`normalize`] reading stream-backed sources with `config`.
#[instrument(name = "datum::normalize", level = "trace", skip(config, source), fields(source = %source.category()))]
pub fn normalize_with(config: &FormatConfig, category: Category, width: usize, mut source: Value) -> crate::Result<Value> {
	if category == Category::SecureChar {
		return normalize_secure(config, width, source);
	}
	if source.category() == Category::SecureChar {
		crate::return_error!(TypeError::TypeMismatch {
			expected: category,
			actual: source.category().name().to_string(),
		});
	}
	if source.is_null() {
		return Ok(source);
	}

	materialize(&mut source, config)?;

	let Some(policy) = category.policy() else {
		return normalize_scalar(category, source);
	};
	if source.category().family() != category.family() {
		crate::return_error!(TypeError::TypeMismatch {
			expected: category,
			actual: source.category().name().to_string(),
		});
	}

	let mut value = source.with_category(category);
	width::apply(&mut value, width, policy, true)?;
	Ok(value)
}

fn normalize_secure(config: &FormatConfig, width: usize, mut source: Value) -> crate::Result<Value> {
	if source.category() != Category::SecureChar || source.is_null() {
		let actual = if source.is_null() {
			"NULL".to_string()
		} else {
			source.category().name().to_string()
		};
		crate::return_error!(TypeError::TypeMismatch {
			expected: Category::SecureChar,
			actual,
		});
	}

	materialize(&mut source, config)?;
	if let Repr::Chars(chars) = source.repr_mut() {
		secure::truncate_and_wipe(chars, width);
	}
	Ok(source)
}

/// Numeric and boolean targets have no width; only the category changes,
/// within the range of the target.
fn normalize_scalar(category: Category, source: Value) -> crate::Result<Value> {
	if source.category() == category {
		return Ok(source);
	}
	let mismatch = || {
		crate::error!(TypeError::TypeMismatch {
			expected: category,
			actual: source.category().name().to_string(),
		})
	};

	let repr = match (category.family(), source.repr()) {
		(Family::Boolean, Repr::Boolean(b)) => Repr::Boolean(*b),
		(Family::Numeric, Repr::Integer(v)) if category == Category::Double => Repr::Double(*v as f64),
		(Family::Numeric, Repr::Integer(v)) => Repr::Integer(*v),
		(Family::Numeric, Repr::Double(v)) if category != Category::Double => {
			if v.fract() != 0.0 || !v.is_finite() || *v < i64::MIN as f64 || *v >= i64::MAX as f64 {
				return Err(out_of_range(&source, category));
			}
			Repr::Integer(*v as i64)
		}
		(Family::Numeric, Repr::Double(v)) => Repr::Double(*v),
		_ => return Err(mismatch()),
	};
	Value::new(category, repr).map_err(|_| out_of_range(&source, category))
}

fn out_of_range(source: &Value, category: Category) -> crate::Error {
	crate::error!(TypeError::InvalidConversion {
		value: source.printable(),
		from: source.category(),
		to: category,
	})
}

impl Value {
	/// CAST width adjustment. A width of 0 leaves the value alone.
	///
	/// When `error_on_truncation` is unset, dropping non-pad data from a
	/// padded or checked category succeeds with a [`TruncationWarning`].
	#[instrument(name = "datum::normalize::set_width", level = "trace", skip(self), fields(category = %self.category()))]
	pub fn set_width(&mut self, width: usize, error_on_truncation: bool) -> crate::Result<Option<TruncationWarning>> {
		if width == 0 || self.is_null() {
			return Ok(None);
		}
		let Some(policy) = self.category().policy() else {
			return Ok(None);
		};
		materialize(self, &FormatConfig::default())?;
		width::apply(self, width, policy, error_on_truncation)
	}
}
