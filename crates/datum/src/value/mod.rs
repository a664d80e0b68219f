// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Display, Formatter},
	hash::{Hash, Hasher},
};

mod category;
mod data_type;
mod policy;
mod precedence;
pub(crate) mod secure;
mod stream;

pub use category::{CHAR_MAX_WIDTH, Category, Family, LOB_MAX_WIDTH, LONG_VARCHAR_MAX_WIDTH, VARCHAR_MAX_WIDTH};
pub use data_type::DataType;
pub use policy::TruncationPolicy;
pub use precedence::Precedence;
pub use stream::{MemoryStream, PositionedStream};

use crate::{
	error::TypeError,
	ordering::{BINARY_PAD, CHAR_PAD},
};

/// Longest prefix of a character value shown in diagnostics.
const PRINTABLE_MAX_CHARS: usize = 60;

/// The active representation of a [`Value`].
pub enum Repr {
	Null,
	Chars(Vec<char>),
	Bytes(Vec<u8>),
	Boolean(bool),
	Integer(i64),
	Double(f64),
	/// The value still lives in its on-disk/wire format in a backing stream.
	Stream(Box<dyn PositionedStream>),
}

/// A SQL value of one [`Category`].
pub struct Value {
	category: Category,
	repr: Repr,
}

impl Value {
	/// Creates a value, rejecting representations the category cannot hold.
	pub fn new(category: Category, repr: Repr) -> crate::Result<Self> {
		let fits = match (&repr, category.family()) {
			(Repr::Null, _) | (Repr::Stream(_), _) => true,
			(Repr::Chars(_), Family::Character) => true,
			(Repr::Bytes(_), Family::Binary) => true,
			(Repr::Boolean(_), Family::Boolean) => true,
			(Repr::Integer(v), Family::Numeric) => match category {
				Category::SmallInt => i16::try_from(*v).is_ok(),
				Category::Integer => i32::try_from(*v).is_ok(),
				Category::BigInt => true,
				_ => false,
			},
			(Repr::Double(_), Family::Numeric) => category == Category::Double,
			_ => false,
		};
		if !fits {
			crate::return_error!(TypeError::TypeMismatch {
				expected: category,
				actual: repr.kind().to_string(),
			});
		}
		Ok(Self {
			category,
			repr,
		})
	}

	pub fn null(category: Category) -> Self {
		Self {
			category,
			repr: Repr::Null,
		}
	}

	/// Character value of any character category.
	pub fn chars(category: Category, value: &str) -> crate::Result<Self> {
		Self::new(category, Repr::Chars(value.chars().collect()))
	}

	fn text(category: Category, value: &str) -> Self {
		Self {
			category,
			repr: Repr::Chars(value.chars().collect()),
		}
	}

	pub fn char(value: &str) -> Self {
		Self::text(Category::Char, value)
	}

	pub fn varchar(value: &str) -> Self {
		Self::text(Category::Varchar, value)
	}

	pub fn long_varchar(value: &str) -> Self {
		Self::text(Category::LongVarchar, value)
	}

	pub fn clob(value: &str) -> Self {
		Self::text(Category::Clob, value)
	}

	/// A secure character value. The caller's buffer is copied; wiping it is
	/// the caller's responsibility.
	pub fn secure(value: &[char]) -> Self {
		Self {
			category: Category::SecureChar,
			repr: Repr::Chars(value.to_vec()),
		}
	}

	/// Binary value of any binary category.
	pub fn bytes(category: Category, value: impl Into<Vec<u8>>) -> crate::Result<Self> {
		Self::new(category, Repr::Bytes(value.into()))
	}

	fn binary(category: Category, value: Vec<u8>) -> Self {
		Self {
			category,
			repr: Repr::Bytes(value),
		}
	}

	pub fn bit(value: impl Into<Vec<u8>>) -> Self {
		Self::binary(Category::Bit, value.into())
	}

	pub fn varbit(value: impl Into<Vec<u8>>) -> Self {
		Self::binary(Category::Varbit, value.into())
	}

	pub fn long_varbit(value: impl Into<Vec<u8>>) -> Self {
		Self::binary(Category::LongVarbit, value.into())
	}

	pub fn blob(value: impl Into<Vec<u8>>) -> Self {
		Self::binary(Category::Blob, value.into())
	}

	pub fn boolean(value: bool) -> Self {
		Self {
			category: Category::Boolean,
			repr: Repr::Boolean(value),
		}
	}

	pub fn smallint(value: i16) -> Self {
		Self {
			category: Category::SmallInt,
			repr: Repr::Integer(value as i64),
		}
	}

	pub fn integer(value: i32) -> Self {
		Self {
			category: Category::Integer,
			repr: Repr::Integer(value as i64),
		}
	}

	pub fn bigint(value: i64) -> Self {
		Self {
			category: Category::BigInt,
			repr: Repr::Integer(value),
		}
	}

	pub fn double(value: f64) -> Self {
		Self {
			category: Category::Double,
			repr: Repr::Double(value),
		}
	}

	/// A value whose on-disk/wire encoding is read lazily from `stream`.
	pub fn from_stream(category: Category, stream: impl PositionedStream + 'static) -> Self {
		Self {
			category,
			repr: Repr::Stream(Box::new(stream)),
		}
	}

	pub fn category(&self) -> Category {
		self.category
	}

	pub fn repr(&self) -> &Repr {
		&self.repr
	}

	pub(crate) fn repr_mut(&mut self) -> &mut Repr {
		&mut self.repr
	}

	pub(crate) fn set_repr(&mut self, repr: Repr) {
		self.repr = repr;
	}

	pub fn into_repr(self) -> Repr {
		self.repr
	}

	pub fn is_null(&self) -> bool {
		matches!(self.repr, Repr::Null)
	}

	pub fn is_stream(&self) -> bool {
		matches!(self.repr, Repr::Stream(_))
	}

	pub fn as_chars(&self) -> Option<&[char]> {
		match &self.repr {
			Repr::Chars(chars) => Some(chars),
			_ => None,
		}
	}

	pub fn as_bytes(&self) -> Option<&[u8]> {
		match &self.repr {
			Repr::Bytes(bytes) => Some(bytes),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self.repr {
			Repr::Boolean(b) => Some(b),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self.repr {
			Repr::Integer(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self.repr {
			Repr::Double(v) => Some(v),
			Repr::Integer(v) => Some(v as f64),
			_ => None,
		}
	}

	/// Character content as a `String`. Never exposes secure values.
	pub fn to_text(&self) -> Option<String> {
		if self.category == Category::SecureChar {
			return None;
		}
		self.as_chars().map(|chars| chars.iter().collect())
	}

	/// Length in characters or bytes of a materialized character or binary
	/// value.
	pub fn length(&self) -> Option<usize> {
		match &self.repr {
			Repr::Chars(chars) => Some(chars.len()),
			Repr::Bytes(bytes) => Some(bytes.len()),
			_ => None,
		}
	}

	/// Re-tags a materialized value with another category of the same
	/// family, e.g. a CHAR result stored into a VARCHAR slot.
	pub(crate) fn with_category(mut self, category: Category) -> Self {
		debug_assert_eq!(self.category.family(), category.family());
		self.category = category;
		self
	}

	/// Overwrites the buffer with zeros in place.
	pub fn wipe(&mut self) {
		match &mut self.repr {
			Repr::Chars(chars) => secure::wipe(chars),
			Repr::Bytes(bytes) => secure::wipe(bytes),
			_ => {}
		}
	}

	/// Returns a copy of the character buffer after zeroing the original.
	pub fn take_and_wipe(&mut self) -> Option<Vec<char>> {
		match &mut self.repr {
			Repr::Chars(chars) => Some(secure::take_and_wipe(chars)),
			_ => None,
		}
	}

	/// Text used to describe the value in diagnostics.
	pub fn printable(&self) -> String {
		match (&self.repr, self.category) {
			(Repr::Null, _) => "NULL".to_string(),
			(_, Category::SecureChar) => "********".to_string(),
			(Repr::Chars(chars), _) => {
				if chars.len() > PRINTABLE_MAX_CHARS {
					let mut text: String = chars[..PRINTABLE_MAX_CHARS].iter().collect();
					text.push('&');
					text
				} else {
					chars.iter().collect()
				}
			}
			(Repr::Bytes(bytes), _) => bytes.iter().map(|b| format!("{:02x}", b)).collect(),
			(Repr::Stream(_), _) => "<stream>".to_string(),
			_ => self.to_string(),
		}
	}

	/// Deep copy of a materialized value. Stream-backed values cannot be
	/// copied without being read.
	pub fn try_clone(&self) -> Option<Value> {
		let repr = match &self.repr {
			Repr::Null => Repr::Null,
			Repr::Chars(chars) => Repr::Chars(chars.clone()),
			Repr::Bytes(bytes) => Repr::Bytes(bytes.clone()),
			Repr::Boolean(b) => Repr::Boolean(*b),
			Repr::Integer(v) => Repr::Integer(*v),
			Repr::Double(v) => Repr::Double(*v),
			Repr::Stream(_) => return None,
		};
		Some(Value {
			category: self.category,
			repr,
		})
	}
}

impl Repr {
	pub(crate) fn kind(&self) -> &'static str {
		match self {
			Repr::Null => "NULL",
			Repr::Chars(_) => "character data",
			Repr::Bytes(_) => "binary data",
			Repr::Boolean(_) => "boolean",
			Repr::Integer(_) => "integer",
			Repr::Double(_) => "double",
			Repr::Stream(_) => "stream",
		}
	}
}

impl PartialEq for Repr {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Repr::Null, Repr::Null) => true,
			(Repr::Chars(l), Repr::Chars(r)) => l == r,
			(Repr::Bytes(l), Repr::Bytes(r)) => l == r,
			(Repr::Boolean(l), Repr::Boolean(r)) => l == r,
			(Repr::Integer(l), Repr::Integer(r)) => l == r,
			(Repr::Double(l), Repr::Double(r)) => l.to_bits() == r.to_bits(),
			_ => false,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.category == other.category && self.repr == other.repr
	}
}

fn trim_pad<T: PartialEq>(units: &[T], pad: T) -> &[T] {
	let end = units.iter().rposition(|unit| *unit != pad).map_or(0, |last| last + 1);
	&units[..end]
}

/// Hashes consistently with [`crate::ordering::compare`] under the
/// [`crate::BinaryCollator`] for operands of one family: trailing pad units
/// are ignored and numbers hash by their DOUBLE value, so `'ab'` and
/// `'ab   '` or `7` and `7.0` land in the same bucket. Character data equal to
/// a number or boolean only after conversion is not covered.
impl Hash for Value {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.category.family().hash(state);
		match &self.repr {
			Repr::Null => 0u8.hash(state),
			Repr::Chars(chars) => trim_pad(chars, CHAR_PAD).hash(state),
			Repr::Bytes(bytes) => trim_pad(bytes, BINARY_PAD).hash(state),
			Repr::Boolean(b) => b.hash(state),
			Repr::Integer(v) => (*v as f64).to_bits().hash(state),
			Repr::Double(v) => v.to_bits().hash(state),
			Repr::Stream(_) => 1u8.hash(state),
		}
	}
}

impl Debug for Repr {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Repr::Null => f.write_str("Null"),
			Repr::Chars(chars) => f.debug_tuple("Chars").field(&chars.iter().collect::<String>()).finish(),
			Repr::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
			Repr::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
			Repr::Integer(v) => f.debug_tuple("Integer").field(v).finish(),
			Repr::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Repr::Stream(stream) => f.debug_struct("Stream").field("position", &stream.position()).finish(),
		}
	}
}

impl Debug for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.category == Category::SecureChar && !self.is_null() {
			return f.debug_struct("Value").field("category", &self.category).finish_non_exhaustive();
		}
		f.debug_struct("Value").field("category", &self.category).field("repr", &self.repr).finish()
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.category == Category::SecureChar && !self.is_null() {
			return f.write_str("********");
		}
		match &self.repr {
			Repr::Null => f.write_str("NULL"),
			Repr::Chars(chars) => chars.iter().try_for_each(|c| fmt::Write::write_char(f, *c)),
			Repr::Bytes(bytes) => bytes.iter().try_for_each(|b| write!(f, "{:02x}", b)),
			Repr::Boolean(true) => f.write_str("true"),
			Repr::Boolean(false) => f.write_str("false"),
			Repr::Integer(v) => Display::fmt(v, f),
			Repr::Double(v) => Display::fmt(v, f),
			Repr::Stream(_) => f.write_str("<stream>"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_rejects_wrong_representation() {
		let err = Value::new(Category::Integer, Repr::Chars(vec!['1'])).unwrap_err();
		assert_eq!(err.code(), "TYPE_001");

		let err = Value::new(Category::Double, Repr::Integer(1)).unwrap_err();
		assert_eq!(err.code(), "TYPE_001");

		assert!(Value::new(Category::Varbit, Repr::Bytes(vec![1])).is_ok());
		assert!(Value::new(Category::Boolean, Repr::Null).is_ok());
	}

	#[test]
	fn test_generic_constructors_check_family() {
		assert_eq!(Value::chars(Category::Integer, "x").unwrap_err().code(), "TYPE_001");
		assert_eq!(Value::bytes(Category::Varchar, vec![1u8]).unwrap_err().code(), "TYPE_001");

		assert_eq!(Value::chars(Category::Clob, "x").unwrap(), Value::clob("x"));
		assert_eq!(Value::bytes(Category::Blob, vec![1u8]).unwrap(), Value::blob(vec![1]));
	}

	#[test]
	fn test_printable_clips_long_text() {
		let long = "x".repeat(80);
		let printable = Value::varchar(&long).printable();
		assert_eq!(printable.chars().count(), 61);
		assert!(printable.ends_with('&'));

		assert_eq!(Value::varchar("abc").printable(), "abc");
		assert_eq!(Value::varbit(vec![0xde, 0xad]).printable(), "dead");
		assert_eq!(Value::null(Category::Char).printable(), "NULL");
	}

	#[test]
	fn test_secure_never_revealed() {
		let value = Value::secure(&['p', 'w']);
		assert_eq!(value.printable(), "********");
		assert_eq!(value.to_string(), "********");
		assert_eq!(value.to_text(), None);
		assert!(!format!("{:?}", value).contains("pw"));
	}

	#[test]
	fn test_take_and_wipe() {
		let mut value = Value::secure(&['p', 'w']);
		let taken = value.take_and_wipe().unwrap();
		assert_eq!(taken, vec!['p', 'w']);
		assert_eq!(value.as_chars().unwrap(), &['\0', '\0']);
	}

	#[test]
	fn test_try_clone_stream_is_none() {
		let value = Value::from_stream(Category::Varchar, MemoryStream::new(vec![0, 0]));
		assert!(value.try_clone().is_none());
		assert!(value.is_stream());

		let value = Value::integer(7);
		assert_eq!(value.try_clone().unwrap(), value);
	}

	fn hash_of(value: &Value) -> u64 {
		let mut hasher = std::hash::DefaultHasher::new();
		value.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn test_hash_ignores_trailing_pad() {
		let pairs = [
			(Value::char("ab   "), Value::varchar("ab")),
			(Value::clob("x "), Value::long_varchar("x")),
			(Value::varchar("   "), Value::char("")),
			(Value::bit(vec![1, 0x20, 0x20]), Value::blob(vec![1])),
			(Value::smallint(7), Value::double(7.0)),
			(Value::bigint(-3), Value::integer(-3)),
		];
		for (left, right) in &pairs {
			let ordering = crate::ordering::compare_ordered(left, right, &crate::BinaryCollator).unwrap();
			assert!(ordering.is_eq(), "{left:?} and {right:?} must compare equal");
			assert_eq!(hash_of(left), hash_of(right), "{left:?} and {right:?} must hash equal");
		}

		assert_ne!(hash_of(&Value::varchar("ab\t")), hash_of(&Value::varchar("ab")));
		assert_ne!(hash_of(&Value::varbit(vec![1, 0])), hash_of(&Value::varbit(vec![1])));
		assert_eq!(hash_of(&Value::null(Category::Char)), hash_of(&Value::null(Category::Varchar)));
	}

	#[test]
	fn test_equality_respects_category() {
		assert_ne!(Value::char("a"), Value::varchar("a"));
		assert_eq!(Value::varchar("a"), Value::varchar("a"));
	}
}
