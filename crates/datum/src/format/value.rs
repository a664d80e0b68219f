// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::io::{Read, Write};

use tracing::instrument;

use super::{
	FormatConfig,
	binary,
	config::ClobHeaderFormat,
	header::{CharStreamHeader, ClobStreamHeader, ReadHeader, StreamHeaderGenerator, parse_char_header, parse_clob_header},
	utf::{self, Limit},
};
use crate::{
	Category, Repr, Value,
	error::StreamError,
	value::Family,
};

fn uses_clob_header(category: Category, config: &FormatConfig) -> bool {
	category == Category::Clob && config.clob_header == ClobHeaderFormat::Modern
}

/// Writes the stored form of a non-null value and returns the number of
/// bytes written.
///
/// A stream-backed value is materialized first, which drains its backing
/// stream.
#[instrument(name = "datum::format::write_value", level = "trace", skip_all, fields(category = %value.category()))]
pub fn write_value(value: &mut Value, out: &mut dyn Write, config: &FormatConfig) -> crate::Result<usize> {
	materialize(value, config)?;

	let category = value.category();
	match value.repr() {
		Repr::Null => crate::err!(StreamError::NullValue),
		Repr::Stream(_) => crate::err!(StreamError::NotMaterialized {
			category: category.name().to_string(),
		}),
		Repr::Chars(chars) => {
			let (generator, length): (&dyn StreamHeaderGenerator, i64) = if uses_clob_header(category, config) {
				(&ClobStreamHeader, utf::utf16_length(chars) as i64)
			} else {
				(&CharStreamHeader, utf::utf_length(chars) as i64)
			};
			let header = generator.generate_to(out, length)?;
			let payload = utf::write_chars(chars, out)? as usize;
			let eof = generator.write_eof_to(out, length)?;
			Ok(header + payload + eof)
		}
		Repr::Bytes(bytes) => {
			let prefix = binary::write_length(out, bytes.len())?;
			out.write_all(bytes)?;
			Ok(prefix + bytes.len())
		}
		Repr::Boolean(b) => {
			out.write_all(&[*b as u8])?;
			Ok(1)
		}
		Repr::Integer(v) => {
			match category {
				Category::SmallInt => out.write_all(&(*v as i16).to_be_bytes())?,
				Category::Integer => out.write_all(&(*v as i32).to_be_bytes())?,
				_ => out.write_all(&v.to_be_bytes())?,
			}
			Ok(category.max_width())
		}
		Repr::Double(v) => {
			out.write_all(&v.to_be_bytes())?;
			Ok(8)
		}
	}
}

fn read_array<const N: usize>(input: &mut dyn Read) -> crate::Result<[u8; N]> {
	let mut bytes = [0u8; N];
	input.read_exact(&mut bytes)?;
	Ok(bytes)
}

fn read_chars(category: Category, input: &mut dyn Read, config: &FormatConfig) -> crate::Result<Vec<char>> {
	let limit = if uses_clob_header(category, config) {
		let bytes = read_array::<5>(input)?;
		match parse_clob_header(bytes) {
			Some(ReadHeader::Known(units)) => Limit::Units(units),
			Some(ReadHeader::Unknown) => Limit::Unbounded,
			None => crate::return_error!(StreamError::MalformedUtf8 {
				offset: 2,
				reason: format!("expected CLOB header marker 0xf0, found 0x{:02x}", bytes[2]),
			}),
		}
	} else {
		match parse_char_header(read_array::<2>(input)?) {
			ReadHeader::Known(length) => Limit::Bytes(length),
			ReadHeader::Unknown => Limit::Unbounded,
		}
	};
	utf::decode(input, limit, config.char_grow_by)
}

/// Reads one stored value of `category` from `input`.
#[instrument(name = "datum::format::read_value", level = "trace", skip(input, config))]
pub fn read_value(category: Category, input: &mut dyn Read, config: &FormatConfig) -> crate::Result<Value> {
	let repr = match category.family() {
		Family::Character => Repr::Chars(read_chars(category, input, config)?),
		Family::Binary => {
			let length = binary::read_length(input)?;
			Repr::Bytes(binary::read_payload(input, length, config.long_grow_by)?)
		}
		Family::Boolean => Repr::Boolean(read_array::<1>(input)?[0] != 0),
		Family::Numeric => match category {
			Category::SmallInt => Repr::Integer(i16::from_be_bytes(read_array(input)?) as i64),
			Category::Integer => Repr::Integer(i32::from_be_bytes(read_array(input)?) as i64),
			Category::BigInt => Repr::Integer(i64::from_be_bytes(read_array(input)?)),
			_ => Repr::Double(f64::from_be_bytes(read_array(input)?)),
		},
	};
	Value::new(category, repr)
}

/// Replaces a stream-backed representation with the decoded buffer. The
/// stream is read from its start. Materialized values are left alone.
#[instrument(name = "datum::format::materialize", level = "trace", skip_all, fields(category = %value.category()))]
pub fn materialize(value: &mut Value, config: &FormatConfig) -> crate::Result<()> {
	let category = value.category();
	let Repr::Stream(stream) = value.repr_mut() else {
		return Ok(());
	};
	if stream.position() != 0 {
		stream.reposition(0)?;
	}
	let decoded = read_value(category, stream, config)?;
	value.set_repr(decoded.into_repr());
	Ok(())
}
