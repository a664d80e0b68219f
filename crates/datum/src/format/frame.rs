// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use super::{header::StreamHeaderGenerator, utf};

/// Writes a character value whose length is only known once it has been
/// encoded.
///
/// A provisional unknown-length header is written first. After the payload,
/// the header is revised in place when the generator can encode the final
/// length; otherwise the payload is terminated with the EOF marker.
#[instrument(name = "datum::format::write_framed_chars", level = "trace", skip_all)]
pub fn write_framed_chars<I>(generator: &dyn StreamHeaderGenerator, chars: I, out: &mut Vec<u8>) -> crate::Result<usize>
where
	I: IntoIterator<Item = char>,
{
	let start = out.len();
	let provisional = generator.descriptor(-1);
	out.extend_from_slice(provisional.bytes());

	let payload_start = out.len();
	let mut units = 0usize;
	for c in chars {
		units += c.len_utf16();
		utf::encode_into(std::slice::from_ref(&c), out);
	}

	let length = if generator.expects_char_count() {
		units as i64
	} else {
		(out.len() - payload_start) as i64
	};

	if generator.can_encode(length) {
		let revised = provisional.update_length(length, false)?;
		revised.copy_into(out, start);
	} else {
		generator.write_eof_to(out, length)?;
	}

	Ok(out.len() - start)
}
