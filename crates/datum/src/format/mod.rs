// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Stored and wire form of values.
//!
//! Character values are written as a length header, a modified UTF-8
//! payload and, when the header could not carry the length, the
//! [`EOF_MARKER`]. Binary values carry a variable length prefix.

pub mod binary;
mod config;
mod descriptor;
mod frame;
mod header;
pub mod utf;
mod value;

pub use config::{ClobHeaderFormat, FormatConfig};
pub use descriptor::{HeaderDescriptor, Shift};
pub use frame::write_framed_chars;
pub use header::{
	CharStreamHeader, ClobStreamHeader, EOF_MARKER, MAX_CLOB_LENGTH, MAX_HEADER_LENGTH, MAX_SHORT_LENGTH, ReadHeader,
	StreamHeaderGenerator, parse_char_header, parse_clob_header,
};
pub use value::{materialize, read_value, write_value};
