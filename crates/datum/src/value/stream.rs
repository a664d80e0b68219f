// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::io::{self, Read};

use tracing::trace;

use crate::error::StreamError;

/// A readable stream that knows its byte offset and can be moved.
///
/// `reposition` either lands exactly on `offset`, or fails with
/// [`StreamError::EndOfData`] after resetting the stream to offset 0. An
/// offset at or beyond the end of the stream is a failure.
pub trait PositionedStream: Read + Send {
	fn position(&self) -> u64;

	fn reposition(&mut self, offset: u64) -> crate::Result<()>;
}

/// An in-memory [`PositionedStream`] over an owned buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStream {
	data: Vec<u8>,
	position: usize,
}

impl MemoryStream {
	pub fn new(data: impl Into<Vec<u8>>) -> Self {
		Self {
			data: data.into(),
			position: 0,
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

impl Read for MemoryStream {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let remaining = &self.data[self.position.min(self.data.len())..];
		let n = remaining.len().min(buf.len());
		buf[..n].copy_from_slice(&remaining[..n]);
		self.position += n;
		Ok(n)
	}
}

impl PositionedStream for MemoryStream {
	fn position(&self) -> u64 {
		self.position as u64
	}

	fn reposition(&mut self, offset: u64) -> crate::Result<()> {
		if offset >= self.data.len() as u64 {
			self.position = 0;
			trace!(offset, end = self.data.len(), "reposition past end, reset to start");
			crate::return_error!(StreamError::EndOfData {
				requested: offset,
				end: self.data.len() as u64,
			});
		}
		self.position = offset as usize;
		trace!(offset, "repositioned");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_reposition_within_bounds() {
		let mut stream = MemoryStream::new(vec![1u8, 2, 3, 4]);
		stream.reposition(2).unwrap();
		assert_eq!(stream.position(), 2);

		let mut buf = [0u8; 2];
		stream.read_exact(&mut buf).unwrap();
		assert_eq!(buf, [3, 4]);
		assert_eq!(stream.position(), 4);
	}

	#[test]
	fn test_reposition_at_end_resets() {
		let mut stream = MemoryStream::new(vec![1u8, 2, 3]);
		stream.reposition(1).unwrap();

		let err = stream.reposition(3).unwrap_err();
		assert_eq!(err.code(), "STREAM_002");
		assert_eq!(stream.position(), 0);
	}

	#[test]
	fn test_reposition_beyond_end_resets() {
		let mut stream = MemoryStream::new(vec![1u8, 2, 3]);
		let mut buf = [0u8; 2];
		stream.read_exact(&mut buf).unwrap();

		assert!(stream.reposition(100).is_err());
		assert_eq!(stream.position(), 0);
		assert_eq!(stream.len(), 3);
		assert!(MemoryStream::default().is_empty());

		let mut all = Vec::new();
		stream.read_to_end(&mut all).unwrap();
		assert_eq!(all, vec![1, 2, 3]);
	}
}
