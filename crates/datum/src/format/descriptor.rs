// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::debug;

use crate::error::StreamError;

/// How one header byte follows the value length when a header is revised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shift {
	/// The byte holds `(length >> n) & 0xFF`.
	Bits(u8),
	/// The byte is unrelated to the length (flag or version byte).
	Fixed,
}

/// One concrete stream header, as written in front of a payload.
///
/// Descriptors are immutable. A descriptor built with an update recipe can
/// produce a revised copy once the true length is known; one built without
/// a recipe is final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderDescriptor {
	bytes: Vec<u8>,
	recipe: Option<Vec<Shift>>,
	char_count: bool,
	write_eof: bool,
}

impl HeaderDescriptor {
	/// Creates an updatable descriptor. The recipe needs one entry per
	/// header byte.
	pub fn new(bytes: Vec<u8>, recipe: Vec<Shift>, char_count: bool, write_eof: bool) -> crate::Result<Self> {
		if recipe.len() != bytes.len() {
			crate::return_error!(StreamError::RecipeLength {
				recipe: recipe.len(),
				header: bytes.len(),
			});
		}
		Ok(Self::with_recipe(bytes, recipe, char_count, write_eof))
	}

	/// Creates a descriptor whose length can never be revised.
	pub fn fixed(bytes: Vec<u8>, char_count: bool, write_eof: bool) -> Self {
		Self {
			bytes,
			recipe: None,
			char_count,
			write_eof,
		}
	}

	pub(crate) fn with_recipe(bytes: Vec<u8>, recipe: Vec<Shift>, char_count: bool, write_eof: bool) -> Self {
		debug_assert_eq!(bytes.len(), recipe.len());
		Self {
			bytes,
			recipe: Some(recipe),
			char_count,
			write_eof,
		}
	}

	/// Copies the header bytes into `buffer` at `offset`.
	///
	/// Panics if the header does not fit, like slice copies do.
	pub fn copy_into(&self, buffer: &mut [u8], offset: usize) -> usize {
		buffer[offset..offset + self.bytes.len()].copy_from_slice(&self.bytes);
		self.bytes.len()
	}

	pub fn header_length(&self) -> usize {
		self.bytes.len()
	}

	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Whether the encoded length counts characters rather than bytes.
	pub fn is_char_count(&self) -> bool {
		self.char_count
	}

	/// Whether the payload must be terminated by the EOF marker.
	pub fn writes_eof(&self) -> bool {
		self.write_eof
	}

	pub fn is_updatable(&self) -> bool {
		self.recipe.is_some()
	}

	/// Returns a copy of this header encoding `new_length`. Negative lengths
	/// encode as zero.
	pub fn update_length(&self, new_length: i64, new_write_eof: bool) -> crate::Result<HeaderDescriptor> {
		let Some(recipe) = &self.recipe else {
			crate::return_error!(StreamError::UpdateNotAllowed);
		};

		let length = new_length.max(0);
		let bytes = self
			.bytes
			.iter()
			.zip(recipe)
			.map(|(byte, shift)| match shift {
				Shift::Bits(n) => ((length >> n) & 0xFF) as u8,
				Shift::Fixed => *byte,
			})
			.collect::<Vec<_>>();

		debug!(length = new_length, write_eof = new_write_eof, "revised stream header");
		Ok(Self {
			bytes,
			recipe: Some(recipe.clone()),
			char_count: self.char_count,
			write_eof: new_write_eof,
		})
	}
}
