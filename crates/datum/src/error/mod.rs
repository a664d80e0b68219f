// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	io,
	ops::{Deref, DerefMut},
};

mod diagnostic;
mod r#macro;
mod render;
mod stream;
mod r#type;

pub use diagnostic::{Diagnostic, IntoDiagnostic};
pub use render::DefaultRenderer;
pub use stream::StreamError;
pub use r#type::TypeError;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		self.0.code.as_str()
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Self(Box::new(diagnostic))
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Self(Box::new(err.into_diagnostic()))
	}
}

impl From<StreamError> for Error {
	fn from(err: StreamError) -> Self {
		Self(Box::new(err.into_diagnostic()))
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Self {
		StreamError::from(err).into()
	}
}
