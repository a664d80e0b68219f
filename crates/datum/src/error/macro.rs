// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic or a domain error into [`crate::Error`].
#[macro_export]
macro_rules! error {
	($err:expr) => {
		$crate::error::Error::from($err)
	};
}

#[macro_export]
macro_rules! err {
	($err:expr) => {
		Err($crate::error!($err))
	};
}

#[macro_export]
macro_rules! return_error {
	($err:expr) => {
		return $crate::err!($err)
	};
}
