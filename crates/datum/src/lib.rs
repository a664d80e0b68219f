// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Value representation for the storage and wire layers.
//!
//! Every column value that crosses execution, storage or a client protocol
//! is represented by [`Value`]. This crate owns the rules that can corrupt
//! persisted data when they are wrong:
//!
//! * [`format`] frames streamed character and binary values with a length
//!   header and, when the length cannot be encoded, an end-of-stream marker.
//! * [`normalize`] applies SQL assignment and cast width semantics.
//! * [`ordering`] and [`logic`] implement comparisons under three-valued
//!   logic and type precedence.

#![cfg_attr(not(debug_assertions), deny(warnings))]
#![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
#![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub mod error;
pub mod format;
pub mod logic;
pub mod normalize;
pub mod ordering;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic};
pub use format::FormatConfig;
pub use logic::Truth;
pub use normalize::TruncationWarning;
pub use ordering::{BinaryCollator, Collator, ComparisonOp};
pub use value::{Category, DataType, Family, MemoryStream, PositionedStream, Precedence, Repr, TruncationPolicy, Value};

pub type Result<T> = std::result::Result<T, Error>;
