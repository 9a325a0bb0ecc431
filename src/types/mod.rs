//! Error types and utilities.
//!
//! This module holds [`StructuredError`] and the values it is made of:
//! the [`ContextMap`] of [`ContextValue`]s, the [`ErrorKind`] tag, the
//! captured [`SourceLocation`], and the exported [`ErrorRecord`].
//!
//! # Examples
//!
//! ```
//! use fuzzy_search_error::{ErrorKind, StructuredError};
//!
//! let err = StructuredError::of_kind(ErrorKind::InvalidAlgorithm, "unsupported algorithm")
//!     .with_context("algorithm", "xyz")
//!     .with_code(400);
//!
//! println!("{}", err);
//! // Output: unsupported algorithm (code: 400) {algorithm="xyz"}
//! ```
use alloc::boxed::Box;
use smallvec::SmallVec;

pub mod context_map;
pub mod context_value;
pub mod error_formatter;
pub mod error_kind;
pub mod error_record;
pub mod location;
pub mod structured_error;

pub use context_map::ContextMap;
pub use context_value::ContextValue;
pub use error_kind::ErrorKind;
pub use error_record::ErrorRecord;
pub use location::SourceLocation;
pub use structured_error::*;

/// SmallVec-backed collection used for context storage.
///
/// Uses inline storage for one element to avoid a heap allocation in the
/// common case of a single attached entry.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Result alias that fails with a [`StructuredError`].
pub type SearchResult<T> = Result<T, StructuredError>;

/// Boxed [`StructuredError`] for reduced stack size.
pub type BoxedStructuredError = Box<StructuredError>;

/// Result alias with a boxed [`StructuredError`] for reduced stack size.
pub type BoxedSearchResult<T> = Result<T, BoxedStructuredError>;
