//! Structured errors for fuzzy search query builders.
//!
//! Every failure raised while building or running a fuzzy search is a
//! [`StructuredError`]: a message, an integer code, an optional chained
//! cause, the source location where it was raised, an [`ErrorKind`] tag, and
//! a free-form [`ContextMap`] of debugging entries that can be extended as
//! the error travels up the call chain. [`StructuredError::to_record`]
//! flattens all of it into an [`ErrorRecord`] for logging and monitoring.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `fuzzy_search_error::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Basic Error with Context
//!
//! ```
//! use fuzzy_search_error::{context_map, StructuredError};
//!
//! let err = StructuredError::new("bad algorithm")
//!     .with_context_map(context_map! { "algorithm" => "xyz" })
//!     .with_code(400)
//!     .with_context("model", "User");
//!
//! assert_eq!(err.to_string(), r#"bad algorithm (code: 400) {algorithm="xyz", model="User"}"#);
//!
//! let record = err.to_record();
//! assert_eq!(record.error_type, "StructuredError");
//! assert_eq!(record.context.len(), 2);
//! ```
//!
//! ## Kinds and Causes
//!
//! ```
//! use fuzzy_search_error::prelude::*;
//!
//! fn resolve_threshold(raw: &str) -> SearchResult<f64> {
//!     raw.parse::<f64>()
//!         .search_err_kind(ErrorKind::InvalidConfig, "fuzzy threshold is not a number")
//!         .with_context("threshold", raw)
//! }
//!
//! let err = resolve_threshold("very").unwrap_err();
//! assert!(err.is_kind(ErrorKind::InvalidConfig));
//! assert_eq!(err.causes().count(), 1);
//! ```
//!
//! ## Fingerprints
//!
//! ```
//! use fuzzy_search_error::{ErrorKind, StructuredError};
//!
//! let first = StructuredError::of_kind(ErrorKind::EmptySearchTerm, "term is empty");
//! let second = StructuredError::of_kind(ErrorKind::EmptySearchTerm, "term is empty");
//!
//! // Different construction sites, same failure.
//! assert_eq!(first.fingerprint(), second.fingerprint());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Error handling macros for context and error creation
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits shared by the error family
pub mod traits;
/// StructuredError and the values it carries
pub mod types;

/// Async extensions for error enrichment (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tracing integration for reporting errors (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    error_formatter::{ErrorFormatConfig, ErrorFormatter},
    BoxedSearchResult, BoxedStructuredError, ContextMap, ContextValue, ErrorKind, ErrorRecord,
    FingerprintConfig, SearchResult, SharedCause, SourceLocation, StructuredError,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
