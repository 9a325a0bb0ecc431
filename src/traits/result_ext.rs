//! Extension traits for ergonomic error wrapping and enrichment on `Result`.
//!
//! - [`ResultExt`] turns any foreign error (a driver error, a parse error)
//!   into a [`StructuredError`] that keeps the original as its cause.
//! - [`ContextResultExt`] attaches context entries to a `StructuredError`
//!   that is already travelling up the call chain.
//!
//! # Examples
//!
//! ```
//! use fuzzy_search_error::traits::{ContextResultExt, ResultExt};
//! use fuzzy_search_error::{ErrorKind, SearchResult};
//!
//! fn parse_threshold(raw: &str) -> SearchResult<u8> {
//!     raw.parse::<u8>()
//!         .search_err_kind(ErrorKind::InvalidConfig, "threshold is not a number")
//!         .with_context("raw", raw)
//! }
//!
//! let err = parse_threshold("high").unwrap_err();
//! assert!(err.is_kind(ErrorKind::InvalidConfig));
//! assert_eq!(err.context().get("raw").and_then(|v| v.as_str()), Some("high"));
//! assert!(err.cause().is_some());
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;

use crate::types::{ContextValue, ErrorKind, StructuredError};

/// Extension trait that wraps foreign errors into [`StructuredError`].
///
/// The wrapped error becomes the cause, and the source location recorded is
/// the line calling these methods.
pub trait ResultExt<T, E> {
    /// Wraps the error with `message`, keeping it as the cause.
    fn search_err(self, message: impl Into<String>) -> Result<T, StructuredError>;

    /// Wraps the error with `message` and tags it with `kind`.
    fn search_err_kind(
        self,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Result<T, StructuredError>;

    /// Wraps the error with a message computed from it.
    ///
    /// The closure only runs on the failure path.
    fn search_err_with<F>(self, f: F) -> Result<T, StructuredError>
    where
        F: FnOnce(&E) -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn search_err(self, message: impl Into<String>) -> Result<T, StructuredError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(StructuredError::new(message).with_cause(err)),
        }
    }

    #[track_caller]
    #[inline]
    fn search_err_kind(
        self,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Result<T, StructuredError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(StructuredError::of_kind(kind, message).with_cause(err)),
        }
    }

    #[track_caller]
    #[inline]
    fn search_err_with<F>(self, f: F) -> Result<T, StructuredError>
    where
        F: FnOnce(&E) -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let message = f(&err);
                Err(StructuredError::new(message).with_cause(err))
            },
        }
    }
}

/// Extension trait for adding context to results that already carry a
/// [`StructuredError`], boxed or not.
///
/// ```
/// use fuzzy_search_error::traits::ContextResultExt;
/// use fuzzy_search_error::{BoxedSearchResult, StructuredError};
///
/// fn inner() -> BoxedSearchResult<()> {
///     Err(Box::new(StructuredError::new("no searchable columns")))
/// }
///
/// fn outer() -> BoxedSearchResult<()> {
///     inner().with_context("model", "Post").with_context_with("columns", || Vec::<String>::new())
/// }
///
/// let err = outer().unwrap_err();
/// assert_eq!(err.context().len(), 2);
/// ```
pub trait ContextResultExt<T>: Sized {
    /// Inserts or overwrites a context entry on the failure path.
    fn with_context<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>;

    /// Like [`with_context`](Self::with_context), computing the value only
    /// when the result is an error.
    fn with_context_with<K, V, F>(self, key: K, f: F) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
        F: FnOnce() -> V;
}

impl<T> ContextResultExt<T> for Result<T, StructuredError> {
    #[inline]
    fn with_context<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.map_err(|err| err.with_context(key, value))
    }

    #[inline]
    fn with_context_with<K, V, F>(self, key: K, f: F) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
        F: FnOnce() -> V,
    {
        self.map_err(|err| err.with_context(key, f()))
    }
}

impl<T> ContextResultExt<T> for Result<T, Box<StructuredError>> {
    #[inline]
    fn with_context<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.map_err(|mut err| {
            err.insert_context(key, value);
            err
        })
    }

    #[inline]
    fn with_context_with<K, V, F>(self, key: K, f: F) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
        F: FnOnce() -> V,
    {
        self.map_err(|mut err| {
            err.insert_context(key, f());
            err
        })
    }
}
