//! Capability shared by every error of the fuzzy search family.
//!
//! Code that only cares about "some search error" can be written against
//! [`SearchError`] instead of the concrete type, and
//! [`find_search_error`] digs a [`StructuredError`] out of an arbitrary
//! `dyn Error` chain, e.g. one that has already been boxed by an
//! application-level error type.
//!
//! # Examples
//!
//! ```
//! use fuzzy_search_error::traits::SearchError;
//! use fuzzy_search_error::{ErrorKind, StructuredError};
//!
//! fn log_line<E: SearchError>(err: &E) -> String {
//!     format!("[{}] {} ({} context entries)", err.kind(), err.message(), err.context().len())
//! }
//!
//! let err = StructuredError::of_kind(ErrorKind::EmptySearchTerm, "term is empty");
//! assert_eq!(log_line(&err), "[EmptySearchTermError] term is empty (0 context entries)");
//! assert_eq!(
//!     log_line(&Box::new(err)),
//!     "[EmptySearchTermError] term is empty (0 context entries)"
//! );
//! ```
use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;

use crate::types::{
    ContextMap, ContextValue, ErrorKind, ErrorRecord, SharedCause, SourceLocation,
    StructuredError,
};

/// Message, code, cause, context and kind of a search error.
pub trait SearchError: Error {
    /// Human-readable message.
    fn message(&self) -> &str;

    /// Error code, `0` unless set.
    fn code(&self) -> i64;

    /// Underlying cause, if any.
    fn cause(&self) -> Option<&SharedCause>;

    /// Attached context entries.
    fn context(&self) -> &ContextMap;

    /// Attached context entries, for in-place edits.
    fn context_mut(&mut self) -> &mut ContextMap;

    /// Failure kind tag.
    fn kind(&self) -> ErrorKind;

    /// Where the error was raised.
    fn location(&self) -> SourceLocation;

    /// Flattens the error into a loggable record.
    fn to_record(&self) -> ErrorRecord;

    /// Inserts or overwrites a context entry and returns the same error.
    fn with_context<K, V>(self, key: K, value: V) -> Self
    where
        Self: Sized,
        K: Into<String>,
        V: Into<ContextValue>;
}

impl SearchError for StructuredError {
    #[inline]
    fn message(&self) -> &str {
        StructuredError::message(self)
    }

    #[inline]
    fn code(&self) -> i64 {
        StructuredError::code(self)
    }

    #[inline]
    fn cause(&self) -> Option<&SharedCause> {
        StructuredError::cause(self)
    }

    #[inline]
    fn context(&self) -> &ContextMap {
        StructuredError::context(self)
    }

    #[inline]
    fn context_mut(&mut self) -> &mut ContextMap {
        StructuredError::context_mut(self)
    }

    #[inline]
    fn kind(&self) -> ErrorKind {
        StructuredError::kind(self)
    }

    #[inline]
    fn location(&self) -> SourceLocation {
        StructuredError::location(self)
    }

    #[inline]
    fn to_record(&self) -> ErrorRecord {
        StructuredError::to_record(self)
    }

    #[inline]
    fn with_context<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        StructuredError::with_context(self, key, value)
    }
}

impl SearchError for Box<StructuredError> {
    #[inline]
    fn message(&self) -> &str {
        self.as_ref().message()
    }

    #[inline]
    fn code(&self) -> i64 {
        self.as_ref().code()
    }

    #[inline]
    fn cause(&self) -> Option<&SharedCause> {
        self.as_ref().cause()
    }

    #[inline]
    fn context(&self) -> &ContextMap {
        self.as_ref().context()
    }

    #[inline]
    fn context_mut(&mut self) -> &mut ContextMap {
        self.as_mut().context_mut()
    }

    #[inline]
    fn kind(&self) -> ErrorKind {
        self.as_ref().kind()
    }

    #[inline]
    fn location(&self) -> SourceLocation {
        self.as_ref().location()
    }

    #[inline]
    fn to_record(&self) -> ErrorRecord {
        self.as_ref().to_record()
    }

    #[inline]
    fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.as_mut().insert_context(key, value);
        self
    }
}

/// Walks `error` and its `source()` chain, returning the first
/// [`StructuredError`] found.
///
/// ```
/// use fuzzy_search_error::traits::find_search_error;
/// use fuzzy_search_error::{ErrorKind, StructuredError};
///
/// let err = StructuredError::of_kind(ErrorKind::InvalidConfig, "threshold must be positive");
/// let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
///
/// let found = find_search_error(boxed.as_ref()).unwrap();
/// assert!(found.is_kind(ErrorKind::InvalidConfig));
/// ```
pub fn find_search_error<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a StructuredError> {
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(found) = err.downcast_ref::<StructuredError>() {
            return Some(found);
        }
        if let Some(found) = err.downcast_ref::<Box<StructuredError>>() {
            return Some(found.as_ref());
        }
        current = err.source();
    }
    None
}
