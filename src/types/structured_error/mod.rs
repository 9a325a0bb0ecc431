//! Structured error type with keyed debugging context and a chained cause.
//!
//! [`StructuredError`] is the root of the fuzzy search error family. It holds:
//! - A human-readable message and an integer code (`0` unless set)
//! - An insertion-ordered [`ContextMap`] of diagnostic entries
//! - An optional cause, shared through [`Arc`] so it can also live elsewhere
//! - The [`SourceLocation`] where it was constructed
//! - An [`ErrorKind`] tag identifying the specific failure
//!
//! Context is added with the consuming [`with_context`](StructuredError::with_context)
//! builder while the error is being built, or with
//! [`insert_context`](StructuredError::insert_context) once it sits behind a
//! `&mut` further up the call chain.

use alloc::string::String;
use alloc::sync::Arc;
use core::error::Error;

use crate::types::{ContextMap, ContextValue, ErrorKind, ErrorRecord, SourceLocation};

mod fingerprint;
mod traits;

pub use fingerprint::FingerprintConfig;

/// Cause attached to a [`StructuredError`].
///
/// Reference counted so the same underlying failure can be attached to
/// several errors, or kept by the caller, without cloning it.
pub type SharedCause = Arc<dyn Error + Send + Sync + 'static>;

/// Error carrying a message, a code, a cause and free-form context.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::{context_map, StructuredError};
///
/// let err = StructuredError::new("bad algorithm")
///     .with_context_map(context_map! { "algorithm" => "xyz" })
///     .with_code(400)
///     .with_context("model", "User");
///
/// assert_eq!(err.message(), "bad algorithm");
/// assert_eq!(err.code(), 400);
/// assert_eq!(err.context().len(), 2);
///
/// let record = err.to_record();
/// assert_eq!(record.error_type, "StructuredError");
/// assert_eq!(record.code, 400);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct StructuredError {
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
    pub(crate) code: i64,
    pub(crate) context: ContextMap,
    pub(crate) cause: Option<SharedCause>,
    pub(crate) location: SourceLocation,
}

impl StructuredError {
    /// Creates an error of the generic kind with empty context and code `0`.
    #[track_caller]
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Generic, message)
    }

    /// Creates an error tagged with a specific [`ErrorKind`].
    #[track_caller]
    #[inline]
    pub fn of_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: 0,
            context: ContextMap::new(),
            cause: None,
            location: SourceLocation::caller(),
        }
    }

    /// Creates an error from all of its caller-supplied parts at once.
    ///
    /// `context` becomes the error's context as given; nothing is validated.
    #[track_caller]
    pub fn from_parts(
        message: impl Into<String>,
        context: ContextMap,
        code: i64,
        cause: Option<SharedCause>,
    ) -> Self {
        Self {
            kind: ErrorKind::Generic,
            message: message.into(),
            code,
            context,
            cause,
            location: SourceLocation::caller(),
        }
    }

    /// Overrides the recorded location, for wrappers that capture the caller
    /// before the error exists.
    #[inline]
    pub(crate) fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Replaces the whole context mapping.
    #[inline]
    pub fn with_context_map(mut self, context: ContextMap) -> Self {
        self.context = context;
        self
    }

    /// Inserts or overwrites a single context entry.
    ///
    /// Returns the same error, so calls chain:
    ///
    /// ```
    /// use fuzzy_search_error::StructuredError;
    ///
    /// let err = StructuredError::new("query failed")
    ///     .with_context("retry", 1)
    ///     .with_context("retry", 2);
    ///
    /// assert_eq!(err.context().get("retry").and_then(|v| v.as_i64()), Some(2));
    /// ```
    #[inline]
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.context.insert(key, value);
        self
    }

    /// Inserts or overwrites every entry from an iterator.
    #[inline]
    pub fn with_contexts<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.context.extend(entries);
        self
    }

    /// Sets (or overrides) the error code.
    #[inline]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Attaches the error that triggered this one.
    #[inline]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Attaches a cause that is already shared elsewhere.
    #[inline]
    pub fn with_shared_cause(mut self, cause: SharedCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// In-place variant of [`with_context`](Self::with_context) for errors
    /// reached through a mutable reference.
    #[inline]
    pub fn insert_context<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.context.insert(key, value);
        self
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error code, `0` unless set.
    #[inline]
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Returns the failure kind tag.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if the error is tagged with `kind`.
    #[inline]
    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Returns the current context mapping.
    #[inline]
    pub fn context(&self) -> &ContextMap {
        &self.context
    }

    /// Returns the context mapping for in-place edits.
    #[inline]
    pub fn context_mut(&mut self) -> &mut ContextMap {
        &mut self.context
    }

    /// Returns the direct cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&SharedCause> {
        self.cause.as_ref()
    }

    /// Iterates the cause chain, starting with the direct cause and following
    /// each error's `source()`.
    #[inline]
    pub fn causes(&self) -> Causes<'_> {
        Causes { next: self.cause.as_deref().map(|c| c as &(dyn Error + 'static)) }
    }

    /// Where the error was constructed.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Flattens the current state into a loggable [`ErrorRecord`].
    ///
    /// Takes `&self`: exporting never changes the error.
    #[must_use]
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::from(self)
    }

    /// Returns a builder for customizing the error formatting.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> crate::types::error_formatter::ErrorFormatBuilder<'_> {
        crate::types::error_formatter::ErrorFormatBuilder::new(self)
    }

    /// Formats the error using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(
            crate::types::error_formatter::ErrorFormatBuilder<'_>,
        ) -> crate::types::error_formatter::ErrorFormatBuilder<'_>,
    {
        use alloc::string::ToString;
        f(self.fmt()).to_string()
    }

    /// Formats the error using a custom
    /// [`ErrorFormatter`](crate::types::error_formatter::ErrorFormatter).
    #[must_use]
    pub fn format_using<F>(&self, formatter: &F) -> String
    where
        F: crate::types::error_formatter::ErrorFormatter + ?Sized,
    {
        formatter.format_error(self)
    }

    /// Generates a fingerprint for grouping equivalent errors.
    ///
    /// Uses kind, code, message and context keys; context values and the
    /// source location are left out so repeated failures group together.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint_config().compute()
    }

    /// Hex string form of [`fingerprint`](Self::fingerprint).
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint_config().compute_hex()
    }

    /// Creates a fingerprint configuration for customizing fingerprint generation.
    #[must_use]
    pub fn fingerprint_config(&self) -> FingerprintConfig<'_> {
        FingerprintConfig::new(self)
    }
}

/// Iterator over a [`StructuredError`]'s cause chain.
#[derive(Debug, Clone)]
pub struct Causes<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
