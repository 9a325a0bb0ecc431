//! Extension trait for `Future<Output = Result<T, E>>`.

use core::error::Error;
use core::future::Future;

use alloc::string::String;

use crate::traits::SearchError;
use crate::types::{ContextValue, ErrorKind, SourceLocation};

use super::context_future::{ContextFuture, LazyContextEntry, WrapError};

/// Async counterpart of the sync result extensions.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::async_ext::FutureResultExt;
/// use fuzzy_search_error::{ErrorKind, SearchResult, StructuredError};
///
/// async fn lookup(term: &str) -> SearchResult<u32> {
///     if term.is_empty() {
///         return Err(StructuredError::of_kind(ErrorKind::EmptySearchTerm, "term is empty"));
///     }
///     Ok(term.len() as u32)
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let err = lookup("").with_context("term", || "").await.unwrap_err();
/// assert_eq!(err.context().get("term").and_then(|v| v.as_str()), Some(""));
/// # });
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Inserts a context entry into the error, computing the value only if
    /// the future fails.
    fn with_context<K, V, F>(
        self,
        key: K,
        value_fn: F,
    ) -> ContextFuture<Self, LazyContextEntry<K, F>>
    where
        E: SearchError,
        K: Into<String>,
        V: Into<ContextValue>,
        F: FnOnce() -> V;

    /// Wraps a foreign error as the cause of a generic [`StructuredError`](crate::StructuredError).
    fn search_err(self, message: impl Into<String>) -> ContextFuture<Self, WrapError>
    where
        E: Error + Send + Sync + 'static;

    /// Same as [`search_err`](Self::search_err) with an explicit kind.
    fn search_err_kind(
        self,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> ContextFuture<Self, WrapError>
    where
        E: Error + Send + Sync + 'static;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn with_context<K, V, F>(
        self,
        key: K,
        value_fn: F,
    ) -> ContextFuture<Self, LazyContextEntry<K, F>>
    where
        E: SearchError,
        K: Into<String>,
        V: Into<ContextValue>,
        F: FnOnce() -> V,
    {
        ContextFuture::new(self, LazyContextEntry::new(key, value_fn))
    }

    #[inline]
    #[track_caller]
    fn search_err(self, message: impl Into<String>) -> ContextFuture<Self, WrapError>
    where
        E: Error + Send + Sync + 'static,
    {
        ContextFuture::new(
            self,
            WrapError::new(ErrorKind::Generic, message.into(), SourceLocation::caller()),
        )
    }

    #[inline]
    #[track_caller]
    fn search_err_kind(
        self,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> ContextFuture<Self, WrapError>
    where
        E: Error + Send + Sync + 'static,
    {
        ContextFuture::new(self, WrapError::new(kind, message.into(), SourceLocation::caller()))
    }
}
