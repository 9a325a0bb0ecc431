//! Future wrapper that rewrites the error of a `Result`-returning future.

use core::error::Error;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use alloc::string::String;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::traits::SearchError;
use crate::types::{ContextValue, ErrorKind, SourceLocation, StructuredError};

/// One-shot transformation applied to the error of a completed future.
pub trait ErrorMapper<E> {
    /// Error type produced by the mapping.
    type Output;

    /// Consumes the mapper and transforms `error`.
    fn map_error(self, error: E) -> Self::Output;
}

/// Inserts `key` with a lazily computed value into a [`SearchError`].
///
/// The value closure only runs when the future fails.
#[derive(Debug, Clone)]
pub struct LazyContextEntry<K, F> {
    key: K,
    value_fn: F,
}

impl<K, F> LazyContextEntry<K, F> {
    #[inline]
    pub(crate) fn new(key: K, value_fn: F) -> Self {
        Self { key, value_fn }
    }
}

impl<E, K, V, F> ErrorMapper<E> for LazyContextEntry<K, F>
where
    E: SearchError,
    K: Into<String>,
    V: Into<ContextValue>,
    F: FnOnce() -> V,
{
    type Output = E;

    fn map_error(self, mut error: E) -> E {
        error.context_mut().insert(self.key, (self.value_fn)());
        error
    }
}

/// Wraps a foreign error as the cause of a new [`StructuredError`].
///
/// The location is the one captured when the wrapper was attached, not the
/// point where the future happened to complete.
#[derive(Debug, Clone)]
pub struct WrapError {
    kind: ErrorKind,
    message: String,
    location: SourceLocation,
}

impl WrapError {
    #[inline]
    pub(crate) fn new(kind: ErrorKind, message: String, location: SourceLocation) -> Self {
        Self { kind, message, location }
    }
}

impl<E> ErrorMapper<E> for WrapError
where
    E: Error + Send + Sync + 'static,
{
    type Output = StructuredError;

    fn map_error(self, error: E) -> StructuredError {
        StructuredError::of_kind(self.kind, self.message)
            .at(self.location)
            .with_cause(error)
    }
}

pin_project! {
    /// Future returned by [`FutureResultExt`](super::FutureResultExt).
    ///
    /// Polls the inner future and, on `Err`, hands the error to the mapper.
    /// Successful results pass through untouched.
    #[must_use = "futures do nothing unless polled"]
    pub struct ContextFuture<Fut, M> {
        #[pin]
        future: Fut,
        mapper: Option<M>,
    }
}

impl<Fut, M> ContextFuture<Fut, M> {
    #[inline]
    pub(crate) fn new(future: Fut, mapper: M) -> Self {
        Self { future, mapper: Some(mapper) }
    }
}

impl<Fut, M, T, E> Future for ContextFuture<Fut, M>
where
    Fut: Future<Output = Result<T, E>>,
    M: ErrorMapper<E>,
{
    type Output = Result<T, M::Output>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.future.poll(cx) {
            Poll::Ready(Ok(value)) => {
                *this.mapper = None;
                Poll::Ready(Ok(value))
            },
            Poll::Ready(Err(error)) => {
                let mapper = this
                    .mapper
                    .take()
                    .expect("ContextFuture polled after completion");
                Poll::Ready(Err(mapper.map_error(error)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<Fut, M, T, E> FusedFuture for ContextFuture<Fut, M>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    M: ErrorMapper<E>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.mapper.is_none() || self.future.is_terminated()
    }
}
