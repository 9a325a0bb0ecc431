//! Tracing integration for fuzzy-search-error.
//!
//! [`StructuredError`] never logs by itself; the boundary that handles it
//! decides. This module gives that boundary a one-call way to emit the
//! structured record as a `tracing` event, and a way to capture the active
//! span as error context.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! fuzzy-search-error = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{ContextMap, StructuredError};

/// Context key under which span information is stored.
pub const SPAN_CONTEXT_KEY: &str = "span";

/// Emits `error` as a single `ERROR`-level event.
///
/// Record fields are flattened into event fields so subscribers that emit
/// JSON keep them queryable. Returns the fingerprint that was logged, which
/// callers can hand back to users as an incident reference.
///
/// # Example
///
/// ```rust,ignore
/// use fuzzy_search_error::tracing_ext::report;
///
/// if let Err(err) = run_search(&term) {
///     let incident = report(&err);
///     return Response::internal_error(format!("search failed ({incident:016x})"));
/// }
/// ```
pub fn report(error: &StructuredError) -> u64 {
    let fingerprint = error.fingerprint();
    let location = error.location();

    tracing::error!(
        error.kind = error.kind().type_name(),
        error.code = error.code(),
        error.file = location.file(),
        error.line = location.line(),
        error.context = %error.context(),
        error.causes = error.causes().count(),
        error.fingerprint = fingerprint,
        "{}",
        error.message()
    );

    fingerprint
}

/// Same as [`report`], at `WARN` level, for failures the caller recovers from.
pub fn report_warn(error: &StructuredError) -> u64 {
    let fingerprint = error.fingerprint();
    let location = error.location();

    tracing::warn!(
        error.kind = error.kind().type_name(),
        error.code = error.code(),
        error.file = location.file(),
        error.line = location.line(),
        error.context = %error.context(),
        error.causes = error.causes().count(),
        error.fingerprint = fingerprint,
        "{}",
        error.message()
    );

    fingerprint
}

/// Extension trait that reports the error of a failing result and passes the
/// result through unchanged.
pub trait ReportResultExt: Sized {
    /// Logs the error at `ERROR` level if the result is an `Err`.
    fn report_err(self) -> Self;
}

impl<T> ReportResultExt for Result<T, StructuredError> {
    fn report_err(self) -> Self {
        if let Err(err) = &self {
            report(err);
        }
        self
    }
}

impl<T> ReportResultExt for Result<T, Box<StructuredError>> {
    fn report_err(self) -> Self {
        if let Err(err) = &self {
            report(err);
        }
        self
    }
}

/// Describes a span as context entries.
///
/// A span without metadata, such as [`Span::none()`] or the current span
/// outside any span, produces `{span="none"}`.
pub fn span_context(span: &Span) -> ContextMap {
    let mut map = ContextMap::new();
    match span.metadata() {
        Some(meta) => {
            map.insert(SPAN_CONTEXT_KEY, meta.name());
            map.insert("span.target", meta.target());
        },
        None => {
            map.insert(SPAN_CONTEXT_KEY, "none");
        },
    }
    map
}

/// Extension trait for attaching span information to failing results.
pub trait ResultSpanExt: Sized {
    /// Adds the current span's context to an error.
    fn with_current_span(self) -> Self;

    /// Adds a specific span's context to an error.
    fn with_span(self, span: &Span) -> Self;
}

impl<T> ResultSpanExt for Result<T, StructuredError> {
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Self {
        self.map_err(|err| err.with_contexts(span_context(span)))
    }
}

impl<T> ResultSpanExt for Result<T, Box<StructuredError>> {
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Self {
        self.map_err(|mut err| {
            err.context_mut().merge(span_context(span));
            err
        })
    }
}
