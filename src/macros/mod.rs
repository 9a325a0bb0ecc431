//! Ergonomic macros for building errors and their context.
//!
//! - [`macro@crate::context_map`] - Builds a [`ContextMap`](crate::types::ContextMap)
//!   from `key => value` pairs.
//! - [`macro@crate::search_error`] - Builds a [`StructuredError`](crate::StructuredError)
//!   with a `format!`-style message, recording the macro call site as its location.
//! - [`macro@crate::ensure_search`] - Returns early with an error when a condition fails.
//! - [`macro@crate::backtrace`] - Captures the current backtrace as a context value
//!   (requires the `std` feature).
//!
//! # Examples
//!
//! ```
//! use fuzzy_search_error::{context_map, ensure_search, search_error, ErrorKind, SearchResult};
//!
//! fn normalize(term: &str) -> SearchResult<String> {
//!     let trimmed = term.trim();
//!     ensure_search!(!trimmed.is_empty(), ErrorKind::EmptySearchTerm; "search term is empty");
//!     Ok(trimmed.to_lowercase())
//! }
//!
//! assert_eq!(normalize("  Jon ").unwrap(), "jon");
//! assert!(normalize("   ").unwrap_err().is_kind(ErrorKind::EmptySearchTerm));
//!
//! let err = search_error!("unknown algorithm '{}'", "xyz")
//!     .with_context_map(context_map! {
//!         "algorithm" => "xyz",
//!         "supported" => vec!["levenshtein", "trigram"],
//!     });
//! assert_eq!(err.message(), "unknown algorithm 'xyz'");
//! ```

/// Builds a [`ContextMap`](crate::types::ContextMap) from `key => value` pairs.
///
/// Later pairs overwrite earlier ones with the same key.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::context_map;
///
/// let ctx = context_map! {
///     "term" => "jonh",
///     "threshold" => 0.8,
///     "columns" => vec!["name", "email"],
/// };
/// assert_eq!(ctx.len(), 3);
/// assert!(context_map! {}.is_empty());
/// ```
#[macro_export]
macro_rules! context_map {
    () => {
        $crate::types::ContextMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::types::ContextMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}

/// Builds a [`StructuredError`](crate::StructuredError) with a formatted message.
///
/// An optional [`ErrorKind`](crate::ErrorKind) followed by `;` selects the kind.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::{search_error, ErrorKind};
///
/// let column = "nickname";
/// let err = search_error!(
///     ErrorKind::SearchableColumnsNotFound;
///     "column '{}' is not searchable",
///     column
/// );
/// assert!(err.is_kind(ErrorKind::SearchableColumnsNotFound));
/// assert_eq!(err.message(), "column 'nickname' is not searchable");
///
/// let plain = search_error!("search failed");
/// assert!(plain.is_kind(ErrorKind::Generic));
/// ```
#[macro_export]
macro_rules! search_error {
    ($kind:expr; $($arg:tt)+) => {
        $crate::StructuredError::of_kind($kind, $crate::__private::format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::StructuredError::new($crate::__private::format!($($arg)+))
    };
}

/// Returns early with a [`StructuredError`](crate::StructuredError) unless
/// the condition holds.
///
/// The error is converted with `Into`, so the enclosing function may return
/// a boxed error or any error type implementing `From<StructuredError>`.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::{ensure_search, BoxedSearchResult, ErrorKind};
///
/// fn check_threshold(threshold: f64) -> BoxedSearchResult<f64> {
///     ensure_search!(
///         (0.0..=1.0).contains(&threshold),
///         ErrorKind::InvalidConfig;
///         "threshold {} is outside 0..=1",
///         threshold
///     );
///     Ok(threshold)
/// }
///
/// assert!(check_threshold(0.5).is_ok());
/// assert_eq!(check_threshold(2.0).unwrap_err().message(), "threshold 2 is outside 0..=1");
/// ```
#[macro_export]
macro_rules! ensure_search {
    ($cond:expr, $kind:expr; $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err(
                $crate::search_error!($kind; $($arg)+).into(),
            );
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err($crate::search_error!($($arg)+).into());
        }
    };
}

/// Captures the current backtrace as a [`ContextValue`](crate::ContextValue).
///
/// Uses [`std::backtrace::Backtrace::capture()`], so the content depends on
/// `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE`.
///
/// # Examples
///
/// ```ignore
/// use fuzzy_search_error::{backtrace, StructuredError};
///
/// let err = StructuredError::new("query failed").with_context("backtrace", backtrace!());
/// assert!(err.context().contains_key("backtrace"));
/// ```
#[macro_export]
#[cfg(feature = "std")]
macro_rules! backtrace {
    () => {
        $crate::ContextValue::Str(::std::backtrace::Backtrace::capture().to_string())
    };
}
