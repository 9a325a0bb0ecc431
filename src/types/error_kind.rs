//! Tags distinguishing the failure kinds of the fuzzy search error family.
//!
//! Every kind shares the same shape (message, code, context, cause); the tag
//! is what lets callers handle "any search error" with one arm and a specific
//! failure with another.
//!
//! ```
//! use fuzzy_search_error::{ErrorKind, StructuredError};
//!
//! fn describe(err: &StructuredError) -> &'static str {
//!     match err.kind() {
//!         ErrorKind::EmptySearchTerm => "nothing to search for",
//!         ErrorKind::SearchableColumnsNotFound => "model has no searchable columns",
//!         _ => "search failed",
//!     }
//! }
//!
//! let err = StructuredError::of_kind(ErrorKind::EmptySearchTerm, "term is empty");
//! assert_eq!(describe(&err), "nothing to search for");
//! ```
use core::fmt::{self, Display};

/// Failure kind carried by a [`StructuredError`](crate::StructuredError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The base kind, used when no more specific kind applies.
    #[default]
    Generic,
    /// The search term was empty after normalization.
    EmptySearchTerm,
    /// The requested matching algorithm is not supported.
    InvalidAlgorithm,
    /// The search configuration is invalid.
    InvalidConfig,
    /// No searchable columns could be resolved for the queried model.
    SearchableColumnsNotFound,
    /// A kind defined outside this crate, identified by its type name.
    Custom(&'static str),
}

impl ErrorKind {
    /// Name reported as the error type in exported records.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Generic => "StructuredError",
            Self::EmptySearchTerm => "EmptySearchTermError",
            Self::InvalidAlgorithm => "InvalidAlgorithmError",
            Self::InvalidConfig => "InvalidConfigError",
            Self::SearchableColumnsNotFound => "SearchableColumnsNotFoundError",
            Self::Custom(name) => *name,
        }
    }

    /// Returns `true` for [`ErrorKind::Generic`].
    #[inline]
    pub const fn is_generic(&self) -> bool {
        matches!(self, Self::Generic)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
