//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use fuzzy_search_error::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`context_map!`], [`search_error!`], [`ensure_search!`]
//! - **Types**: [`StructuredError`], [`ErrorKind`], [`ContextMap`], [`ContextValue`],
//!   [`ErrorRecord`]
//! - **Traits**: [`ResultExt`], [`ContextResultExt`], [`SearchError`]
//!
//! # Examples
//!
//! ```
//! use fuzzy_search_error::prelude::*;
//!
//! fn searchable_columns(model: &str, columns: &[&str]) -> BoxedSearchResult<Vec<String>> {
//!     ensure_search!(
//!         !columns.is_empty(),
//!         ErrorKind::SearchableColumnsNotFound;
//!         "no searchable columns found for {}",
//!         model
//!     );
//!     Ok(columns.iter().map(|c| c.to_string()).collect())
//! }
//!
//! let err = searchable_columns("Post", &[]).with_context("model", "Post").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::SearchableColumnsNotFound);
//! ```

// Macros
pub use crate::{context_map, ensure_search, search_error};

// Core types
pub use crate::types::{
    BoxedSearchResult, ContextMap, ContextValue, ErrorKind, ErrorRecord, SearchResult,
    StructuredError,
};

// Traits
pub use crate::traits::{ContextResultExt, ResultExt, SearchError};
