//! Core traits for working with the search error family.
//!
//! - [`SearchError`]: capability set shared by every error of the family
//! - [`ResultExt`]: wraps foreign errors into a [`StructuredError`](crate::StructuredError)
//! - [`ContextResultExt`]: enriches a failing result with context entries
//!
//! # Examples
//!
//! ```
//! use fuzzy_search_error::traits::{ContextResultExt, ResultExt, SearchError};
//!
//! let result: Result<u32, std::num::ParseIntError> = "ten".parse();
//! let err = result
//!     .search_err("limit is not a number")
//!     .with_context("limit", "ten")
//!     .unwrap_err();
//!
//! assert_eq!(SearchError::message(&err), "limit is not a number");
//! assert_eq!(err.context().len(), 1);
//! ```

pub mod result_ext;
pub mod search_error;

pub use result_ext::{ContextResultExt, ResultExt};
pub use search_error::{find_search_error, SearchError};
