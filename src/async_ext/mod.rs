//! Async extensions for fuzzy-search-error.
//!
//! Lets a future that resolves to a `Result` enrich or wrap its error the
//! same way the sync [`ContextResultExt`](crate::traits::ContextResultExt)
//! and [`ResultExt`](crate::traits::ResultExt) do, without awaiting first.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! fuzzy-search-error = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use fuzzy_search_error::async_ext::FutureResultExt;
//!
//! async fn load_columns(model: &str) -> SearchResult<Vec<String>> {
//!     schema_columns(model)
//!         .search_err("could not read the table schema")
//!         .with_context("model", || model.to_string())
//!         .await
//! }
//! ```

mod context_future;
mod future_ext;

pub use context_future::{ContextFuture, ErrorMapper, LazyContextEntry, WrapError};
pub use future_ext::FutureResultExt;
