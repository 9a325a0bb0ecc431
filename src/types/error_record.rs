//! Flattened, loggable snapshot of a [`StructuredError`].
//!
//! The record is what a logging or monitoring sink receives. Its shape is the
//! exported contract of the error family:
//!
//! | field     | content                                               |
//! |-----------|-------------------------------------------------------|
//! | `type`    | type name of the error kind (`StructuredError`, ...)  |
//! | `message` | the error message                                     |
//! | `code`    | the integer code                                      |
//! | `context` | the full context mapping, in insertion order          |
//! | `file`    | source file where the error was constructed           |
//! | `line`    | source line where the error was constructed           |
//! | `column`  | source column where the error was constructed         |
//! | `causes`  | messages of the cause chain, outermost first          |
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::types::{ContextMap, StructuredError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owned structured export of a [`StructuredError`].
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::{context_map, StructuredError};
///
/// let err = StructuredError::new("bad algorithm")
///     .with_context_map(context_map! { "algorithm" => "xyz" })
///     .with_code(400);
///
/// let record = err.to_record();
/// assert_eq!(record.message, "bad algorithm");
/// assert_eq!(record.code, 400);
/// assert_eq!(record.context, context_map! { "algorithm" => "xyz" });
/// assert!(record.line > 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorRecord {
    /// Type name of the kind, serialized as `type`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub error_type: String,
    /// Error message.
    pub message: String,
    /// Error code.
    pub code: i64,
    /// Context at export time.
    pub context: ContextMap,
    /// File where the error was raised.
    pub file: String,
    /// Line where the error was raised.
    pub line: u32,
    /// Column where the error was raised.
    #[cfg_attr(feature = "serde", serde(default))]
    pub column: u32,
    /// Rendered cause chain, outermost first.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub causes: Vec<String>,
}

impl From<&StructuredError> for ErrorRecord {
    fn from(err: &StructuredError) -> Self {
        let location = err.location();
        Self {
            error_type: err.kind().type_name().to_string(),
            message: err.message().to_string(),
            code: err.code(),
            context: err.context().clone(),
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
            causes: err.causes().map(|cause| cause.to_string()).collect(),
        }
    }
}

impl From<StructuredError> for ErrorRecord {
    #[inline]
    fn from(err: StructuredError) -> Self {
        Self::from(&err)
    }
}

/// Single-line log form: `Type: message (code: N) {context} at file:line`.
impl Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.message)?;
        if self.code != 0 {
            write!(f, " (code: {})", self.code)?;
        }
        if !self.context.is_empty() {
            write!(f, " {}", self.context)?;
        }
        write!(f, " at {}:{}", self.file, self.line)?;
        for cause in &self.causes {
            write!(f, "; caused by: {cause}")?;
        }
        Ok(())
    }
}
