//! Source position captured where an error is raised.

use core::fmt::{self, Display};
use core::panic::Location;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Source position where an error was constructed.
///
/// Captured through `#[track_caller]`, so constructors report the line of
/// the code that created the error rather than a line inside this crate.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::SourceLocation;
///
/// let here = SourceLocation::caller();
/// assert!(here.file().ends_with(".rs"));
/// assert!(here.line() > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
    column: u32,
}

impl SourceLocation {
    /// Captures the location of the outermost `#[track_caller]` frame.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Builds a location from explicit parts, e.g. `file!()` and `line!()`.
    #[inline]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Source file path.
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// 1-based line number.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number.
    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    #[inline]
    fn from(location: &'static Location<'static>) -> Self {
        Self { file: location.file(), line: location.line(), column: location.column() }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
