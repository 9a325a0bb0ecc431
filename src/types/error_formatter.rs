//! Human-readable rendering of [`StructuredError`] for log lines and reports.

use alloc::string::String;
use core::fmt::{self, Display, Write};

use crate::types::{ContextValue, StructuredError};

/// Trait for customizing how an error is rendered.
///
/// Only [`format_error`](ErrorFormatter::format_error) is required; the entry
/// hook lets implementors change how single context entries look.
pub trait ErrorFormatter {
    /// Renders one context entry, `key=value` by default.
    fn format_entry(&self, key: &str, value: &ContextValue) -> String {
        let mut out = String::new();
        let _ = write!(out, "{key}={value}");
        out
    }

    /// Renders the whole error.
    fn format_error(&self, error: &StructuredError) -> String;
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    /// Separator between context entries on a single line.
    pub separator: String,
    /// Indentation of list items in multiline output.
    pub indent: String,
    /// Renders one section per line instead of a single line.
    pub multiline: bool,
    /// Prefixes the kind's type name.
    pub show_kind: bool,
    /// Shows a non-zero code as `(code: N)`.
    pub show_code: bool,
    /// Shows the context entries.
    pub show_context: bool,
    /// Shows the construction site.
    pub show_location: bool,
    /// Lists the cause chain.
    pub show_causes: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: ", ".into(),
            indent: "  ".into(),
            multiline: false,
            show_kind: false,
            show_code: true,
            show_context: true,
            show_location: false,
            show_causes: false,
        }
    }
}

impl ErrorFormatConfig {
    /// Multiline report with kind, location and the cause chain.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            multiline: true,
            show_kind: true,
            show_location: true,
            show_causes: true,
            ..Default::default()
        }
    }

    /// Message and code only.
    #[inline]
    pub fn compact() -> Self {
        Self { show_context: false, ..Default::default() }
    }

    /// Everything on one line, for line-oriented log sinks.
    #[inline]
    pub fn log_line() -> Self {
        Self { show_kind: true, show_location: true, show_causes: true, ..Default::default() }
    }

    /// Default layout without the code.
    #[inline]
    pub fn no_code() -> Self {
        Self { show_code: false, ..Default::default() }
    }

    pub(crate) fn render<W: Write>(&self, error: &StructuredError, out: &mut W) -> fmt::Result {
        if self.multiline {
            self.render_multiline(error, out)
        } else {
            self.render_single_line(error, out)
        }
    }

    fn render_single_line<W: Write>(&self, error: &StructuredError, out: &mut W) -> fmt::Result {
        if self.show_kind {
            write!(out, "{}: ", error.kind())?;
        }
        out.write_str(error.message())?;

        if self.show_code && error.code() != 0 {
            write!(out, " (code: {})", error.code())?;
        }

        if self.show_context && !error.context().is_empty() {
            out.write_str(" {")?;
            for (i, (key, value)) in error.context().iter().enumerate() {
                if i > 0 {
                    out.write_str(&self.separator)?;
                }
                out.write_str(&self.format_entry(key, value))?;
            }
            out.write_str("}")?;
        }

        if self.show_location {
            write!(out, " at {}", error.location())?;
        }

        if self.show_causes {
            for cause in error.causes() {
                write!(out, "; caused by: {cause}")?;
            }
        }

        Ok(())
    }

    fn render_multiline<W: Write>(&self, error: &StructuredError, out: &mut W) -> fmt::Result {
        write!(out, "Error: {}", error.message())?;
        if self.show_code && error.code() != 0 {
            write!(out, " (code: {})", error.code())?;
        }

        if self.show_kind {
            write!(out, "\nKind: {}", error.kind())?;
        }

        if self.show_location {
            write!(out, "\nLocation: {}", error.location())?;
        }

        if self.show_context && !error.context().is_empty() {
            out.write_str("\nContext:")?;
            for (key, value) in error.context() {
                write!(out, "\n{}- {}", self.indent, self.format_entry(key, value))?;
            }
        }

        if self.show_causes {
            let mut causes = error.causes().peekable();
            if causes.peek().is_some() {
                out.write_str("\nCaused by:")?;
                for cause in causes {
                    write!(out, "\n{}- {}", self.indent, cause)?;
                }
            }
        }

        Ok(())
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_error(&self, error: &StructuredError) -> String {
        let mut out = String::with_capacity(error.message().len() + 32);
        let _ = self.render(error, &mut out);
        out
    }
}

/// Builder for customizing error display output.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::StructuredError;
///
/// let err = StructuredError::new("no searchable columns")
///     .with_context("model", "Post")
///     .with_code(500);
///
/// assert_eq!(err.fmt().to_string(), r#"no searchable columns (code: 500) {model="Post"}"#);
/// assert_eq!(err.fmt().show_code(false).show_context(false).to_string(), "no searchable columns");
/// ```
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a StructuredError,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    /// Starts from the default single-line configuration.
    pub fn new(error: &'a StructuredError) -> Self {
        Self { error, config: ErrorFormatConfig::default() }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the separator between context entries.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Toggles the kind prefix.
    pub fn show_kind(mut self, show: bool) -> Self {
        self.config.show_kind = show;
        self
    }

    /// Toggles the code.
    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    /// Toggles the context entries.
    pub fn show_context(mut self, show: bool) -> Self {
        self.config.show_context = show;
        self
    }

    /// Toggles the construction site.
    pub fn show_location(mut self, show: bool) -> Self {
        self.config.show_location = show;
        self
    }

    /// Toggles the cause chain.
    pub fn show_causes(mut self, show: bool) -> Self {
        self.config.show_causes = show;
        self
    }

    /// Switches between single-line and multiline output.
    pub fn multiline(mut self, enabled: bool) -> Self {
        self.config.multiline = enabled;
        self
    }

    /// Applies [`ErrorFormatConfig::pretty`].
    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    /// Applies [`ErrorFormatConfig::compact`].
    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    /// Applies [`ErrorFormatConfig::log_line`].
    pub fn log_line(mut self) -> Self {
        self.config = ErrorFormatConfig::log_line();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config.render(self.error, f)
    }
}
