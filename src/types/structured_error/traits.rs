use super::StructuredError;
use alloc::sync::Arc;
use core::fmt::Display;

impl Display for StructuredError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().pretty(), f)
    }
}

impl core::error::Error for StructuredError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn core::error::Error + 'static))
    }
}

/// Causes compare by identity: two errors are equal only if they point at
/// the same shared cause (or both have none).
impl PartialEq for StructuredError {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };

        same_cause
            && self.kind == other.kind
            && self.code == other.code
            && self.message == other.message
            && self.location == other.location
            && self.context == other.context
    }
}
