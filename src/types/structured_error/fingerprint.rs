use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use super::StructuredError;

/// Configuration builder for customizing fingerprint generation.
///
/// Context keys are sorted before hashing, so the order in which entries
/// were attached never changes the fingerprint.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::StructuredError;
///
/// let a = StructuredError::new("no columns").with_context("model", "User");
/// let b = StructuredError::new("no columns").with_context("model", "Post");
///
/// // Keys only by default: both group together.
/// assert_eq!(a.fingerprint(), b.fingerprint());
///
/// // Opting into values separates them.
/// let fa = a.fingerprint_config().include_context_values(true).compute();
/// let fb = b.fingerprint_config().include_context_values(true).compute();
/// assert_ne!(fa, fb);
/// ```
pub struct FingerprintConfig<'a> {
    pub(crate) error: &'a StructuredError,
    pub(crate) include_kind: bool,
    pub(crate) include_code: bool,
    pub(crate) include_message: bool,
    pub(crate) include_context_keys: bool,
    pub(crate) include_context_values: bool,
    pub(crate) include_keys: Option<&'a [&'a str]>,
    pub(crate) exclude_keys: Option<&'a [&'a str]>,
}

impl<'a> FingerprintConfig<'a> {
    pub(crate) fn new(error: &'a StructuredError) -> Self {
        Self {
            error,
            include_kind: true,
            include_code: true,
            include_message: true,
            include_context_keys: true,
            include_context_values: false,
            include_keys: None,
            exclude_keys: None,
        }
    }

    /// Whether to include the error kind (default: true).
    #[must_use]
    pub fn include_kind(mut self, include: bool) -> Self {
        self.include_kind = include;
        self
    }

    /// Whether to include the error code (default: true).
    #[must_use]
    pub fn include_code(mut self, include: bool) -> Self {
        self.include_code = include;
        self
    }

    /// Whether to include the message (default: true).
    #[must_use]
    pub fn include_message(mut self, include: bool) -> Self {
        self.include_message = include;
        self
    }

    /// Whether to include context keys (default: true).
    #[must_use]
    pub fn include_context_keys(mut self, include: bool) -> Self {
        self.include_context_keys = include;
        self
    }

    /// Whether to include context values alongside their keys (default: false).
    #[must_use]
    pub fn include_context_values(mut self, include: bool) -> Self {
        self.include_context_values = include;
        self
    }

    /// Only these context keys take part in the fingerprint.
    #[must_use]
    pub fn include_context_only(mut self, keys: &'a [&'a str]) -> Self {
        self.include_keys = Some(keys);
        self
    }

    /// These context keys never take part in the fingerprint.
    #[must_use]
    pub fn exclude_context(mut self, keys: &'a [&'a str]) -> Self {
        self.exclude_keys = Some(keys);
        self
    }

    /// Computes the fingerprint using the configured options.
    #[must_use]
    pub fn compute(&self) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf29ce484222325;
        let mut hash = FNV_OFFSET;

        if self.include_kind {
            hash_bytes(&mut hash, b"kind:");
            hash_bytes(&mut hash, self.error.kind.type_name().as_bytes());
        }

        if self.include_code {
            hash_bytes(&mut hash, b"code:");
            hash_bytes(&mut hash, &self.error.code.to_le_bytes());
        }

        if self.include_message {
            hash_bytes(&mut hash, b"msg:");
            hash_bytes(&mut hash, self.error.message.as_bytes());
        }

        if self.include_context_keys || self.include_context_values {
            let mut entries: Vec<_> = self
                .error
                .context
                .iter()
                .filter(|(key, _)| {
                    let included = self.include_keys.map_or(true, |keys| keys.contains(key));
                    let excluded = self.exclude_keys.is_some_and(|keys| keys.contains(key));
                    included && !excluded
                })
                .collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

            for (key, value) in entries {
                hash_bytes(&mut hash, b"ctx:");
                hash_bytes(&mut hash, key.as_bytes());
                if self.include_context_values {
                    hash_bytes(&mut hash, b"=");
                    let mut hasher = DisplayHasher::new(&mut hash);
                    let _ = write!(hasher, "{}", value);
                }
            }
        }

        hash
    }

    /// Computes the fingerprint and returns it as a hex string.
    #[must_use]
    pub fn compute_hex(&self) -> String {
        let mut result = String::with_capacity(16);
        let fp = self.compute();
        let _ = write!(result, "{:016x}", fp);
        result
    }
}

/// FNV-1a prime constant for 64-bit hash.
const FNV_PRIME: u64 = 0x100000001b3;

#[inline(always)]
fn hash_bytes(hash: &mut u64, bytes: &[u8]) {
    for &byte in bytes {
        *hash ^= byte as u64;
        *hash = hash.wrapping_mul(FNV_PRIME);
    }
}

struct DisplayHasher<'a> {
    hash: &'a mut u64,
}

impl<'a> DisplayHasher<'a> {
    #[inline(always)]
    fn new(hash: &'a mut u64) -> Self {
        Self { hash }
    }
}

impl Write for DisplayHasher<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        hash_bytes(self.hash, s.as_bytes());
        Ok(())
    }
}
