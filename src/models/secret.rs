//! Sensitive text holder for full card numbers and CVVs
//!
//! Contents are zeroed on drop and never appear in `Debug` output. This is
//! memory hygiene, not encryption.

use std::fmt;

use zeroize::Zeroizing;

/// A string that zeros its contents on drop and redacts itself in debug output
#[derive(Clone, PartialEq, Eq)]
pub struct SecretText(Zeroizing<String>);

impl SecretText {
    pub fn new(s: impl Into<String>) -> Self {
        Self(Zeroizing::new(s.into()))
    }

    /// Borrow the plain contents. Callers decide whether to reveal them.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// One mask glyph per character, e.g. `•••` for a three-digit CVV
    pub fn masked(&self) -> String {
        std::iter::repeat(super::card_number::MASK_GLYPH)
            .take(self.len())
            .collect()
    }
}

impl From<&str> for SecretText {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SecretText {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for SecretText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretText")
            .field("len", &self.len())
            .finish()
    }
}
