//! Card number input normalization
//!
//! Turns what the user typed into the two display forms a card carries: the
//! grouped number (`4111 1111 1111 1234`) and the masked number
//! (`•••• •••• •••• 1234`).
//!
//! The masked form is fixed-width for display. It always shows three masked
//! groups regardless of the real number length, and it is not a security
//! control.

use serde::{Deserialize, Serialize};

/// Glyph used for hidden digits
pub const MASK_GLYPH: char = '•';

/// Characters per display group
pub const GROUP_SIZE: usize = 4;

/// Prefix every masked number starts with
pub const MASK_PREFIX: &str = "•••• •••• •••• ";

/// Display forms derived from raw card number input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedNumber {
    /// Groups of four separated by a single space
    pub grouped: String,
    /// Fixed three masked groups followed by the last four characters
    pub masked: String,
}

/// Remove every whitespace character from card number input
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalize raw card number input into grouped and masked forms
///
/// Pure: no allocation beyond the returned strings and no side effects.
///
/// # Examples
/// ```
/// use wallet_cli::models::normalize;
/// let n = normalize("4111111111111234");
/// assert_eq!(n.grouped, "4111 1111 1111 1234");
/// assert_eq!(n.masked, "•••• •••• •••• 1234");
/// ```
pub fn normalize(raw: &str) -> NormalizedNumber {
    let cleaned = strip_whitespace(raw);
    NormalizedNumber {
        grouped: group(&cleaned),
        masked: mask(&cleaned),
    }
}

fn group(cleaned: &str) -> String {
    let mut grouped = String::with_capacity(cleaned.len() + cleaned.len() / GROUP_SIZE);
    for (index, c) in cleaned.chars().enumerate() {
        if index > 0 && index % GROUP_SIZE == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

fn mask(cleaned: &str) -> String {
    let count = cleaned.chars().count();
    let last_four: String = cleaned.chars().skip(count.saturating_sub(GROUP_SIZE)).collect();
    format!("{}{}", MASK_PREFIX, last_four)
}
