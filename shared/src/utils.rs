//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! - [`shorten_address`] - Display form of a wallet address: the first and last
//!   four characters, lower-cased, joined by an ellipsis
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::shorten_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(shorten_address(address), "8w6q...jkal");
//! ```

/// Number of characters kept at each end of a shortened address.
pub const SHORT_ADDRESS_EDGE: usize = 4;

/// Shown in place of an address when there is none.
pub const EMPTY_ADDRESS_PLACEHOLDER: &str = "0000...0000";

/// Shorten a wallet address for display.
///
/// A non-empty address becomes its first four characters, `"..."`, and its
/// last four characters, both lower-cased. An empty address becomes
/// [`EMPTY_ADDRESS_PLACEHOLDER`]. Nothing else is validated, so an address
/// shorter than four characters repeats in full on both sides.
///
/// Characters are counted as `char`s, so non-ASCII input never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::shorten_address;
///
/// assert_eq!(shorten_address("abcdefgh"), "abcd...efgh");
/// assert_eq!(shorten_address("ABCDEFGH12"), "abcd...gh12");
/// assert_eq!(shorten_address(""), "0000...0000");
/// ```
pub fn shorten_address(address: &str) -> String {
    let length = address.chars().count();
    if length == 0 {
        return EMPTY_ADDRESS_PLACEHOLDER.to_string();
    }

    let prefix: String = address.chars().take(SHORT_ADDRESS_EDGE).collect();
    let suffix: String = address
        .chars()
        .skip(length.saturating_sub(SHORT_ADDRESS_EDGE))
        .collect();

    format!("{}...{}", prefix.to_lowercase(), suffix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address("abcdefgh"), "abcd...efgh");
        let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
        assert_eq!(shorten_address(addr), "8w6q...jkal");
    }

    #[test]
    fn test_shorten_address_lowercases() {
        assert_eq!(shorten_address("ABCDEFGH12"), "abcd...gh12");
    }

    #[test]
    fn test_shorten_address_empty() {
        assert_eq!(shorten_address(""), "0000...0000");
    }

    #[test]
    fn test_shorten_address_short() {
        assert_eq!(shorten_address("ab"), "ab...ab");
        assert_eq!(shorten_address("ABCDE"), "abcd...bcde");
    }

    #[test]
    fn test_shorten_address_multibyte() {
        assert_eq!(shorten_address("ÄÖÜßxyzÉ"), "äöüß...xyzé");
    }
}
