//! Syntactic validation of email address lists.
//!
//! The To field accepts multiple addresses separated by commas. Validation
//! is purely syntactic - no DNS or mailbox verification is ever performed.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern a single address must match in full: local part, `@`, domain
/// labels, and a top-level domain of at least two letters.
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("address pattern is valid")
});

/// Checks that `addresses` is a comma-separated list of well-formed email
/// addresses.
///
/// Each part is trimmed before matching and **every** part must match.
/// An empty input is not valid: splitting `""` yields a single empty part,
/// which fails the pattern.
pub fn is_valid_address_list(addresses: &str) -> bool {
    addresses
        .split(',')
        .map(str::trim)
        .all(|part| ADDRESS_RE.is_match(part))
}

/// Splits `addresses` into individual trimmed addresses.
///
/// Empty parts are dropped so that a stray trailing comma does not produce
/// an empty recipient. Used at submit time to build the recipient list;
/// every address in a validated list is sent, not just the first.
pub fn split_addresses(addresses: &str) -> Vec<String> {
    addresses
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_well_formed_address() {
        assert!(is_valid_address_list("a@b.com"));
        assert!(is_valid_address_list("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert!(!is_valid_address_list(""));
        assert!(!is_valid_address_list("   "));
    }

    #[test]
    fn test_comma_list_with_spaces() {
        assert!(is_valid_address_list("a@b.com , c@d.org"));
        assert!(is_valid_address_list("a@b.com,c@d.org"));
    }

    #[test]
    fn test_one_malformed_part_fails_the_list() {
        assert!(!is_valid_address_list("a@b.com, not-an-address"));
        assert!(!is_valid_address_list("a@b.com,"));
        assert!(!is_valid_address_list("@b.com"));
        assert!(!is_valid_address_list("a@b"));
        assert!(!is_valid_address_list("a@b.c"));
    }

    #[test]
    fn test_whole_part_must_match() {
        // The pattern is anchored; surrounding garbage is not ignored.
        assert!(!is_valid_address_list("<a@b.com>"));
        assert!(!is_valid_address_list("a@b.com extra"));
    }

    #[test]
    fn test_split_addresses_trims_and_drops_empty() {
        assert_eq!(
            split_addresses(" a@b.com , c@d.org ,"),
            vec!["a@b.com".to_owned(), "c@d.org".to_owned()]
        );
        assert!(split_addresses("").is_empty());
    }
}
