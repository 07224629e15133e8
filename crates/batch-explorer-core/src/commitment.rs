//! Display truncation for Merkle root commitments.
//!
//! Roots are shown as the first [`PREFIX_LEN`] characters, a literal `...`, and
//! everything from character [`SUFFIX_START`] onward. For a canonical
//! keccak-256 root (`0x` + 64 hex digits) that reads `0x1234abcd...89abcdef`.
//!
//! Precondition: the root is longer than [`SUFFIX_START`] characters. Shorter
//! values have no meaningful prefix/suffix split and are shown verbatim.

/// Characters kept from the start of the root.
pub const PREFIX_LEN: usize = 10;

/// Character index where the displayed tail begins.
pub const SUFFIX_START: usize = 58;

/// Length of a `0x`-prefixed 32-byte hex digest.
pub const CANONICAL_LEN: usize = 66;

/// Truncated display form of a Merkle root.
///
/// Slices on characters, never bytes, so non-ASCII input cannot split a code point.
pub fn truncate(root: &str) -> String {
    let char_count = root.chars().count();
    if char_count <= SUFFIX_START {
        return root.to_string();
    }

    let prefix: String = root.chars().take(PREFIX_LEN).collect();
    let suffix: String = root.chars().skip(SUFFIX_START).collect();
    format!("{}...{}", prefix, suffix)
}

/// True for `0x` followed by exactly 64 hex digits.
///
/// Informational only: nothing here verifies the commitment against batch contents.
pub fn is_canonical(root: &str) -> bool {
    root.len() == CANONICAL_LEN
        && root.starts_with("0x")
        && root[2..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "0x1b4f0e9851971998e732078544c96b36c3d01cedf7caa332359d6f1d83567014";

    #[test]
    fn test_canonical_root_truncation() {
        assert_eq!(truncate(ROOT), "0x1b4f0e98...83567014");
    }

    #[test]
    fn test_sixty_four_chars_keeps_six_char_tail() {
        let root = "a".repeat(64);
        assert_eq!(truncate(&root), format!("{}...{}", "a".repeat(10), "a".repeat(6)));
    }

    #[test]
    fn test_truncation_is_idempotent_per_input() {
        assert_eq!(truncate(ROOT), truncate(ROOT));
    }

    #[test]
    fn test_short_root_shown_verbatim() {
        assert_eq!(truncate("0xdeadbeef"), "0xdeadbeef");
        assert_eq!(truncate(&"f".repeat(SUFFIX_START)), "f".repeat(SUFFIX_START));
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        let root = "é".repeat(70);
        let shown = truncate(&root);
        assert!(shown.starts_with(&"é".repeat(10)));
        assert!(shown.ends_with(&"é".repeat(12)));
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical(ROOT));
        assert!(!is_canonical(&ROOT[2..]));
        assert!(!is_canonical(&"a".repeat(64)));
        assert!(!is_canonical(&format!("0x{}", "g".repeat(64))));
    }
}
