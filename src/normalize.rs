//! Whitespace normalization and prefix classification.
//!
//! Every classification decision in this crate is made on the *normalized*
//! form of a paragraph: runs of whitespace (spaces, tabs, newlines, the
//! rest of Unicode `White_Space`, and the ASCII information separators
//! U+001C..=U+001F) collapse to a single space, and the ends are trimmed.
//!
//! ```text
//! "  Dateline:\n\tNEW YORK  " -> "Dateline: NEW YORK"
//! ```
//!
//! Lengths are counted in Unicode scalar values, not bytes, so that a
//! paragraph of 150 accented characters reaches a threshold of 150.

/// Collapse whitespace runs to one space and trim both ends.
///
/// ```rust
/// use strata::normalize;
///
/// assert_eq!(normalize("  a \n\n b\tc  "), "a b c");
/// assert_eq!(normalize("\n \t"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split(is_separator).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Length of already-normalized text, in characters.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// ASCII case-insensitive prefix test.
///
/// Used for the `dateline:` and `about` markers. Non-ASCII text never
/// matches an ASCII prefix by folding, which keeps the check free of
/// locale rules.
#[must_use]
pub fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(normalize("one\r\n  two\t\tthree"), "one two three");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_unicode_whitespace() {
        // NO-BREAK SPACE and IDEOGRAPHIC SPACE are White_Space
        assert_eq!(normalize("a\u{00A0}\u{3000}b"), "a b");
    }

    #[test]
    fn test_information_separators() {
        assert_eq!(normalize("a\x1cb\x1d\x1e c\x1f"), "a b c");
        assert_eq!(normalize("\x1f\x1c"), "");
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_prefix_case_insensitive() {
        assert!(starts_with_ci("DATELINE: Boston", "dateline:"));
        assert!(starts_with_ci("About Acme", "about"));
        assert!(starts_with_ci("aboutness", "about"));
        assert!(!starts_with_ci("abou", "about"));
        assert!(!starts_with_ci(" about", "about"));
    }

    #[test]
    fn test_prefix_on_multibyte_boundary() {
        // byte 5 falls inside the second 3-byte char
        assert!(!starts_with_ci("a日本", "about"));
    }
}
