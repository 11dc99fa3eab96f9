//! The length threshold that classifies a paragraph as substantial.
//!
//! ## The Problem
//!
//! Press releases carry no markup. A document arrives as a list of
//! paragraphs, and most of them are noise for structure detection: contact
//! lines, photo credits, "###" end markers, one-line headlines.
//!
//! ```text
//! [0] "FOR IMMEDIATE RELEASE"                  <- 21 chars, noise
//! [1] "Dateline: BOSTON"                       <- marker
//! [2] "Acme Corp. today announced ..."         <- 240 chars, substantial
//! [3] "Media contact: jane@acme.example"       <- noise
//! ```
//!
//! A single character count separates the two: anything whose normalized
//! text reaches `min_length` counts as real content. The same value is used
//! for every decision in a run (lead fallback, trailer filtering and
//! closing, body end, and the single-paragraph shortcut).
//!
//! The dateline rule uses its own fixed bar, [`LEAD_MIN_CHARS`], which does
//! not follow the configured threshold.

/// Minimum normalized length of the lead paragraph following a `dateline:`
/// marker. Independent of [`Threshold`].
pub const LEAD_MIN_CHARS: usize = 100;

/// Minimum normalized length, in characters, of a substantial paragraph.
///
/// # Examples
///
/// ```rust
/// use strata::Threshold;
///
/// let t = Threshold::default();
/// assert_eq!(t.min_length(), 150);
/// assert!(t.admits(150));
/// assert!(!t.admits(149));
///
/// let t = Threshold::from(80);
/// assert!(t.admits(80));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Threshold {
    min_length: usize,
}

impl Threshold {
    /// The threshold used when none is configured.
    pub const DEFAULT: Self = Self::new(150);

    /// Create a threshold of `min_length` characters.
    ///
    /// Zero is accepted; every paragraph, even an empty one, then counts as
    /// substantial.
    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// The configured minimum length.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether a normalized length reaches the threshold.
    #[must_use]
    pub const fn admits(&self, len: usize) -> bool {
        len >= self.min_length
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for Threshold {
    fn from(min_length: usize) -> Self {
        Self::new(min_length)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} chars", self.min_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_150() {
        assert_eq!(Threshold::default().min_length(), 150);
        assert_eq!(Threshold::default(), Threshold::DEFAULT);
    }

    #[test]
    fn test_admits_is_inclusive() {
        let t = Threshold::new(10);
        assert!(!t.admits(9));
        assert!(t.admits(10));
        assert!(t.admits(11));
    }

    #[test]
    fn test_zero_admits_everything() {
        assert!(Threshold::new(0).admits(0));
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(Threshold::from(42), Threshold::new(42));
    }

    #[test]
    fn test_display() {
        assert_eq!(Threshold::new(150).to_string(), "150 chars");
    }
}
