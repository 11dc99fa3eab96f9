//! Lead location (S1).
//!
//! ## The Algorithm
//!
//! First match wins:
//!
//! ```text
//! 1. Find the first paragraph starting with "dateline:" (any case).
//!    If there is one, the lead is the first paragraph AFTER it whose
//!    normalized length is >= 100. If no such paragraph follows, there
//!    is no lead. Rule 2 is not tried.
//! 2. No dateline anywhere: the lead is the first paragraph whose
//!    normalized length reaches the threshold.
//! 3. Otherwise: no lead.
//! ```
//!
//! A declared dateline is a strong signal. A document that has one but no
//! content after it is treated as having no usable lead, not as an untagged
//! document, so rule 2 never rescues it:
//!
//! ```text
//! [0] Acme ships the anvil ... (200 chars)   <- would satisfy rule 2
//! [1] Dateline: BOSTON
//! [2] Contact: press@acme.example            <- too short
//! => no lead
//! ```

use crate::paragraph::Paragraph;
use crate::threshold::{Threshold, LEAD_MIN_CHARS};
use crate::Lead;

/// Find the lead paragraph.
///
/// ```rust
/// use strata::{locate_lead, Document, Threshold};
///
/// let long = "x".repeat(120);
/// let doc = Document::from_texts("d", ["Dateline: ROME", "short", long.as_str()]);
/// let lead = locate_lead(doc.paragraphs(), Threshold::default());
/// assert_eq!(lead.index, Some(2));
/// ```
pub fn locate_lead(paragraphs: &[Paragraph], threshold: Threshold) -> Lead {
    if let Some(pos) = paragraphs.iter().position(Paragraph::is_dateline) {
        return paragraphs[pos + 1..]
            .iter()
            .find(|p| p.char_len() >= LEAD_MIN_CHARS)
            .map(|p| Lead::new(p.normalized(), p.index()))
            .unwrap_or_default();
    }

    paragraphs
        .iter()
        .find(|p| p.is_substantial(threshold))
        .map(|p| Lead::new(p.normalized(), p.index()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    fn lead_of(texts: &[&str], threshold: usize) -> Lead {
        let doc = Document::from_texts("t", texts.iter().copied());
        locate_lead(doc.paragraphs(), Threshold::new(threshold))
    }

    #[test]
    fn test_dateline_picks_first_long_follower() {
        let long = "L".repeat(100);
        let lead = lead_of(&["intro", "dateline: X", "short", &long, &long], 150);
        assert_eq!(lead.index, Some(3));
        assert_eq!(lead.text, long);
    }

    #[test]
    fn test_dateline_uses_fixed_bar_not_threshold() {
        // 100 chars is below the threshold of 150 but enough after a dateline
        let long = "a".repeat(100);
        let lead = lead_of(&["Dateline: Y", &long], 150);
        assert_eq!(lead.index, Some(1));

        let lead = lead_of(&["Dateline: Y", &"a".repeat(99)], 10);
        assert!(lead.is_empty());
    }

    #[test]
    fn test_dateline_without_follower_does_not_fall_back() {
        let long = "b".repeat(300);
        let lead = lead_of(&[&long, "DATELINE: Z", "tiny"], 150);
        assert!(lead.is_empty());
        assert_eq!(lead.index, None);
    }

    #[test]
    fn test_dateline_paragraph_itself_is_not_the_lead() {
        let marker = format!("Dateline: {}", "c".repeat(200));
        let lead = lead_of(&[&marker], 150);
        assert!(lead.is_empty());
    }

    #[test]
    fn test_threshold_rule_without_dateline() {
        let long = "d".repeat(150);
        let lead = lead_of(&["short", &long, &long], 150);
        assert_eq!(lead.index, Some(1));
    }

    #[test]
    fn test_lead_text_is_normalized() {
        let raw = format!("  {}\n\n{}  ", "e".repeat(80), "f".repeat(80));
        let lead = lead_of(&[&raw], 150);
        assert_eq!(lead.text, format!("{} {}", "e".repeat(80), "f".repeat(80)));
    }

    #[test]
    fn test_nothing_qualifies() {
        let lead = lead_of(&["a", "b"], 150);
        assert_eq!(lead, Lead::none());
        assert_eq!(lead_of(&[], 150), Lead::none());
    }
}
