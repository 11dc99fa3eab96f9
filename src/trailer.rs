//! Trailer extraction (S3).
//!
//! Press releases end with boilerplate: "About Acme", a paragraph of company
//! description, sometimes a second "About Partner" block. This module finds
//! and concatenates those blocks.
//!
//! ## The Filtered View
//!
//! Extraction runs over a filtered view of the document: paragraphs whose
//! normalized text is non-empty and either starts with `about` or reaches
//! the threshold. Short paragraphs that are not headers (contacts, "###")
//! never enter the trailer.
//!
//! ## The Algorithm
//!
//! ```text
//! collecting = false, acc = ""
//! for p in filtered:
//!     if p starts with "about":
//!         if collecting: acc += "\n"
//!         collecting = true
//!         acc += "\n" + p + "\n"
//!     elif collecting:
//!         acc += p + " "
//!         if len(p) >= threshold: collecting = false
//! trailer = trim(acc)
//! ```
//!
//! A header opens a block. Narrative text accumulates until a substantial
//! paragraph closes it; a later header may open another block. Two headers
//! in a row (the first never closed) are separated by an extra line break.
//!
//! The filtered view is an index space of its own. The trailer's position
//! in the original document is resolved separately by [`resolve_start`].

use crate::paragraph::Paragraph;
use crate::{Threshold, Trailer};

/// Paragraphs eligible for the trailer, in document order.
pub fn filtered_view(paragraphs: &[Paragraph], threshold: Threshold) -> Vec<&Paragraph> {
    paragraphs
        .iter()
        .filter(|p| !p.is_blank() && (p.is_about() || p.is_substantial(threshold)))
        .collect()
}

/// Concatenate the "about" blocks of a filtered view.
///
/// Returns an empty string when the view holds no `about` paragraph.
///
/// ```rust
/// use strata::{extract_trailer, filtered_view, Document, Threshold};
///
/// let closing = "Acme makes anvils. ".repeat(10);
/// let doc = Document::from_texts("d", ["About Acme", closing.as_str()]);
/// let threshold = Threshold::default();
/// let text = extract_trailer(&filtered_view(doc.paragraphs(), threshold), threshold);
/// assert!(text.starts_with("About Acme\nAcme makes anvils."));
/// ```
pub fn extract_trailer(filtered: &[&Paragraph], threshold: Threshold) -> String {
    let mut acc = String::new();
    let mut collecting = false;

    for p in filtered {
        if p.is_about() {
            if collecting {
                acc.push('\n');
            }
            collecting = true;
            acc.push('\n');
            acc.push_str(p.normalized());
            acc.push('\n');
        } else if collecting {
            acc.push_str(p.normalized());
            acc.push(' ');
            if p.is_substantial(threshold) {
                collecting = false;
            }
        }
    }

    acc.trim().to_string()
}

/// Index of the first `about` paragraph after the lead.
///
/// Scans the original sequence starting just after `lead_index` (from the
/// start when there is no lead). `None` when nothing matches.
pub fn resolve_start(paragraphs: &[Paragraph], lead_index: Option<usize>) -> Option<usize> {
    let from = lead_index.map_or(0, |i| i + 1);
    paragraphs
        .iter()
        .skip(from)
        .find(|p| p.is_about())
        .map(Paragraph::index)
}

/// Extract the trailer text and resolve its start.
///
/// The start is only resolved when the text is non-empty.
pub fn locate_trailer(
    paragraphs: &[Paragraph],
    lead_index: Option<usize>,
    threshold: Threshold,
) -> Trailer {
    let text = extract_trailer(&filtered_view(paragraphs, threshold), threshold);
    let start = if text.is_empty() {
        None
    } else {
        resolve_start(paragraphs, lead_index)
    };
    Trailer { text, start }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    const T: Threshold = Threshold::new(20);

    fn long(tag: &str) -> String {
        format!("{tag} {}", "z".repeat(20))
    }

    fn trailer_of(texts: &[&str]) -> String {
        let doc = Document::from_texts("t", texts.iter().copied());
        extract_trailer(&filtered_view(doc.paragraphs(), T), T)
    }

    #[test]
    fn test_filter_drops_short_and_blank() {
        let l = long("x");
        let doc = Document::from_texts("t", ["short", "", "about", l.as_str(), "   "]);
        let view: Vec<_> = filtered_view(doc.paragraphs(), T)
            .into_iter()
            .map(Paragraph::index)
            .collect();
        assert_eq!(view, vec![2, 3]);
    }

    #[test]
    fn test_block_closes_on_substantial_paragraph() {
        let (a, b) = (long("one"), long("two"));
        assert_eq!(trailer_of(&["About Acme", &a, &b]), format!("About Acme\n{a}"));
    }

    #[test]
    fn test_short_narrative_is_skipped_while_collecting() {
        let a = long("one");
        let got = trailer_of(&["About Acme", "short narrative", &a]);
        assert_eq!(got, format!("About Acme\n{a}"));
    }

    #[test]
    fn test_second_block_after_close() {
        let (a, b) = (long("one"), long("two"));
        let got = trailer_of(&["About Acme", &a, "About Beta", &b]);
        assert_eq!(got, format!("About Acme\n{a} \nAbout Beta\n{b}"));
    }

    #[test]
    fn test_consecutive_headers_get_extra_break() {
        let a = long("one");
        let got = trailer_of(&["About Acme", "About Beta", &a]);
        assert_eq!(got, format!("About Acme\n\n\nAbout Beta\n{a}"));
    }

    #[test]
    fn test_text_before_header_is_ignored() {
        let a = long("pre");
        assert_eq!(trailer_of(&[&a, "About Acme"]), "About Acme");
    }

    #[test]
    fn test_no_header_means_empty() {
        let a = long("x");
        assert_eq!(trailer_of(&[&a, &a]), "");
        assert_eq!(trailer_of(&[]), "");
    }

    #[test]
    fn test_header_is_normalized() {
        assert_eq!(trailer_of(&["  ABOUT \n  Acme  "]), "ABOUT Acme");
    }

    #[test]
    fn test_resolve_start_after_lead() {
        let doc = Document::from_texts("t", ["About early", "lead", "body", "about late"]);
        assert_eq!(resolve_start(doc.paragraphs(), Some(1)), Some(3));
        assert_eq!(resolve_start(doc.paragraphs(), None), Some(0));
        assert_eq!(resolve_start(doc.paragraphs(), Some(3)), None);
    }

    #[test]
    fn test_locate_trailer_unresolved_when_only_before_lead() {
        let doc = Document::from_texts("t", ["About early", "lead"]);
        let trailer = locate_trailer(doc.paragraphs(), Some(1), T);
        assert_eq!(trailer.text, "About early");
        assert_eq!(trailer.start, None);
    }

    #[test]
    fn test_locate_trailer_empty_has_no_start() {
        let doc = Document::from_texts("t", ["lead", "about"]);
        // "about" alone is a header, so the text is non-empty here
        assert_eq!(locate_trailer(doc.paragraphs(), Some(0), T).start, Some(1));

        let doc = Document::from_texts("t", ["lead", "tail"]);
        assert_eq!(locate_trailer(doc.paragraphs(), Some(0), T), Trailer::default());
    }
}
