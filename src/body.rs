//! Body assembly (S2).
//!
//! The body fills the gap between the lead and the trailer, or between the
//! lead and the document's effective end when there is no trailer.
//!
//! ```text
//! lead at 2, trailer starts at 6:
//!     body = raw[3], raw[4], raw[5]
//!
//! lead at 2, no trailer, last substantial paragraph after lead at 7:
//!     body = raw[3] ..= raw[7]          (short tail after 7 is dropped)
//!
//! lead at 2, no trailer, nothing substantial after lead:
//!     body = raw[3] ..= raw[last]
//! ```
//!
//! Paragraphs are joined with `\n` in their *raw* form: line breaks inside
//! a paragraph are kept, and no whitespace is collapsed.

use crate::paragraph::Paragraph;
use crate::{Body, Threshold};

/// Assemble the body from the lead index and the trailer's resolved start.
///
/// `trailer_start` must only be `Some` when the trailer text is non-empty;
/// [`locate_trailer`](crate::locate_trailer) guarantees this.
///
/// ```rust
/// use strata::{assemble_body, Document, Threshold};
///
/// let doc = Document::from_texts("d", ["lead", "line one\nline two", "more", "About X"]);
/// let body = assemble_body(doc.paragraphs(), Some(0), Some(3), Threshold::default());
/// assert_eq!(body.text, "line one\nline two\nmore");
/// assert_eq!(body.span, Some(1..=2));
/// ```
pub fn assemble_body(
    paragraphs: &[Paragraph],
    lead_index: Option<usize>,
    trailer_start: Option<usize>,
    threshold: Threshold,
) -> Body {
    let Some(lead) = lead_index else {
        return Body::none();
    };
    let from = lead + 1;
    let after_lead = paragraphs.get(from..).unwrap_or_default();

    let until = match trailer_start {
        Some(start) => start,
        None => {
            let end = after_lead
                .iter()
                .rev()
                .find(|p| p.is_substantial(threshold))
                .map_or(paragraphs.len().saturating_sub(1), Paragraph::index);
            end + 1
        }
    };

    if from >= until || from >= paragraphs.len() {
        return Body::none();
    }
    let until = until.min(paragraphs.len());

    let text = paragraphs[from..until]
        .iter()
        .map(Paragraph::raw)
        .collect::<Vec<_>>()
        .join("\n");
    Body::new(text, from..=until - 1)
}
