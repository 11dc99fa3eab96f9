//! Paragraphs and documents: the input to segmentation.

use crate::normalize::{char_len, normalize, starts_with_ci};
use crate::Threshold;

/// Marker prefix of a dateline paragraph.
pub(crate) const DATELINE_PREFIX: &str = "dateline:";

/// Marker prefix of a trailer ("about") paragraph.
pub(crate) const ABOUT_PREFIX: &str = "about";

/// One paragraph of a document, with its position in the sequence.
///
/// A paragraph keeps two forms of its text:
///
/// - `raw`: exactly as read, including any line breaks inside it. This is
///   what the body (S2) re-emits.
/// - `normalized`: whitespace collapsed and trimmed. Every classification
///   uses this form, and the lead (S1) and trailer (S3) are built from it.
///
/// ```rust
/// use strata::Paragraph;
///
/// let p = Paragraph::new("About  Acme\nCorp", 4);
/// assert_eq!(p.raw(), "About  Acme\nCorp");
/// assert_eq!(p.normalized(), "About Acme Corp");
/// assert_eq!(p.char_len(), 15);
/// assert!(p.is_about());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    raw: String,
    normalized: String,
    char_len: usize,
    index: usize,
}

impl Paragraph {
    /// Create a paragraph at position `index`.
    #[must_use]
    pub fn new(raw: impl Into<String>, index: usize) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        let char_len = char_len(&normalized);
        Self {
            raw,
            normalized,
            char_len,
            index,
        }
    }

    /// The text as read.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The whitespace-normalized text.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Normalized length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Zero-based position in the document.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the normalized text is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Whether the normalized text starts with `dateline:` (any case).
    #[must_use]
    pub fn is_dateline(&self) -> bool {
        starts_with_ci(&self.normalized, DATELINE_PREFIX)
    }

    /// Whether the normalized text starts with `about` (any case).
    #[must_use]
    pub fn is_about(&self) -> bool {
        starts_with_ci(&self.normalized, ABOUT_PREFIX)
    }

    /// Whether the paragraph reaches `threshold`.
    #[must_use]
    pub fn is_substantial(&self, threshold: Threshold) -> bool {
        threshold.admits(self.char_len)
    }
}

/// An ordered sequence of paragraphs with an identifier.
///
/// Built once per input and shared by every step of segmentation.
///
/// ```rust
/// use strata::Document;
///
/// let doc = Document::from_texts("release", ["Dateline: PARIS", "Body text."]);
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.paragraphs()[1].index(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    name: String,
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Build a document from paragraph texts in order.
    pub fn from_texts<I, S>(name: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paragraphs = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Paragraph::new(t, i))
            .collect();
        Self {
            name: name.into(),
            paragraphs,
        }
    }

    /// The document identifier, typically the input file stem.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All paragraphs in order.
    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of paragraphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the document has no paragraphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraphs that reach `threshold`.
    pub fn substantial(&self, threshold: Threshold) -> impl Iterator<Item = &Paragraph> + '_ {
        self.paragraphs
            .iter()
            .filter(move |p| p.is_substantial(threshold))
    }
}
