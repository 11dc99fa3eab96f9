//! The segmenter: shortcut check, then lead, trailer, and body in order.

use crate::body::assemble_body;
use crate::lead::locate_lead;
use crate::trailer::locate_trailer;
use crate::{Body, Document, Segmentation, Threshold};

/// Splits a document into lead, body, and trailer.
///
/// The threshold is fixed at construction and used for every decision on
/// every document this segmenter sees.
///
/// ## Example
///
/// ```rust
/// use strata::{Document, Segmenter};
///
/// let lead = "Acme Corp. today announced the general availability of its \
///             new anvil line, built for cartoon coyotes everywhere.";
/// let body = "The anvils ship in May. ".repeat(8);
/// let about = "Acme has built anvils since 1949 and sells them worldwide. ".repeat(3);
///
/// let doc = Document::from_texts(
///     "release",
///     ["Dateline: BOSTON", lead, body.as_str(), "About Acme", about.as_str()],
/// );
/// let seg = Segmenter::default().segment(&doc);
///
/// assert_eq!(seg.lead().unwrap().index, Some(1));
/// assert_eq!(seg.body().span, Some(2..=2));
/// assert!(seg.trailer().unwrap().text.starts_with("About Acme\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    threshold: Threshold,
}

impl Segmenter {
    /// Create a segmenter with the given threshold.
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    /// The threshold in use.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Segment one document.
    ///
    /// When exactly one paragraph reaches the threshold the document is
    /// returned as [`Segmentation::Single`] holding that paragraph's raw
    /// text, and no lead or trailer is computed.
    pub fn segment(&self, doc: &Document) -> Segmentation {
        if let Some(body) = self.single_paragraph(doc) {
            return Segmentation::Single { body };
        }
        self.segment_regions(doc)
    }

    /// Full lead/body/trailer segmentation, without the shortcut.
    pub fn segment_regions(&self, doc: &Document) -> Segmentation {
        let paragraphs = doc.paragraphs();
        let lead = locate_lead(paragraphs, self.threshold);
        let trailer = locate_trailer(paragraphs, lead.index, self.threshold);
        let body = assemble_body(paragraphs, lead.index, trailer.start, self.threshold);
        Segmentation::Regions {
            lead,
            body,
            trailer,
        }
    }

    fn single_paragraph(&self, doc: &Document) -> Option<Body> {
        let mut substantial = doc.substantial(self.threshold);
        let only = substantial.next()?;
        if substantial.next().is_some() {
            return None;
        }
        Some(Body::new(only.raw(), only.index()..=only.index()))
    }
}
