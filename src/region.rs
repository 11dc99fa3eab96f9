//! Region types: the lead (S1), body (S2), and trailer (S3) of a document.
//!
//! ## Positions
//!
//! Every index stored here points into the *original* paragraph sequence,
//! never into a filtered view. When all three regions are present they
//! cover disjoint, ordered spans:
//!
//! ```text
//! [0] FOR IMMEDIATE RELEASE
//! [1] Dateline: BOSTON
//! [2] Acme today announced ...          <- S1 (lead.index = 2)
//! [3] "We are thrilled," said ...       <- S2 (body.span = 3..=4)
//! [4] The product ships in May ...      <-
//! [5] About Acme                        <- S3 (trailer.start = 5)
//! [6] Acme builds anvils since 1949 ...
//! ```
//!
//! ## Text Forms
//!
//! The lead and trailer carry normalized text; the body carries raw
//! paragraph text, so line breaks inside a body paragraph survive. The
//! form is recorded in each region as a [`TextForm`].

use std::ops::RangeInclusive;

/// Which form of paragraph text a region carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextForm {
    /// Whitespace collapsed and trimmed.
    Normalized,
    /// As read from the source.
    Raw,
}

/// The three region kinds, named as in output file suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionKind {
    /// Lead statement.
    S1,
    /// Body.
    S2,
    /// Trailing "about" boilerplate.
    S3,
}

impl RegionKind {
    /// File name suffix for derived outputs, e.g. `_S1`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::S1 => "_S1",
            Self::S2 => "_S2",
            Self::S3 => "_S3",
        }
    }
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
        };
        f.write_str(name)
    }
}

/// The lead paragraph (S1).
///
/// Empty with no index when nothing qualifies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lead {
    /// Normalized text of the lead paragraph.
    pub text: String,
    /// Index of the lead paragraph, if one was found.
    pub index: Option<usize>,
}

impl Lead {
    /// A lead taken from paragraph `index`.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index: Some(index),
        }
    }

    /// No lead.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether no lead was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Always [`TextForm::Normalized`].
    #[must_use]
    pub const fn form(&self) -> TextForm {
        TextForm::Normalized
    }
}

/// The body (S2): raw paragraph texts joined with `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    /// Joined raw text.
    pub text: String,
    /// Inclusive span of paragraph indices, `None` when no paragraph was taken.
    pub span: Option<RangeInclusive<usize>>,
}

impl Body {
    /// A body spanning `span` with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>, span: RangeInclusive<usize>) -> Self {
        Self {
            text: text.into(),
            span: Some(span),
        }
    }

    /// No body.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the body text is empty.
    ///
    /// A body can span paragraphs and still be empty when all of them are
    /// empty strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Always [`TextForm::Raw`].
    #[must_use]
    pub const fn form(&self) -> TextForm {
        TextForm::Raw
    }
}

/// The trailer (S3): concatenated "about" blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailer {
    /// Trimmed, concatenated normalized text.
    pub text: String,
    /// Index of the first `about` paragraph after the lead, when resolved.
    pub start: Option<usize>,
}

impl Trailer {
    /// Whether no "about" block was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Always [`TextForm::Normalized`].
    #[must_use]
    pub const fn form(&self) -> TextForm {
        TextForm::Normalized
    }
}

/// The outcome of segmenting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmentation {
    /// Exactly one paragraph reached the threshold: the document is body
    /// only, and no lead or trailer was computed.
    Single {
        /// The one substantial paragraph, raw.
        body: Body,
    },
    /// Full lead/body/trailer segmentation.
    Regions {
        /// S1.
        lead: Lead,
        /// S2.
        body: Body,
        /// S3.
        trailer: Trailer,
    },
}

impl Segmentation {
    /// Whether the single-paragraph shortcut was taken.
    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single { .. })
    }

    /// The lead, if it was computed.
    #[must_use]
    pub fn lead(&self) -> Option<&Lead> {
        match self {
            Self::Single { .. } => None,
            Self::Regions { lead, .. } => Some(lead),
        }
    }

    /// The body. Present on both paths, possibly empty.
    #[must_use]
    pub fn body(&self) -> &Body {
        match self {
            Self::Single { body } | Self::Regions { body, .. } => body,
        }
    }

    /// The trailer, if it was computed.
    #[must_use]
    pub fn trailer(&self) -> Option<&Trailer> {
        match self {
            Self::Single { .. } => None,
            Self::Regions { trailer, .. } => Some(trailer),
        }
    }

    /// Regions to persist, in S1, S3, S2 order.
    ///
    /// The shortcut yields only S2. Otherwise S1 and S2 are yielded when
    /// non-empty, and S3 is always yielded (as an empty text when there is
    /// no trailer) unless `skip_empty_trailer` is set.
    #[must_use]
    pub fn outputs(&self, skip_empty_trailer: bool) -> Vec<(RegionKind, &str)> {
        match self {
            Self::Single { body } => vec![(RegionKind::S2, body.text.as_str())],
            Self::Regions {
                lead,
                body,
                trailer,
            } => {
                let mut out = Vec::with_capacity(3);
                if !lead.is_empty() {
                    out.push((RegionKind::S1, lead.text.as_str()));
                }
                if !(trailer.is_empty() && skip_empty_trailer) {
                    out.push((RegionKind::S3, trailer.text.as_str()));
                }
                if !body.is_empty() {
                    out.push((RegionKind::S2, body.text.as_str()));
                }
                out
            }
        }
    }
}
