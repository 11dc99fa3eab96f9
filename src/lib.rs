//! # strata
//!
//! Lead, body, and trailer extraction for press-release style documents.
//!
//! ## The Problem
//!
//! A press release has a shape everybody recognizes and nobody marks up:
//!
//! ```text
//! FOR IMMEDIATE RELEASE
//! Dateline: BOSTON, May 2
//! Acme Corp. today announced ...              <- lead (S1)
//! "We are thrilled," said ...                 <- body (S2)
//! The anvils ship in June ...                 <-
//! About Acme                                  <- trailer (S3)
//! Acme has built anvils since 1949 ...        <-
//! Media contact: press@acme.example
//! ```
//!
//! The document arrives as a flat list of paragraphs. The only structure is
//! textual convention: a `dateline:` marker, paragraph length, and
//! paragraphs that begin with `about`. This crate turns those conventions
//! into three regions.
//!
//! ## The Algorithm
//!
//! Every decision is made on a paragraph's *normalized* text (whitespace
//! collapsed, trimmed) and its length in characters, compared against a
//! single [`Threshold`] (default 150).
//!
//! ### Single-Paragraph Shortcut
//!
//! If exactly one paragraph reaches the threshold, the document is too
//! short to have structure: that paragraph is the body, and nothing else is
//! computed.
//!
//! ### Lead (S1)
//!
//! After the first `dateline:` paragraph, the first paragraph of at least
//! 100 characters. With no dateline, the first paragraph reaching the
//! threshold. A dateline that is not followed by such a paragraph means no
//! lead at all. See [`locate_lead`].
//!
//! ### Trailer (S3)
//!
//! Over the paragraphs that start with `about` or reach the threshold, each
//! `about` header opens a block that collects text until a substantial
//! paragraph closes it. See [`extract_trailer`].
//!
//! ### Body (S2)
//!
//! The raw paragraphs between the lead and the first `about` paragraph
//! after it; without a trailer, up to the last substantial paragraph. See
//! [`assemble_body`].
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::{Document, RegionKind, Segmenter, Threshold};
//!
//! let lead = "Acme Corp. today announced the general availability of its \
//!             new anvil line, built for cartoon coyotes everywhere.";
//! let body = "The anvils ship in June and come in three weights. ".repeat(4);
//! let about = "Acme has built anvils since 1949 and sells them worldwide. ".repeat(3);
//!
//! let doc = Document::from_texts(
//!     "acme",
//!     ["Dateline: BOSTON", lead, body.as_str(), "About Acme", about.as_str()],
//! );
//!
//! let seg = Segmenter::new(Threshold::new(150)).segment(&doc);
//! let kinds: Vec<_> = seg.outputs(false).iter().map(|(k, _)| *k).collect();
//! assert_eq!(kinds, vec![RegionKind::S1, RegionKind::S3, RegionKind::S2]);
//! ```
//!
//! ## Batch Processing
//!
//! [`process_dir`] segments every `.txt`/`.json` document in a directory and
//! writes `<name>_S1.txt`, `<name>_S2.txt`, `<name>_S3.txt` next to each
//! other in an output directory. The `strata` binary wraps it.

mod batch;
mod body;
mod error;
mod lead;
mod normalize;
mod paragraph;
mod region;
mod segmenter;
mod sink;
mod source;
mod threshold;
mod trailer;

pub use batch::{
    discover, process_dir, process_file, process_files, BatchOptions, BatchReport,
    DocumentReport, DocumentSummary,
};
pub use body::assemble_body;
pub use error::{DocumentReadError, Error, Result};
pub use lead::locate_lead;
pub use normalize::{char_len, normalize, starts_with_ci};
pub use paragraph::{Document, Paragraph};
pub use region::{Body, Lead, RegionKind, Segmentation, TextForm, Trailer};
pub use segmenter::Segmenter;
pub use sink::{DirSink, RegionSink};
pub use source::{AnySource, JsonSource, ParagraphSource, TextSource};
pub use threshold::{Threshold, LEAD_MIN_CHARS};
pub use trailer::{extract_trailer, filtered_view, locate_trailer, resolve_start};
