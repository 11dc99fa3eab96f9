//! Reading documents from files.
//!
//! Segmentation only needs an ordered list of paragraph strings. Sources
//! turn a file into that list; each document is read exactly once.
//!
//! ## Formats
//!
//! | Extension | Source | Paragraphs |
//! |-----------|--------|------------|
//! | `.txt`, `.text` | [`TextSource`] | separated by blank lines |
//! | `.json` | [`JsonSource`] | array of strings |
//!
//! In text files a single line break stays inside the paragraph's raw text,
//! which is what the body re-emits:
//!
//! ```text
//! Dateline: BOSTON          <- paragraph 0
//!
//! Acme today announced      <- paragraph 1, raw text keeps the "\n"
//! a new line of anvils.
//! ```
//!
//! Empty paragraphs cannot be expressed in the text format; use JSON when
//! they matter.

use std::path::Path;

use crate::error::DocumentReadError;
use crate::Document;

/// Something that reads a file into a [`Document`].
pub trait ParagraphSource: Send + Sync {
    /// Whether this source handles `path`, judged by extension.
    fn accepts(&self, path: &Path) -> bool;

    /// Read `path` into a document named after the file stem.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentReadError`] if the file cannot be read or parsed.
    fn read(&self, path: &Path) -> Result<Document, DocumentReadError>;
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, DocumentReadError> {
    std::fs::read(path).map_err(|source| DocumentReadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Plain UTF-8 text with blank-line separated paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSource;

impl TextSource {
    const EXTENSIONS: &'static [&'static str] = &["txt", "text"];

    /// Split text into paragraphs on blank lines.
    ///
    /// Lines holding only whitespace count as blank. `\r\n` is read as
    /// `\n`, and a leading byte-order mark is dropped.
    ///
    /// ```rust
    /// use strata::TextSource;
    ///
    /// let doc = TextSource::parse("d", "one\ntwo\n\n\n  \nthree\n");
    /// let raw: Vec<_> = doc.paragraphs().iter().map(|p| p.raw()).collect();
    /// assert_eq!(raw, vec!["one\ntwo", "three"]);
    /// ```
    pub fn parse(name: impl Into<String>, text: &str) -> Document {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n"));
        }

        Document::from_texts(name, paragraphs)
    }
}

impl ParagraphSource for TextSource {
    fn accepts(&self, path: &Path) -> bool {
        has_extension(path, Self::EXTENSIONS)
    }

    fn read(&self, path: &Path) -> Result<Document, DocumentReadError> {
        let bytes = read_bytes(path)?;
        let text = String::from_utf8(bytes).map_err(|_| DocumentReadError::Encoding {
            path: path.to_path_buf(),
        })?;
        Ok(Self::parse(document_name(path), &text))
    }
}

/// A JSON array of paragraph strings.
///
/// ```json
/// ["Dateline: BOSTON", "Acme today announced ...", "", "About Acme"]
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSource;

impl JsonSource {
    const EXTENSIONS: &'static [&'static str] = &["json"];
}

impl ParagraphSource for JsonSource {
    fn accepts(&self, path: &Path) -> bool {
        has_extension(path, Self::EXTENSIONS)
    }

    fn read(&self, path: &Path) -> Result<Document, DocumentReadError> {
        let bytes = read_bytes(path)?;
        let texts: Vec<String> =
            serde_json::from_slice(&bytes).map_err(|source| DocumentReadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Document::from_texts(document_name(path), texts))
    }
}

/// Dispatches to [`TextSource`] or [`JsonSource`] by extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySource;

impl AnySource {
    fn pick(path: &Path) -> Option<&'static dyn ParagraphSource> {
        if TextSource.accepts(path) {
            Some(&TextSource)
        } else if JsonSource.accepts(path) {
            Some(&JsonSource)
        } else {
            None
        }
    }
}

impl ParagraphSource for AnySource {
    fn accepts(&self, path: &Path) -> bool {
        Self::pick(path).is_some()
    }

    fn read(&self, path: &Path) -> Result<Document, DocumentReadError> {
        match Self::pick(path) {
            Some(source) => source.read(path),
            None => Err(DocumentReadError::Unsupported {
                path: path.to_path_buf(),
            }),
        }
    }
}
