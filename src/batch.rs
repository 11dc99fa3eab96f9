//! Batch processing: segment every document in a directory.
//!
//! ```text
//! input/                    output/
//!   acme.txt        ->        acme_S1.txt  acme_S3.txt  acme_S2.txt
//!   brief.json      ->        brief_S2.txt                (shortcut)
//!   broken.json     ->        (reported, skipped)
//!   notes.md        ->        (ignored, unknown extension)
//! ```
//!
//! Documents are independent. With the `parallel` feature they are
//! segmented on the rayon pool; a failure in one document is logged and
//! recorded in the [`BatchReport`] without stopping the others.

use std::collections::hash_map::{Entry, HashMap};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::{AnySource, DirSink, ParagraphSource, RegionKind, RegionSink, Segmenter, Threshold};

/// Settings for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Length threshold for every document in the run.
    pub threshold: Threshold,
    /// Do not write an `_S3` file when a document has no trailer.
    pub skip_empty_trailer: bool,
    /// Segment and report, but write nothing.
    pub dry_run: bool,
}

/// What happened to one successfully processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    /// Document name (file stem).
    pub name: String,
    /// Whether the single-paragraph shortcut was taken.
    pub single: bool,
    /// Regions emitted, in write order.
    pub regions: Vec<RegionKind>,
    /// Files written; empty on a dry run.
    pub written: Vec<PathBuf>,
}

/// The outcome for one input file.
#[derive(Debug)]
pub struct DocumentReport {
    /// The input file.
    pub path: PathBuf,
    /// Summary, or the error that stopped this document.
    pub result: std::result::Result<DocumentSummary, Error>,
}

/// Outcomes for a whole run, in input file name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per recognized input file.
    pub documents: Vec<DocumentReport>,
}

impl BatchReport {
    /// Documents processed without error.
    pub fn succeeded(&self) -> impl Iterator<Item = &DocumentSummary> {
        self.documents.iter().filter_map(|d| d.result.as_ref().ok())
    }

    /// Documents that failed, with their errors.
    pub fn failed(&self) -> impl Iterator<Item = (&Path, &Error)> {
        self.documents
            .iter()
            .filter_map(|d| d.result.as_ref().err().map(|e| (d.path.as_path(), e)))
    }

    /// Number of failed documents.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// Total number of files written.
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.succeeded().map(|s| s.written.len()).sum()
    }
}

/// Segment every recognized document in `input` into `output`.
///
/// Creates `output` if it does not exist (unless `dry_run`). Files are
/// recognized by [`AnySource`]; everything else in `input` is ignored, as
/// are subdirectories.
///
/// # Errors
///
/// Returns an error only when `output` cannot be created or `input` cannot
/// be listed. Per-document failures are reported in the [`BatchReport`].
pub fn process_dir(input: &Path, output: &Path, options: &BatchOptions) -> Result<BatchReport> {
    if !options.dry_run {
        std::fs::create_dir_all(output).map_err(|source| Error::CreateDir {
            path: output.to_path_buf(),
            source,
        })?;
    }

    let source = AnySource;
    let files = discover(input, &source)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        files = files.len(),
        threshold = options.threshold.min_length(),
        "processing batch"
    );

    let report = process_files(&files, &source, &DirSink::new(output), options);
    info!(
        processed = report.documents.len(),
        failed = report.failure_count(),
        written = report.files_written(),
        "batch complete"
    );
    Ok(report)
}

/// Recognized files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`Error::ListDir`] if `dir` cannot be read.
pub fn discover(dir: &Path, source: &dyn ParagraphSource) -> Result<Vec<PathBuf>> {
    let list_err = |source| Error::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if path.is_file() && source.accepts(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// For each file, the earlier file with the same stem, if any.
///
/// Outputs are named by stem, so `rel.txt` and `rel.json` would write the
/// same `rel_S*.txt` files. The first file in `files` keeps the name.
fn name_clashes(files: &[PathBuf]) -> Vec<Option<PathBuf>> {
    let mut owners: HashMap<&OsStr, &PathBuf> = HashMap::new();
    files
        .iter()
        .map(|path| {
            let stem = path.file_stem().unwrap_or_default();
            match owners.entry(stem) {
                Entry::Occupied(owner) => Some((*owner.get()).clone()),
                Entry::Vacant(slot) => {
                    slot.insert(path);
                    None
                }
            }
        })
        .collect()
}

/// Process `files` independently, in parallel when the `parallel` feature
/// is enabled. The report keeps the order of `files`.
///
/// A file whose stem was already claimed by an earlier file is reported as
/// [`Error::DuplicateName`] and not processed.
pub fn process_files(
    files: &[PathBuf],
    source: &dyn ParagraphSource,
    sink: &dyn RegionSink,
    options: &BatchOptions,
) -> BatchReport {
    let segmenter = Segmenter::new(options.threshold);
    let clashes = name_clashes(files);
    let run = |(path, clash): (&PathBuf, &Option<PathBuf>)| {
        let result = match clash {
            Some(first) => Err(Error::DuplicateName {
                path: path.clone(),
                first: first.clone(),
            }),
            None => process_file(path, source, sink, segmenter, options),
        };
        DocumentReport {
            path: path.clone(),
            result: result.inspect_err(|e| {
                warn!(path = %path.display(), error = %e, "skipping document");
            }),
        }
    };

    #[cfg(feature = "parallel")]
    let documents = {
        use rayon::prelude::*;
        files.par_iter().zip(clashes.par_iter()).map(run).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let documents = files.iter().zip(clashes.iter()).map(run).collect();

    BatchReport { documents }
}

/// Read, segment, and persist one document.
///
/// # Errors
///
/// Returns the read error, or the first write error.
pub fn process_file(
    path: &Path,
    source: &dyn ParagraphSource,
    sink: &dyn RegionSink,
    segmenter: Segmenter,
    options: &BatchOptions,
) -> Result<DocumentSummary> {
    let doc = source.read(path)?;
    let seg = segmenter.segment(&doc);
    let outputs = seg.outputs(options.skip_empty_trailer);
    debug!(
        document = doc.name(),
        paragraphs = doc.len(),
        single = seg.is_single(),
        regions = outputs.len(),
        "segmented"
    );

    let mut written = Vec::with_capacity(outputs.len());
    if !options.dry_run {
        for &(kind, text) in &outputs {
            let blocks: &[&str] = if text.is_empty() {
                &[]
            } else {
                std::slice::from_ref(&text)
            };
            let out = sink.write(doc.name(), kind, blocks)?;
            debug!(region = %kind, path = %out.display(), "wrote region");
            written.push(out);
        }
    }

    Ok(DocumentSummary {
        name: doc.name().to_string(),
        single: seg.is_single(),
        regions: outputs.into_iter().map(|(kind, _)| kind).collect(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::{Document, DocumentReadError};

    struct Fixed(Vec<String>);

    impl ParagraphSource for Fixed {
        fn accepts(&self, _: &Path) -> bool {
            true
        }

        fn read(&self, path: &Path) -> std::result::Result<Document, DocumentReadError> {
            if path.ends_with("bad") {
                return Err(DocumentReadError::Encoding {
                    path: path.to_path_buf(),
                });
            }
            Ok(Document::from_texts("mem", self.0.iter().cloned()))
        }
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(RegionKind, String)>>);

    impl RegionSink for Recorder {
        fn write(&self, base: &str, kind: RegionKind, blocks: &[&str]) -> Result<PathBuf> {
            self.0.lock().unwrap().push((kind, blocks.join("|")));
            Ok(PathBuf::from(format!("{base}{}", kind.suffix())))
        }
    }

    fn long(n: usize) -> String {
        "w".repeat(n)
    }

    #[test]
    fn test_process_file_writes_regions() {
        let source = Fixed(vec![
            long(150),
            "mid".into(),
            long(150),
            "About Acme".into(),
            long(150),
        ]);
        let sink = Recorder::default();
        let summary = process_file(
            Path::new("doc"),
            &source,
            &sink,
            Segmenter::default(),
            &BatchOptions::default(),
        )
        .unwrap();

        assert!(!summary.single);
        assert_eq!(summary.regions, vec![RegionKind::S1, RegionKind::S3, RegionKind::S2]);
        assert_eq!(summary.written.len(), 3);
        let recorded = sink.0.lock().unwrap();
        assert_eq!(recorded[2], (RegionKind::S2, format!("mid\n{}", long(150))));
    }

    #[test]
    fn test_empty_trailer_written_as_empty_file() {
        let source = Fixed(vec![long(150), long(150)]);
        let sink = Recorder::default();
        let options = BatchOptions::default();
        process_file(Path::new("doc"), &source, &sink, Segmenter::default(), &options).unwrap();

        let recorded = sink.0.lock().unwrap();
        assert!(recorded.contains(&(RegionKind::S3, String::new())));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let source = Fixed(vec![long(150)]);
        let sink = Recorder::default();
        let options = BatchOptions {
            dry_run: true,
            ..BatchOptions::default()
        };
        let summary =
            process_file(Path::new("doc"), &source, &sink, Segmenter::default(), &options)
                .unwrap();

        assert!(summary.single);
        assert_eq!(summary.regions, vec![RegionKind::S2]);
        assert!(summary.written.is_empty());
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_same_stem_reported_once_claimed() {
        let source = Fixed(vec![long(150)]);
        let sink = Recorder::default();
        let files = vec![
            PathBuf::from("in/rel.json"),
            PathBuf::from("in/rel.txt"),
            PathBuf::from("in/other.txt"),
        ];
        let report = process_files(&files, &source, &sink, &BatchOptions::default());

        assert_eq!(report.documents.len(), 3);
        assert_eq!(report.failure_count(), 1);
        let (path, err) = report.failed().next().unwrap();
        assert_eq!(path, Path::new("in/rel.txt"));
        assert!(
            matches!(err, Error::DuplicateName { first, .. } if first == Path::new("in/rel.json"))
        );
        assert_eq!(sink.0.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_failure_is_isolated() {
        let source = Fixed(vec![long(150)]);
        let sink = Recorder::default();
        let files = vec![PathBuf::from("a"), PathBuf::from("bad"), PathBuf::from("c")];
        let report = process_files(&files, &source, &sink, &BatchOptions::default());

        assert_eq!(report.documents.len(), 3);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.succeeded().count(), 2);
        assert_eq!(report.files_written(), 2);
        let (path, _) = report.failed().next().unwrap();
        assert_eq!(path, Path::new("bad"));
    }
}
