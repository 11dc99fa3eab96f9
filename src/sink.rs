//! Writing regions to files.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::RegionKind;

/// Something that persists a region as a new document.
pub trait RegionSink: Send + Sync {
    /// Persist `blocks` (one paragraph each) as region `kind` of document
    /// `base`, returning where it went.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the region cannot be stored.
    fn write(&self, base: &str, kind: RegionKind, blocks: &[&str]) -> Result<PathBuf>;
}

/// Writes `<dir>/<base>_S1.txt` and friends.
///
/// Blocks are separated by a blank line, so a [`TextSource`](crate::TextSource)
/// reads a single-block output back as one paragraph as long as the block
/// itself has no blank lines. An empty block list produces an empty file.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Write into `dir`, which must already exist.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where region `kind` of `base` is written.
    #[must_use]
    pub fn path_for(&self, base: &str, kind: RegionKind) -> PathBuf {
        self.dir.join(format!("{base}{}.txt", kind.suffix()))
    }
}

impl RegionSink for DirSink {
    fn write(&self, base: &str, kind: RegionKind, blocks: &[&str]) -> Result<PathBuf> {
        let path = self.path_for(base, kind);
        let mut contents = blocks
            .iter()
            .filter(|b| !b.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        std::fs::write(&path, contents).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        let sink = DirSink::new("/out");
        assert_eq!(
            sink.path_for("release", RegionKind::S2),
            PathBuf::from("/out/release_S2.txt")
        );
    }

    #[test]
    fn test_write_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirSink::new(dir.path());

        let path = sink.write("doc", RegionKind::S1, &["lead text"]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "lead text\n");

        let path = sink.write("doc", RegionKind::S3, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        let path = sink.write("doc", RegionKind::S2, &["a", "", "b"]).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a\n\nb\n");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let sink = DirSink::new("/definitely/not/here");
        let err = sink.write("doc", RegionKind::S1, &["x"]).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
