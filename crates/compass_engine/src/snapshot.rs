use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot directory missing or not writable: {0}")]
    Directory(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Creates the snapshot directory if needed and checks that it takes files.
pub fn ensure_snapshot_dir(dir: &Path) -> Result<(), SnapshotError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| SnapshotError::Directory(e.to_string()))?;
        if !meta.is_dir() {
            return Err(SnapshotError::Directory(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| SnapshotError::Directory(e.to_string()))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| SnapshotError::Directory(e.to_string()))?;
    Ok(())
}

/// Writes rendered pages into one directory. A reader never sees a
/// half-written page: content goes to a temp file that is then renamed.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, page: &str, html: &str) -> Result<PathBuf, SnapshotError> {
        ensure_snapshot_dir(&self.dir)?;

        let target = self.dir.join(page);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(html.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| SnapshotError::Io(e.error))?;
        Ok(target)
    }
}
