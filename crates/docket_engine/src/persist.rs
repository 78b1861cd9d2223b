use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the output directory exists; create it if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|err| PersistError::OutputDir(err.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|err| PersistError::OutputDir(err.to_string()))?;
    }
    Ok(())
}

/// Write `{dir}/{filename}` atomically: temp file in the same directory,
/// fsync, then rename over any existing file. A run that dies mid-write
/// leaves the previous dataset intact.
pub fn write_atomic(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
    ensure_output_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target)
        .map_err(|err| PersistError::Io(err.error))?;
    Ok(target)
}
