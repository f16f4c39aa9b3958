use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use engine_logging::engine_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::ExportArtifact;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {0:?} is not a directory")]
    NotADirectory(PathBuf),
    #[error("cannot create output directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Creates `dir` (and parents) unless it already exists as a directory.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PersistError::NotADirectory(dir.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|source| PersistError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(PersistError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Places export artifacts in one directory. Each file is staged in a
/// sibling temp file and renamed over the target, replacing an earlier
/// export of the same title.
pub struct AtomicArtifactWriter {
    dir: PathBuf,
}

impl AtomicArtifactWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, artifact: &ExportArtifact) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;
        let target = self.dir.join(&artifact.filename);

        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(&artifact.bytes)?;
        staged.as_file().sync_all()?;
        staged.persist(&target).map_err(|err| PersistError::Io(err.error))?;

        engine_debug!("wrote {} bytes to {:?}", artifact.bytes.len(), target);
        Ok(target)
    }
}
