//! Flat on-disk image store.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A flat namespace of named byte blobs on disk
///
/// Every stored image lives directly under one directory; names never
/// contain path separators. From the batch machinery's perspective the store
/// is append-only: keys are unique per run, so concurrent writes never
/// target the same slot.
#[derive(Clone, Debug)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Open (and if needed create) the store at `dir`
    ///
    /// Creation is idempotent; an existing directory is used as-is.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the directory cannot be created.
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir).map_err(|e| Error::Config {
            message: format!(
                "failed to create storage directory '{}': {}",
                dir.display(),
                e
            ),
            key: Some("storage_dir".to_string()),
        })?;

        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// The directory blobs are stored under
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a blob name to its on-disk path
    ///
    /// Names are a flat namespace: anything containing a path separator or a
    /// `..` component is rejected so a lookup can never escape the store.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty()
            || name.contains('/')
            || name.contains('\\')
            || name == "."
            || name == ".."
        {
            return Err(Error::Validation(format!("invalid image name '{name}'")));
        }

        Ok(self.dir.join(name))
    }

    /// Write `bytes` under `key`
    pub async fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        tokio::fs::write(&path, bytes).await.map_err(Error::Io)?;
        Ok(())
    }

    /// Read all bytes stored under `name`
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no blob exists under `name`; other
    /// read failures surface as I/O errors.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound(name.to_string()))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}
