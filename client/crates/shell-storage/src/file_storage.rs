use crate::{DurableStorage, StorageError, StorageResult, validate_key};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

/// Directory-backed storage: one file per key.
///
/// Writes go through a temp file, fsync, then an atomic rename, so a crash
/// mid-write never leaves a truncated value behind.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
    write_seq: AtomicU64,
}

impl FileStorage {
    /// Opens (and creates if needed) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::dir_creation(dir.clone(), e))?;

        Ok(Self {
            dir,
            write_seq: AtomicU64::new(0),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl DurableStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;
        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        let temp_path = self
            .dir
            .join(format!("{key}.tmp.{}.{seq}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Stored {} bytes under '{key}'", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_write(path, e)),
        }
    }
}
