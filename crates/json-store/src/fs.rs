//! Local filesystem implementation of [`JsonStore`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::StoreError;
use crate::store::{Document, JsonStore};

/// Stores documents as files on the local filesystem.
///
/// [`save_document`](JsonStore::save_document) writes a sibling
/// `<name>.tmp` file and renames it over the target, so a failed write
/// leaves the previous document in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsJsonStore;

impl FsJsonStore {
    pub fn new() -> Self {
        Self
    }

    /// Creates `path` containing an empty object if it does not exist yet.
    ///
    /// Parent directories are created as needed. An existing file is left
    /// untouched, whatever it contains. Returns `true` if the file was
    /// created.
    pub fn ensure_document(&self, path: &Path) -> Result<bool, StoreError> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        self.save_document(path, &Document::new())?;
        tracing::debug!(path = %path.display(), "created empty JSON document");
        Ok(true)
    }
}

impl JsonStore for FsJsonStore {
    fn read_document(&self, path: &Path) -> Result<Document, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(document) => Ok(document),
            _ => Err(StoreError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    fn open_writer(&self, path: &Path) -> Result<Box<dyn Write>, StoreError> {
        let file = File::create(path).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn save_document(&self, path: &Path, document: &Document) -> Result<(), StoreError> {
        let temp_path = temp_path_for(path);

        let written = self
            .open_writer(&temp_path)
            .and_then(|mut sink| self.write_document(document, &mut sink));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e);
        }

        std::fs::rename(&temp_path, path).map_err(|source| {
            let _ = std::fs::remove_file(&temp_path);
            StoreError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
