//! The storage capability and document helpers.

use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::error::StoreError;

/// A JSON document: the top-level object of a file.
pub type Document = serde_json::Map<String, Value>;

/// Reads and writes JSON documents by path.
///
/// Implementors provide the two I/O primitives; serialization is shared.
pub trait JsonStore {
    /// Parses the document at `path`. Fails if the file is absent,
    /// unreadable, malformed or not a JSON object.
    fn read_document(&self, path: &Path) -> Result<Document, StoreError>;

    /// Opens a sink that replaces the contents of `path`. The sink is
    /// released when dropped.
    fn open_writer(&self, path: &Path) -> Result<Box<dyn Write>, StoreError>;

    /// Serializes `document` to `sink` as pretty-printed JSON and flushes.
    fn write_document(
        &self,
        document: &Document,
        sink: &mut dyn Write,
    ) -> Result<(), StoreError> {
        serde_json::to_writer_pretty(&mut *sink, document)?;
        sink.flush()?;
        Ok(())
    }

    /// Replaces the document at `path` with `document`.
    fn save_document(&self, path: &Path, document: &Document) -> Result<(), StoreError> {
        let mut sink = self.open_writer(path)?;
        self.write_document(document, &mut sink)
    }
}

/// Returns the array stored under `key`, or `None` if the key is absent.
pub fn get_array<'a>(
    document: &'a Document,
    key: &str,
) -> Result<Option<&'a Vec<Value>>, StoreError> {
    match document.get(key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(StoreError::NotAnArray(key.to_string())),
    }
}
