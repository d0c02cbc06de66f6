//! Paired action/document bulk NDJSON emission.

use std::io::Write;

use serde_json::json;

use crate::document::LogDocument;
use crate::error::Result;

/// Writes bulk-index record pairs: an action line naming the target
/// collection, then the document body, each on its own line.
#[derive(Debug)]
pub struct BulkWriter<W: Write> {
    inner: W,
}

impl<W: Write> BulkWriter<W> {
    /// Wraps a writer for bulk emission.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes one action/document pair.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write(&mut self, collection: &str, doc: &LogDocument) -> Result<()> {
        let action = json!({ "index": { "_index": collection } });
        serde_json::to_writer(&mut self.inner, &action)?;
        self.inner.write_all(b"\n")?;
        serde_json::to_writer(&mut self.inner, doc)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
