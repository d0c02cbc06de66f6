//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use scour_ingest::ConvertStats;
use scour_query::SearchRequest;

use crate::cli::Format;
use crate::client::Hit;
use crate::error::CliError;

/// Messages longer than this are truncated for console display.
const MESSAGE_DISPLAY_LIMIT: usize = 200;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| {
            CliError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as human-readable console output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// A compiled search request, ready for display.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RequestOutput(pub SearchRequest);

impl TableDisplay for RequestOutput {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Collections:  {}", self.0.collections.join(", "))?;
        writeln!(writer, "Limit:        {}", self.0.result_limit)?;
        writeln!(writer, "Query:")?;
        let json = serde_json::to_string_pretty(&self.0.query)?;
        for line in json.lines() {
            writeln!(writer, "  {line}")?;
        }
        Ok(())
    }
}

/// One hit projected into its display form.
#[derive(Debug, Clone, Serialize)]
pub struct HitView {
    /// Collection the hit came from.
    pub collection: String,
    /// Best available timestamp: ISO text, or epoch seconds as a fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Message (or raw line), truncated for console display.
    pub message: String,
}

impl HitView {
    /// Projects an engine hit for display.
    #[must_use]
    pub fn from_hit(hit: &Hit) -> Self {
        let timestamp = hit
            .source
            .get("timestamp_iso")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| {
                hit.source
                    .get("timestamp_epoch")
                    .and_then(Value::as_i64)
                    .map(|epoch| epoch.to_string())
            });
        let message = hit
            .source
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| hit.source.get("raw_line").and_then(Value::as_str))
            .unwrap_or_default();
        Self {
            collection: hit.index.clone(),
            timestamp,
            message: truncate_message(message),
        }
    }
}

/// The hits of one search, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct HitList {
    /// Requested result-size bound.
    pub size: u32,
    /// Returned hits, best first.
    pub hits: Vec<HitView>,
}

impl HitList {
    /// Projects every hit of a response for display.
    #[must_use]
    pub fn new(hits: &[Hit], size: u32) -> Self {
        Self {
            size,
            hits: hits.iter().map(HitView::from_hit).collect(),
        }
    }
}

impl TableDisplay for HitList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(
            writer,
            "Returned {} hits (showing up to {}):",
            self.hits.len(),
            self.size
        )?;
        writeln!(writer)?;
        for hit in &self.hits {
            let ts = hit.timestamp.as_deref().unwrap_or("?");
            writeln!(writer, "  [{}] {} | {}", hit.collection, ts, hit.message)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

/// Summary of one conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertSummary {
    /// Collection the documents were indexed into.
    pub collection: String,
    /// Where the bulk records were written.
    pub output: String,
    /// Conversion counters.
    pub stats: ConvertStats,
}

impl TableDisplay for ConvertSummary {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "✓ Conversion complete")?;
        writeln!(writer, "  Collection:     {}", self.collection)?;
        writeln!(writer, "  Output:         {}", self.output)?;
        writeln!(writer, "  Lines read:     {}", self.stats.lines_read)?;
        writeln!(writer, "  Docs emitted:   {}", self.stats.docs_emitted)?;
        writeln!(writer, "  Lines skipped:  {}", self.stats.lines_skipped)?;
        Ok(())
    }
}

/// Truncates messages longer than the display limit, keeping 197 characters
/// plus an ellipsis.
fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MESSAGE_DISPLAY_LIMIT {
        message.to_string()
    } else {
        let head: String = message.chars().take(MESSAGE_DISPLAY_LIMIT - 3).collect();
        format!("{head}...")
    }
}
