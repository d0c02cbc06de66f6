//! The per-format converter trait and the streaming conversion driver.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, trace};

use crate::bulk::BulkWriter;
use crate::document::LogDocument;
use crate::error::Result;

/// A stateless converter for one log format.
///
/// Implementations parse a single trimmed line into a [`LogDocument`], or
/// return `None` for lines that do not match the format's grammar.
pub trait LineConverter: Send + Sync {
    /// The collection this format's documents are indexed into.
    fn collection(&self) -> &'static str;

    /// Parses one trimmed, non-empty line.
    ///
    /// A line whose datetime cannot be parsed still yields a document with
    /// absent timestamp fields; only structurally unrecognizable lines
    /// yield `None`.
    fn parse_line(&self, line: &str) -> Option<LogDocument>;
}

/// Counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConvertStats {
    /// Non-empty input lines seen.
    pub lines_read: u64,
    /// Documents written as bulk record pairs.
    pub docs_emitted: u64,
    /// Lines that did not match the format's grammar.
    pub lines_skipped: u64,
}

/// Converts every line from `reader`, writing bulk record pairs to
/// `writer`.
///
/// Blank lines are ignored. Malformed lines are skipped and counted, never
/// fatal. Bytes that are not valid UTF-8 are replaced rather than
/// aborting the run.
///
/// # Errors
///
/// Returns an error only for I/O or serialization failures.
pub fn convert_stream<C, R, W>(
    converter: &C,
    mut reader: R,
    writer: &mut BulkWriter<W>,
) -> Result<ConvertStats>
where
    C: LineConverter + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut stats = ConvertStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        stats.lines_read += 1;

        match converter.parse_line(line) {
            Some(doc) => {
                writer.write(converter.collection(), &doc)?;
                stats.docs_emitted += 1;
            }
            None => {
                trace!(collection = converter.collection(), line, "skipping malformed line");
                stats.lines_skipped += 1;
            }
        }
    }

    debug!(
        collection = converter.collection(),
        read = stats.lines_read,
        emitted = stats.docs_emitted,
        skipped = stats.lines_skipped,
        "conversion finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts lines starting with "ok", rejects everything else.
    struct OkConverter;

    impl LineConverter for OkConverter {
        fn collection(&self) -> &'static str {
            "test"
        }

        fn parse_line(&self, line: &str) -> Option<LogDocument> {
            line.starts_with("ok")
                .then(|| LogDocument::new(line.to_string(), line.to_string()))
        }
    }

    #[test]
    fn driver_counts_and_pairs_records() {
        let input = "ok one\nbad line\n\nok two\n";
        let mut out = Vec::new();
        let mut writer = BulkWriter::new(&mut out);

        let stats =
            convert_stream(&OkConverter, input.as_bytes(), &mut writer).expect("convert");
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.docs_emitted, 2);
        assert_eq!(stats.lines_skipped, 1);

        let text = String::from_utf8(out).expect("utf8 output");
        let lines: Vec<&str> = text.lines().collect();
        // Two documents, each preceded by its action line.
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"{"index":{"_index":"test"}}"#);
        assert!(lines[1].contains("ok one"));
        assert_eq!(lines[2], r#"{"index":{"_index":"test"}}"#);
        assert!(lines[3].contains("ok two"));
    }

    #[test]
    fn driver_handles_empty_input() {
        let mut out = Vec::new();
        let mut writer = BulkWriter::new(&mut out);
        let stats = convert_stream(&OkConverter, "".as_bytes(), &mut writer).expect("convert");
        assert_eq!(stats, ConvertStats::default());
        assert!(out.is_empty());
    }

    #[test]
    fn driver_replaces_invalid_utf8() {
        let input: &[u8] = b"ok caf\xff\n";
        let mut out = Vec::new();
        let mut writer = BulkWriter::new(&mut out);
        let stats = convert_stream(&OkConverter, input, &mut writer).expect("convert");
        assert_eq!(stats.docs_emitted, 1);
    }
}
