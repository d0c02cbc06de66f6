//! HDFS datanode log format converter.
//!
//! Example line:
//! `081109 203615 148 INFO dfs.DataNode$PacketResponder: PacketResponder 1 for block blk_38865049064139660 terminating`

use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::convert::LineConverter;
use crate::document::LogDocument;

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<date>\d{6})\s+(?P<time>\d{6})\s+(?P<millis>\d+)\s+(?P<level>[A-Z]+)\s+(?P<component>\S+):\s+(?P<message>.*)$",
    )
    .unwrap_or_else(|_| unreachable!())
});

/// Converter for HDFS datanode logs.
///
/// Dates are two-digit years interpreted as 2000+yy; the third column is a
/// millisecond offset added to the second-resolution datetime.
#[derive(Debug, Default, Clone, Copy)]
pub struct HdfsConverter;

impl HdfsConverter {
    fn timestamps(date: &str, time: &str, millis: &str) -> Option<(i64, String)> {
        let yy: i32 = date.get(0..2)?.parse().ok()?;
        let mm: u32 = date.get(2..4)?.parse().ok()?;
        let dd: u32 = date.get(4..6)?.parse().ok()?;
        let hh: u32 = time.get(0..2)?.parse().ok()?;
        let mi: u32 = time.get(2..4)?.parse().ok()?;
        let ss: u32 = time.get(4..6)?.parse().ok()?;

        let base: NaiveDateTime =
            NaiveDate::from_ymd_opt(2000 + yy, mm, dd)?.and_hms_opt(hh, mi, ss)?;
        let offset: i64 = millis.parse().ok()?;
        let dt = base.checked_add_signed(Duration::try_milliseconds(offset)?)?;

        let epoch = dt.and_utc().timestamp();
        let iso = dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
        Some((epoch, iso))
    }
}

impl LineConverter for HdfsConverter {
    fn collection(&self) -> &'static str {
        "hdfs"
    }

    fn parse_line(&self, line: &str) -> Option<LogDocument> {
        let caps = LINE_RE.captures(line)?;

        let parsed = Self::timestamps(&caps["date"], &caps["time"], &caps["millis"]);

        let mut doc = LogDocument::new(caps["message"].to_string(), line.to_string());
        if let Some((epoch, iso)) = parsed {
            doc.timestamp_epoch = Some(epoch);
            doc.timestamp_iso = Some(iso);
        }
        doc.level = Some(caps["level"].to_string());
        doc.component = Some(caps["component"].to_string());
        doc.extra
            .insert("date_raw".to_string(), json!(&caps["date"]));
        doc.extra
            .insert("time_raw".to_string(), json!(&caps["time"]));
        doc.extra
            .insert("millis".to_string(), json!(&caps["millis"]));
        Some(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "081109 203615 148 INFO dfs.DataNode$PacketResponder: PacketResponder 1 for block blk_38865049064139660 terminating";

    #[test]
    fn parses_well_formed_line() {
        let doc = HdfsConverter.parse_line(SAMPLE).expect("should parse");
        assert_eq!(doc.timestamp_iso.as_deref(), Some("2008-11-09T20:36:15.148Z"));
        assert_eq!(doc.timestamp_epoch, Some(1_226_262_975));
        assert_eq!(doc.level.as_deref(), Some("INFO"));
        assert_eq!(doc.component.as_deref(), Some("dfs.DataNode$PacketResponder"));
        assert!(doc.message.starts_with("PacketResponder 1"));
        assert_eq!(doc.raw_line, SAMPLE);
    }

    #[test]
    fn raw_date_fields_ride_as_extras() {
        let doc = HdfsConverter.parse_line(SAMPLE).expect("should parse");
        assert_eq!(doc.extra["date_raw"], "081109");
        assert_eq!(doc.extra["time_raw"], "203615");
        assert_eq!(doc.extra["millis"], "148");
    }

    #[test]
    fn component_keeps_dollar_segments_without_trailing_colon() {
        let line = "081109 203807 222 WARN dfs.FSNamesystem: BLOCK* replication failed";
        let doc = HdfsConverter.parse_line(line).expect("should parse");
        assert_eq!(doc.component.as_deref(), Some("dfs.FSNamesystem"));
        assert_eq!(doc.level.as_deref(), Some("WARN"));
    }

    #[test]
    fn malformed_line_is_rejected() {
        assert!(HdfsConverter.parse_line("not an hdfs line").is_none());
        // Lowercase level fails the grammar.
        assert!(
            HdfsConverter
                .parse_line("081109 203615 148 info dfs.DataNode: msg")
                .is_none()
        );
        assert!(HdfsConverter.parse_line("").is_none());
    }

    #[test]
    fn bad_datetime_keeps_line_with_absent_timestamps() {
        // Month 99 matches the grammar but not the calendar.
        let line = "089932 203615 148 INFO dfs.DataNode: strange clock";
        let doc = HdfsConverter.parse_line(line).expect("line matches the grammar");
        assert_eq!(doc.timestamp_epoch, None);
        assert_eq!(doc.timestamp_iso, None);
        assert_eq!(doc.level.as_deref(), Some("INFO"));
    }

    #[test]
    fn collection_name() {
        assert_eq!(HdfsConverter.collection(), "hdfs");
    }
}
