//! Thunderbird supercomputer log format converter.
//!
//! Example line:
//! `- 1131566461 2005.11.09 dn228 Nov 9 12:01:01 dn228/dn228 crond(pam_unix)[2915]: session closed for user root`

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::convert::LineConverter;
use crate::document::LogDocument;

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^-\s*(?P<epoch>\d+)\s+(?P<date>\d{4}\.\d{2}\.\d{2})\s+(?P<host>\S+)\s+(?P<rest>.*)$",
    )
    .unwrap_or_else(|_| unreachable!())
});

/// Converter for Thunderbird syslog dumps.
///
/// Each line leads with a dash, epoch seconds, a dotted date, and the
/// originating host; the remainder is kept verbatim as the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThunderbirdConverter;

impl ThunderbirdConverter {
    fn timestamps(epoch: &str) -> Option<(i64, String)> {
        let seconds: i64 = epoch.parse().ok()?;
        let dt = DateTime::from_timestamp(seconds, 0)?;
        let iso = dt.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        Some((seconds, iso))
    }
}

impl LineConverter for ThunderbirdConverter {
    fn collection(&self) -> &'static str {
        "thunderbird"
    }

    fn parse_line(&self, line: &str) -> Option<LogDocument> {
        let caps = LINE_RE.captures(line)?;

        let parsed = Self::timestamps(&caps["epoch"]);

        let mut doc = LogDocument::new(caps["rest"].to_string(), line.to_string());
        if let Some((epoch, iso)) = parsed {
            doc.timestamp_epoch = Some(epoch);
            doc.timestamp_iso = Some(iso);
        }
        doc.host = Some(caps["host"].to_string());
        doc.extra
            .insert("date_raw".to_string(), json!(&caps["date"]));
        Some(doc)
    }
}
