//! Apache error-log format converter.
//!
//! Example line:
//! `[Sun Dec 04 04:47:44 2005] [notice] workerEnv.init() ok /etc/httpd/conf/workers2.properties`

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::convert::LineConverter;
use crate::document::LogDocument;

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\[(?P<weekday>\w{3})\s+(?P<month>\w{3})\s+(?P<day>\d{2})\s+(?P<time>\d{2}:\d{2}:\d{2})\s+(?P<year>\d{4})\]\s+\[(?P<level>[^\]]+)\]\s+(?P<rest>.*)$",
    )
    .unwrap_or_else(|_| unreachable!())
});

/// Converter for Apache error logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApacheConverter;

impl ApacheConverter {
    fn timestamps(weekday: &str, month: &str, day: &str, time: &str, year: &str) -> Option<(i64, String)> {
        let composed = format!("{weekday} {month} {day} {time} {year}");
        let dt = NaiveDateTime::parse_from_str(&composed, "%a %b %d %H:%M:%S %Y").ok()?;
        let epoch = dt.and_utc().timestamp();
        let iso = dt.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        Some((epoch, iso))
    }
}

impl LineConverter for ApacheConverter {
    fn collection(&self) -> &'static str {
        "apache"
    }

    fn parse_line(&self, line: &str) -> Option<LogDocument> {
        let caps = LINE_RE.captures(line)?;

        let parsed = Self::timestamps(
            &caps["weekday"],
            &caps["month"],
            &caps["day"],
            &caps["time"],
            &caps["year"],
        );

        let mut doc = LogDocument::new(caps["rest"].to_string(), line.to_string());
        if let Some((epoch, iso)) = parsed {
            doc.timestamp_epoch = Some(epoch);
            doc.timestamp_iso = Some(iso);
        }
        doc.level = Some(caps["level"].to_string());
        Some(doc)
    }
}
