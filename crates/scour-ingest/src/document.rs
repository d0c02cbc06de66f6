//! The canonical log-derived document shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A log line converted to its canonical document form.
///
/// Timestamps are carried twice: as epoch seconds and as UTC-labeled
/// ISO-8601 text. Both are absent when the source line's datetime could
/// not be parsed; the rest of the document is still emitted. Fields that
/// only some formats produce (level, component, host) are omitted from the
/// serialized document when absent, and any remaining format oddities ride
/// in the flattened `extra` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogDocument {
    /// Seconds since the Unix epoch, when the line's datetime parsed.
    pub timestamp_epoch: Option<i64>,
    /// ISO-8601 timestamp with a trailing `Z`, when the datetime parsed.
    pub timestamp_iso: Option<String>,
    /// Log severity, for formats that carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Emitting component or logger, for formats that carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Originating host, for formats that carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Format-specific leftovers, keyed deterministically.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
    /// The parsed message portion of the line.
    pub message: String,
    /// The source line, trimmed.
    pub raw_line: String,
}

impl LogDocument {
    /// A document with just the message and raw line set.
    #[must_use]
    pub fn new(message: impl Into<String>, raw_line: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raw_line: raw_line.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_timestamps_serialize_as_null() {
        let doc = LogDocument::new("msg", "raw");
        let value = serde_json::to_value(&doc).expect("serialize");
        assert!(value["timestamp_epoch"].is_null());
        assert!(value["timestamp_iso"].is_null());
    }

    #[test]
    fn absent_format_fields_are_omitted() {
        let doc = LogDocument::new("msg", "raw");
        let value = serde_json::to_value(&doc).expect("serialize");
        let map = value.as_object().expect("object");
        assert!(!map.contains_key("level"));
        assert!(!map.contains_key("component"));
        assert!(!map.contains_key("host"));
    }

    #[test]
    fn extra_fields_flatten_into_the_document() {
        let mut doc = LogDocument::new("msg", "raw");
        doc.extra
            .insert("date_raw".to_string(), serde_json::json!("081109"));
        let value = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(value["date_raw"], "081109");
    }

    #[test]
    fn serde_roundtrip() {
        let mut doc = LogDocument::new("msg", "raw");
        doc.timestamp_epoch = Some(1_131_566_461);
        doc.timestamp_iso = Some("2005-11-09T20:01:01Z".to_string());
        doc.host = Some("dn228".to_string());

        let json = serde_json::to_string(&doc).expect("serialize");
        let parsed: LogDocument = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(doc, parsed);
    }
}
