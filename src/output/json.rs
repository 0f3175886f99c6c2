//! JSON output formatting

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Envelope for JSON output
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339, UTC)
    pub timestamp: String,

    /// Client name and version, e.g. `natter/0.1.0`
    pub client: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                client: concat!("natter/", env!("CARGO_PKG_VERSION")).to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_has_data_and_meta() {
        let value: serde_json::Value =
            serde_json::from_str(&format_json(&vec!["a", "b"]).unwrap()).unwrap();

        assert_eq!(value["data"], serde_json::json!(["a", "b"]));
        assert!(value["meta"]["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(
            value["meta"]["client"],
            format!("natter/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_absent_fields_are_skipped_by_callers() {
        #[derive(Serialize)]
        struct View {
            #[serde(skip_serializing_if = "Option::is_none")]
            location: Option<&'static str>,
        }

        let out = format_json(&View { location: None }).unwrap();
        assert!(out.contains("\"data\": {}"));
    }
}
