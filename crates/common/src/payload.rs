//! The JSON payload handed to a worker after decryption.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current payload format version.
pub const PAYLOAD_VERSION: &str = "1";

/// Environment variables and an optional command list for a worker.
///
/// Serialised as JSON; this shape is what the worker decrypts and executes
/// against, so field names are part of the wire contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Payload format version, currently `"1"`.
    pub version: String,

    /// Environment variables to set in the worker. Ordered map so repeated
    /// serialisation of the same payload is byte-stable.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Command (argv) for the worker to run; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cmd: Vec<String>,
}

impl Payload {
    /// A new, empty payload at the current format version.
    pub fn new() -> Self {
        Self {
            version: PAYLOAD_VERSION.into(),
            env: BTreeMap::new(),
            cmd: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_payload_carries_version() {
        let p = Payload::new();
        assert_eq!(p.version, "1");
        assert!(p.env.is_empty());
        assert!(p.cmd.is_empty());
    }

    #[test]
    fn cmd_omitted_when_empty() {
        let mut p = Payload::new();
        p.env.insert("FOO".into(), "bar".into());
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("\"cmd\""));
        assert!(json.contains("\"FOO\":\"bar\""));
    }

    #[test]
    fn round_trips_through_json() {
        let mut p = Payload::new();
        p.env.insert("A".into(), "1".into());
        p.cmd = vec!["run".into(), "--fast".into()];
        let json = serde_json::to_string(&p).unwrap();
        let back: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn missing_fields_default() {
        let p: Payload = serde_json::from_str(r#"{"version":"1"}"#).unwrap();
        assert!(p.env.is_empty());
        assert!(p.cmd.is_empty());
    }
}
