use serde_json::{Map, Value};

/// One Serilog compact-JSON event, reduced to the fields the report uses.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    pub status: Option<Value>,
    pub response: Option<Value>,
    pub exception: Option<String>,
}

impl LogEntry {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            timestamp: find_str(object, "@t").unwrap_or("-").to_string(),
            level: find_str(object, "@l").unwrap_or("-").to_string(),
            message: find_str(object, "@mt").unwrap_or("").to_string(),
            status: object.get("Status").cloned(),
            response: object.get("Response").cloned(),
            exception: object.get("@x").map(display_value),
        }
    }
}

fn find_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(|v| v.as_str())
}

/// Strings print bare; everything else prints as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn extracts_core_and_optional_fields() {
        let entry = LogEntry::from_object(&object(json!({
            "@t": "2025-12-26T10:00:00Z",
            "@l": "Error",
            "@mt": "Spotify call failed",
            "Status": 502,
            "Response": "Bad Gateway",
            "@x": "System.Exception: boom",
        })));

        assert_eq!(entry.timestamp, "2025-12-26T10:00:00Z");
        assert_eq!(entry.level, "Error");
        assert_eq!(entry.message, "Spotify call failed");
        assert_eq!(entry.status, Some(json!(502)));
        assert_eq!(entry.response, Some(json!("Bad Gateway")));
        assert_eq!(entry.exception.as_deref(), Some("System.Exception: boom"));
    }

    #[test]
    fn missing_fields_fall_back() {
        let entry = LogEntry::from_object(&object(json!({ "@mt": 7 })));
        assert_eq!(entry.timestamp, "-");
        assert_eq!(entry.level, "-");
        assert_eq!(entry.message, "");
        assert!(entry.status.is_none());
        assert!(entry.response.is_none());
        assert!(entry.exception.is_none());
    }

    #[test]
    fn display_value_unquotes_strings_only() {
        assert_eq!(display_value(&json!("OK")), "OK");
        assert_eq!(display_value(&json!(404)), "404");
        assert_eq!(display_value(&json!(null)), "null");
        assert_eq!(display_value(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
