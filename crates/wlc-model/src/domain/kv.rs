use serde::{Deserialize, Serialize};

/// Key–value pair used for environment variables.
///
/// Both fields are plain UTF-8 strings with no validation applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    /// Name of the variable.
    key: String,
    /// Value associated with the key.
    value: String,
}

impl KeyValue {
    /// Create a new key–value pair.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a `KEY=VALUE` assignment.
    ///
    /// Only the first `=` separates key from value, so values may carry `=` themselves
    /// (base64 padding, nested assignments). An entry without `=` becomes a key with an empty value.
    pub fn parse_assignment(raw: &str) -> Self {
        match raw.split_once('=') {
            Some((key, value)) => Self::new(key, value),
            None => Self::new(raw, ""),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<(String, String)> for KeyValue {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl From<(&str, &str)> for KeyValue {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::KeyValue;

    #[test]
    fn assignment_splits_on_first_equals_only() {
        let kv = KeyValue::parse_assignment("KEY=a=b=c");
        assert_eq!(kv.key(), "KEY");
        assert_eq!(kv.value(), "a=b=c");
    }

    #[test]
    fn assignment_keeps_base64_padding() {
        let kv = KeyValue::parse_assignment("CERT=Zm9vYmFy==");
        assert_eq!(kv.key(), "CERT");
        assert_eq!(kv.value(), "Zm9vYmFy==");
    }

    #[test]
    fn assignment_without_equals_has_empty_value() {
        let kv = KeyValue::parse_assignment("FLAG");
        assert_eq!(kv.key(), "FLAG");
        assert_eq!(kv.value(), "");
    }

    #[test]
    fn assignment_with_empty_value() {
        let kv = KeyValue::parse_assignment("EMPTY=");
        assert_eq!(kv.key(), "EMPTY");
        assert_eq!(kv.value(), "");
    }

    #[test]
    fn from_str_tuple_creates_keyvalue() {
        let kv: KeyValue = ("FOO", "bar").into();
        assert_eq!(kv, KeyValue::new("FOO", "bar"));
    }

    #[test]
    fn serde_uses_camel_case_fields() {
        let kv = KeyValue::new("FOO", "bar");
        let json = serde_json::to_string(&kv).unwrap();
        assert!(json.contains("\"key\":\"FOO\""));
        assert!(json.contains("\"value\":\"bar\""));
    }
}
