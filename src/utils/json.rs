//! Text-level JSON reading and writing shared by every processing format.

use crate::utils::error::{describe_value, FormatError, Result};
use serde_json::{Map, Value};

/// 將 JSON 文字解析成物件
pub fn from_json_string(text: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(obj) => Ok(obj),
        other => Err(FormatError::NotAnObject {
            found: describe_value(&other),
        }),
    }
}

/// 將 JSON 物件輸出成單行文字
pub fn to_json_string(obj: &Map<String, Value>) -> Result<String> {
    Ok(serde_json::to_string(obj)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_string_object() {
        let obj = from_json_string(r#"{"Station":"BOZ","Latitude":45.5}"#).unwrap();
        assert_eq!(obj.get("Station"), Some(&Value::String("BOZ".to_string())));
    }

    #[test]
    fn test_from_json_string_rejects_malformed_text() {
        let err = from_json_string(r#"{"Station":"BOZ","#).unwrap_err();
        assert!(matches!(err, FormatError::Parse(_)));
    }

    #[test]
    fn test_from_json_string_rejects_non_object() {
        let err = from_json_string("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, FormatError::NotAnObject { ref found } if found == "an array"));
    }

    #[test]
    fn test_to_json_string_keeps_insertion_order() {
        let mut obj = Map::new();
        obj.insert("Station".to_string(), Value::from("BOZ"));
        obj.insert("Channel".to_string(), Value::from("BHZ"));
        assert_eq!(
            to_json_string(&obj).unwrap(),
            r#"{"Station":"BOZ","Channel":"BHZ"}"#
        );
    }
}
