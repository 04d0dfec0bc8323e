use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors};

/// Accepts the many spellings a boolean takes in form posts and JSON:
/// `true`/`false`, `1`/`0`, `on` (checked HTML checkbox), or a JSON bool.
pub fn deserialize_bool_flexible<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
        String(String),
    }

    match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => Ok(b),
        BoolOrInt::Int(i) => Ok(i != 0),
        BoolOrInt::String(s) => match s.trim() {
            "true" | "1" | "on" => Ok(true),
            "false" | "0" | "off" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "Invalid boolean string: {}",
                other
            ))),
        },
    }
}

fn field_error(field: &'static str, code: &'static str, message: String) -> ValidationErrors {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

/// Coerces a numeric form field; empty input counts as invalid.
pub fn parse_integer(field: &'static str, raw: &str) -> Result<i32, ValidationErrors> {
    raw.trim().parse::<i32>().map_err(|_| {
        field_error(
            field,
            "integer",
            format!("{} must be a whole number", field),
        )
    })
}

/// Coerces an optional id field: empty input means "none".
pub fn parse_optional_id(field: &'static str, raw: &str) -> Result<Option<i64>, ValidationErrors> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>().map(Some).map_err(|_| {
        field_error(
            field,
            "integer",
            format!("{} must be a whole number or left empty", field),
        )
    })
}

/// Empty text inputs are sent to the backend as `null`.
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flag {
        #[serde(default, deserialize_with = "deserialize_bool_flexible")]
        on: bool,
    }

    #[test]
    fn flexible_bool_from_form_and_json() {
        let f: Flag = serde_json::from_str(r#"{"on":"on"}"#).unwrap();
        assert!(f.on);
        let f: Flag = serde_json::from_str(r#"{"on":true}"#).unwrap();
        assert!(f.on);
        let f: Flag = serde_json::from_str(r#"{"on":0}"#).unwrap();
        assert!(!f.on);
        let f: Flag = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!f.on);
        assert!(serde_json::from_str::<Flag>(r#"{"on":"maybe"}"#).is_err());
    }

    #[test]
    fn integers_are_coerced_from_strings() {
        assert_eq!(parse_integer("order", " 3 ").unwrap(), 3);
        assert!(parse_integer("order", "").is_err());
        let err = parse_integer("order", "third").unwrap_err();
        assert!(err.field_errors().contains_key("order"));
    }

    #[test]
    fn optional_ids() {
        assert_eq!(parse_optional_id("instructor_id", "").unwrap(), None);
        assert_eq!(parse_optional_id("instructor_id", "12").unwrap(), Some(12));
        assert!(parse_optional_id("instructor_id", "x").is_err());
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" intro ").as_deref(), Some("intro"));
    }
}
