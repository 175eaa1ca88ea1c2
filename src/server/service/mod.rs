//! Service layer for business logic.
//!
//! Services validate payloads, resolve related records by name, enforce uniqueness and
//! assemble the hyperlinked DTOs returned by controllers. Authentication and permission
//! rules live under [`auth`].

pub mod auth;
pub mod drone;
pub mod pilot;
pub mod user;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::server::{error::validation::FieldErrors, util::time::parse_datetime};

static DATETIME_FORMAT_MESSAGE: &str =
    "Datetime has wrong format. Use one of these formats instead: YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z].";

/// Parses an optional datetime payload field, recording a field error when malformed.
pub(crate) fn parse_payload_datetime(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
) -> Option<DateTime<Utc>> {
    let value = value.as_deref()?;

    match parse_datetime(value) {
        Some(datetime) => Some(datetime),
        None => {
            errors.add(field, DATETIME_FORMAT_MESSAGE);
            None
        }
    }
}

/// Parses an optional integer payload field.
///
/// Numeric strings and integral floats are accepted as well as JSON integers.
pub(crate) fn parse_payload_integer(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<Value>,
) -> Option<i32> {
    let value = value.as_ref()?;

    let number = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(text) => parse_integer_text(text.trim()),
        _ => None,
    };

    match number.and_then(|number| i32::try_from(number).ok()) {
        Some(number) => Some(number),
        None => {
            errors.add(field, "A valid integer is required.");
            None
        }
    }
}

fn parse_integer_text(text: &str) -> Option<i64> {
    let integral = match text.split_once('.') {
        Some((integral, fraction)) if fraction.chars().all(|c| c == '0') => integral,
        Some(_) => return None,
        None => text,
    };

    integral.parse().ok()
}

/// Parses an optional boolean payload field, accepting the usual textual spellings.
pub(crate) fn parse_payload_bool(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<Value>,
) -> Option<bool> {
    let value = value.as_ref()?;

    let parsed = match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(text) => match text.to_ascii_lowercase().as_str() {
            "t" | "y" | "yes" | "true" | "on" | "1" => Some(true),
            "f" | "n" | "no" | "false" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };

    if parsed.is_none() {
        errors.add(field, "Must be a valid boolean.");
    }

    parsed
}

/// Message for a slug reference that matches no record.
pub(crate) fn missing_object(name: &str) -> String {
    format!("Object with name={} does not exist.", name)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{parse_payload_bool, parse_payload_integer};
    use crate::server::error::validation::FieldErrors;

    #[test]
    fn accepts_integer_spellings() {
        let mut errors = FieldErrors::new();

        assert_eq!(parse_payload_integer(&mut errors, "races_count", &Some(json!(7))), Some(7));
        assert_eq!(parse_payload_integer(&mut errors, "races_count", &Some(json!("12"))), Some(12));
        assert_eq!(parse_payload_integer(&mut errors, "races_count", &Some(json!(3.0))), Some(3));
        assert_eq!(parse_payload_integer(&mut errors, "races_count", &None), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn rejects_non_integers() {
        let mut errors = FieldErrors::new();

        assert_eq!(parse_payload_integer(&mut errors, "races_count", &Some(json!("abc"))), None);
        assert_eq!(parse_payload_integer(&mut errors, "races_count", &Some(json!(2.5))), None);
        assert_eq!(
            parse_payload_integer(&mut errors, "races_count", &Some(json!(4_294_967_296u64))),
            None
        );

        assert_eq!(errors.get("races_count").unwrap().len(), 3);
        assert_eq!(errors.get("races_count").unwrap()[0], "A valid integer is required.");
    }

    #[test]
    fn parses_boolean_spellings() {
        let mut errors = FieldErrors::new();

        assert_eq!(parse_payload_bool(&mut errors, "has_it_competed", &Some(json!(true))), Some(true));
        assert_eq!(parse_payload_bool(&mut errors, "has_it_competed", &Some(json!("no"))), Some(false));
        assert_eq!(parse_payload_bool(&mut errors, "has_it_competed", &Some(json!(1))), Some(true));
        assert!(errors.is_empty());

        assert_eq!(parse_payload_bool(&mut errors, "has_it_competed", &Some(json!("maybe"))), None);
        assert_eq!(
            errors.get("has_it_competed").unwrap(),
            &["Must be a valid boolean.".to_string()]
        );
    }
}
