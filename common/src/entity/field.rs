//! # Field Values
//!
//! AFAS fields are loosely typed on the wire. [`FieldValue`] keeps the few
//! shapes a connector payload carries and answers the question every
//! validation rule asks: "is this field actually given?".

use std::fmt;

use serde_json::Value;

use crate::error::EntityError;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Decimal(f64),
    Text(String),
}

impl FieldValue {
    /// Whether the value counts as filled in.
    ///
    /// Empty text and the text `"0"` count as not given, as do zero and `false`.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Int(i) => *i != 0,
            FieldValue::Decimal(d) => *d != 0.0,
            FieldValue::Text(s) => !s.is_empty() && s != "0",
        }
    }

    /// Integer reading of the value, accepting numeric text.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            FieldValue::Bool(b) => Some(i64::from(*b)),
            FieldValue::Decimal(d) => integral(*d),
            FieldValue::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            FieldValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Converts a JSON scalar, rejecting objects and arrays.
    pub fn from_json(field: &str, value: &Value) -> Result<Self, EntityError> {
        match value {
            Value::Null => Ok(FieldValue::Null),
            Value::Bool(b) => Ok(FieldValue::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(FieldValue::Int(i)),
                None => n.as_f64().map(FieldValue::Decimal).ok_or_else(|| {
                    EntityError::InvalidFieldValue {
                        field: field.to_string(),
                        reason: format!("number {n} out of range"),
                    }
                }),
            },
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(EntityError::InvalidFieldValue {
                field: field.to_string(),
                reason: String::from("expected a scalar"),
            }),
        }
    }
}

fn integral(d: f64) -> Option<i64> {
    (d.is_finite() && d.fract() == 0.0).then_some(d as i64)
}

/// Checks that `name` can be written as an XML element name.
///
/// Letters, digits, `_`, `-` and `.`; the first character must be a letter or `_`.
pub fn check_name(name: &str) -> Result<(), EntityError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(EntityError::InvalidFieldValue {
            field: name.to_string(),
            reason: String::from("not a valid field name"),
        })
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Decimal(d) => write!(f, "{d}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn truthiness_follows_connector_rules() {
        assert!(!FieldValue::Null.is_truthy());
        assert!(!FieldValue::from("").is_truthy());
        assert!(!FieldValue::from("0").is_truthy());
        assert!(!FieldValue::from(0).is_truthy());
        assert!(!FieldValue::from(false).is_truthy());
        assert!(FieldValue::from("00012").is_truthy());
        assert!(FieldValue::from(12).is_truthy());
        assert!(FieldValue::from(true).is_truthy());
    }

    #[test]
    fn numeric_text_reads_as_int() {
        assert_eq!(FieldValue::from("9").as_int(), Some(9));
        assert_eq!(FieldValue::from(" 3 ").as_int(), Some(3));
        assert_eq!(FieldValue::from("nine").as_int(), None);
        assert_eq!(FieldValue::from("1.0").as_int(), Some(1));
        assert_eq!(FieldValue::from("1.5").as_int(), None);
        assert_eq!(FieldValue::from("NaN").as_int(), None);
        assert_eq!(FieldValue::Decimal(1.5).as_int(), None);
    }

    #[test]
    fn field_names_must_be_xml_names() {
        for name in ["Nm", "HmNr", "U1234_Code", "_x", "a.b-c"] {
            assert_eq!(check_name(name), Ok(()), "{name}");
        }
        for name in ["", "two words", "1st", "x></Fields><Evil a=\"1\"", "xsi:nil"] {
            assert_eq!(
                check_name(name),
                Err(EntityError::InvalidFieldValue {
                    field: name.to_string(),
                    reason: "not a valid field name".to_string(),
                }),
                "{name}"
            );
        }
    }

    #[test]
    fn json_objects_are_rejected() {
        let err = FieldValue::from_json("Nm", &json!({"a": 1})).unwrap_err();
        assert_eq!(
            err,
            EntityError::InvalidFieldValue {
                field: "Nm".to_string(),
                reason: "expected a scalar".to_string(),
            }
        );
        assert_eq!(FieldValue::from_json("Nm", &json!(2.5)), Ok(FieldValue::Decimal(2.5)));
    }
}
