//! Shape checks shared by the entity validators.
//!
//! Absent keys and wrong types are different failures: `{"title": null}` has
//! the property (wrong type), `{}` does not.

use serde_json::Value;

/// Raw request payload: string keys to primitive JSON values.
pub type Payload = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Missing(&'static str),
    WrongType(&'static str),
    Blank(&'static str),
}

/// Presence of every field is checked before any type, so a payload that is
/// both incomplete and mistyped reports the missing property.
pub fn check_shape(payload: &Payload, fields: &[(&'static str, FieldKind)]) -> Result<(), FieldError> {
    if let Some((name, _)) = fields.iter().find(|(name, _)| !payload.contains_key(*name)) {
        return Err(FieldError::Missing(*name));
    }

    let wrong = fields.iter().find(|(name, kind)| {
        let value = &payload[*name];
        match kind {
            FieldKind::Str => !value.is_string(),
            FieldKind::Bool => !value.is_boolean(),
        }
    });
    match wrong {
        Some((name, _)) => Err(FieldError::WrongType(*name)),
        None => Ok(()),
    }
}

pub fn reject_blank(payload: &Payload, fields: &[&'static str]) -> Result<(), FieldError> {
    match fields.iter().find(|name| text(payload, name).trim().is_empty()) {
        Some(name) => Err(FieldError::Blank(*name)),
        None => Ok(()),
    }
}

/// String value of an already shape-checked field.
pub fn text(payload: &Payload, name: &str) -> String {
    payload
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

pub fn flag(payload: &Payload, name: &str) -> bool {
    payload.get(name).and_then(Value::as_bool).unwrap_or_default()
}
