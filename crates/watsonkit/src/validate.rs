//! Required-parameter validation.
//!
//! Every operation checks its required fields before a descriptor is built. Typed
//! parameter structs go through [`require!`], which names the fields at compile time;
//! loosely shaped JSON input goes through [`missing_in`].

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::request::FilePart;

/// Whether a parameter value counts as "provided".
///
/// Empty strings and empty collections count as absent, the same as `None`. This is
/// stricter than [`missing_in`] for lists: a typed `Vec` must be non-empty, while an
/// empty JSON array passes the JSON check.
pub trait Presence {
    /// Returns `true` if the value was supplied.
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// An empty list is missing. Required lists are uploads or texts, where `[]` sends nothing.
impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Presence for HashMap<K, V> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for Value {
    fn is_present(&self) -> bool {
        !matches!(self, Value::Null) && self.as_str() != Some("")
    }
}

impl Presence for FilePart {
    fn is_present(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Check a list of `(name, present)` pairs.
///
/// Returns [`Error::MissingParams`] naming every absent field, in declaration order.
pub fn missing_params(fields: &[(&str, bool)]) -> Result<()> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| (*name).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingParams(missing))
    }
}

/// Take a required optional value, or report `name` as missing.
pub(crate) fn required<T: Presence>(name: &str, value: Option<T>) -> Result<T> {
    match value {
        Some(value) if value.is_present() => Ok(value),
        _ => Err(Error::MissingParams(vec![name.to_string()])),
    }
}

/// Check required fields on a loosely typed JSON parameter object.
///
/// `None`, `null` and non-object values are treated as `{}`. A field is missing when it is
/// absent, `null`, `false`, `0` or an empty string.
///
/// ```
/// use serde_json::json;
/// use watsonkit::validate::missing_in;
///
/// assert!(missing_in(Some(&json!({"a": "a", "b": "b"})), &["b"]).is_ok());
///
/// let err = missing_in(None, &["a", "b"]).unwrap_err();
/// assert_eq!(err.to_string(), "Missing required parameters: a, b");
/// ```
pub fn missing_in(params: Option<&Value>, required: &[&str]) -> Result<()> {
    let object = params.and_then(Value::as_object);
    let fields: Vec<(&str, bool)> = required
        .iter()
        .map(|name| {
            let present = object
                .and_then(|map| map.get(*name))
                .is_some_and(is_truthy);
            (*name, present)
        })
        .collect();
    missing_params(&fields)
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validate required fields of a parameter struct by field name.
///
/// ```ignore
/// require!(params; classifier_id, text)?;
/// ```
macro_rules! require {
    ($params:expr; $($field:ident),+ $(,)?) => {
        $crate::validate::missing_params(&[
            $((
                stringify!($field),
                $crate::validate::Presence::is_present(&$params.$field),
            )),+
        ])
    };
}

pub(crate) use require;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct Params {
        feedback_id: String,
        model_id: Option<String>,
    }

    #[test]
    fn empty_required_list_passes() {
        assert!(missing_in(None, &[]).is_ok());
        assert!(missing_in(Some(&Value::Null), &[]).is_ok());
        assert!(missing_in(Some(&json!({"a": "a"})), &[]).is_ok());
    }

    #[test]
    fn null_params_report_every_field() {
        let err = missing_in(Some(&Value::Null), &["a", "b"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: a, b");
    }

    #[test]
    fn only_missing_fields_are_reported() {
        let err = missing_in(Some(&json!({"a": "a"})), &["a", "b"]).unwrap_err();
        match err {
            Error::MissingParams(names) => assert_eq!(names, vec!["b"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let params = json!({"a": "", "b": 0, "c": false, "d": null, "e": [], "f": 1});
        let err = missing_in(Some(&params), &["a", "b", "c", "d", "e", "f"]).unwrap_err();
        match err {
            Error::MissingParams(names) => assert_eq!(names, vec!["a", "b", "c", "d"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_list_differs_between_typed_and_json_checks() {
        let texts: Vec<String> = Vec::new();
        assert!(!texts.is_present());
        assert!(vec!["hola".to_string()].is_present());
        assert!(missing_in(Some(&json!({"text": []})), &["text"]).is_ok());
    }

    #[test]
    fn required_returns_the_value() {
        assert_eq!(required("text", Some("hi".to_string())).unwrap(), "hi");

        let err = required("text", Some(String::new())).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: text");
        assert!(required::<String>("text", None).is_err());
    }

    #[test]
    fn require_macro_uses_field_names() {
        let params = Params::default();
        let err = require!(params; feedback_id, model_id).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required parameters: feedback_id, model_id"
        );

        let params = Params {
            feedback_id: "fb".into(),
            model_id: Some("contracts".into()),
        };
        assert!(require!(params; feedback_id, model_id).is_ok());
    }

    #[test]
    fn empty_option_string_is_absent() {
        assert!(!Some(String::new()).is_present());
        assert!(Some("x".to_string()).is_present());
        assert!(!Option::<String>::None.is_present());
    }
}
