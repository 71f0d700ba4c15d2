#![allow(dead_code)]

//! Prompt composition: task kind + named field values → final prompt string.
//!
//! Pure functions only. Lookup is validated up front: a missing field is a
//! typed error naming the absent placeholder, never a half-rendered prompt.
//! Substitution is a single left-to-right scan, so placeholder-like text
//! inside a user value is never re-substituted.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompting::templates::TaskKind;

/// A value supplied for a template placeholder. Numbers render in base-10
/// decimal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// Composition requested for a task kind with no registered template.
    #[error("unknown task kind '{kind}'")]
    UnknownTaskKind { kind: String },

    /// A required placeholder has no supplied value.
    #[error("missing required field '{field}' for task '{kind}'")]
    MissingField { kind: TaskKind, field: String },
}

/// Composes the prompt for a task kind given by its wire name.
///
/// Fails with `UnknownTaskKind` when the name is not registered and with
/// `MissingField` when a required placeholder has no supplied value.
pub fn compose(
    kind: &str,
    fields: &HashMap<String, FieldValue>,
) -> Result<String, ComposeError> {
    compose_task(kind.parse()?, fields)
}

/// Typed form of [`compose`], for callers that already hold a `TaskKind`.
pub fn compose_task(
    kind: TaskKind,
    fields: &HashMap<String, FieldValue>,
) -> Result<String, ComposeError> {
    let template = kind.template();

    // Validate completeness first so the error names the first absent field
    // in declaration order. Extra supplied fields are ignored.
    for field in template.required {
        if !fields.contains_key(*field) {
            return Err(ComposeError::MissingField {
                kind,
                field: (*field).to_string(),
            });
        }
    }

    render(kind, template.text, fields)
}

fn render(
    kind: TaskKind,
    template: &str,
    fields: &HashMap<String, FieldValue>,
) -> Result<String, ComposeError> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match fields.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        return Err(ComposeError::MissingField {
                            kind,
                            field: name.to_string(),
                        });
                    }
                }
                rest = &after[close + 1..];
            }
            // A lone '{' with no closing brace is literal text. Registry
            // templates never contain one; this keeps render total.
            None => {
                out.push_str(&rest[open..]);
                return Ok(out);
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Lists the placeholder names appearing in a template body, in order.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                names.push(&after[..close]);
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poetry_fields() -> HashMap<String, FieldValue> {
        let mut fields = HashMap::new();
        fields.insert("form".to_string(), "Haiku".into());
        fields.insert("theme".to_string(), "Time".into());
        fields.insert("lines".to_string(), FieldValue::Int(3));
        fields.insert("tone".to_string(), "Reflective".into());
        fields
    }

    #[test]
    fn test_poetry_composes_with_each_value_exactly_once() {
        let prompt = compose("poetry", &poetry_fields()).unwrap();
        for needle in ["Haiku", "Time", "3", "Reflective"] {
            assert_eq!(
                prompt.matches(needle).count(),
                1,
                "'{needle}' should appear exactly once in: {prompt}"
            );
        }
    }

    #[test]
    fn test_integer_fields_render_in_decimal() {
        let mut fields = poetry_fields();
        fields.insert("lines".to_string(), FieldValue::Int(12));
        let prompt = compose("poetry", &fields).unwrap();
        assert!(prompt.contains("Include at least 12 lines."));
    }

    #[test]
    fn test_every_kind_composes_with_exactly_its_required_fields() {
        for kind in TaskKind::ALL {
            let fields: HashMap<String, FieldValue> = kind
                .template()
                .required
                .iter()
                .map(|f| (f.to_string(), FieldValue::Str(format!("v-{f}"))))
                .collect();
            let prompt = compose_task(kind, &fields)
                .unwrap_or_else(|e| panic!("'{kind}' failed with full fields: {e}"));
            for field in kind.template().required {
                assert!(
                    prompt.contains(&format!("v-{field}")),
                    "'{kind}' prompt is missing the value for '{field}'"
                );
            }
        }
    }

    #[test]
    fn test_omitting_any_single_field_fails_naming_it() {
        for kind in TaskKind::ALL {
            for omitted in kind.template().required {
                let fields: HashMap<String, FieldValue> = kind
                    .template()
                    .required
                    .iter()
                    .filter(|f| *f != omitted)
                    .map(|f| (f.to_string(), FieldValue::Str("x".to_string())))
                    .collect();
                match compose_task(kind, &fields) {
                    Err(ComposeError::MissingField { field, .. }) => {
                        assert_eq!(field, *omitted, "wrong field named for '{kind}'");
                    }
                    other => panic!("'{kind}' without '{omitted}' returned {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = compose("not-a-real-kind", &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            ComposeError::UnknownTaskKind {
                kind: "not-a-real-kind".to_string()
            }
        );
    }

    #[test]
    fn test_placeholder_like_text_in_values_is_not_resubstituted() {
        let mut fields = poetry_fields();
        fields.insert("theme".to_string(), "{tone}".into());
        let prompt = compose("poetry", &fields).unwrap();
        assert!(prompt.contains("the theme of {tone}."));
        // The real tone placeholder still resolved normally.
        assert!(prompt.contains("Reflective tone"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut fields = poetry_fields();
        fields.insert("unrelated".to_string(), "junk".into());
        let prompt = compose("poetry", &fields).unwrap();
        assert!(!prompt.contains("junk"));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Str("abc".to_string()).to_string(), "abc");
        assert_eq!(FieldValue::Int(-7).to_string(), "-7");
        assert_eq!(FieldValue::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_field_value_accepts_json_strings_and_numbers() {
        let v: FieldValue = serde_json::from_str("\"Haiku\"").unwrap();
        assert_eq!(v, FieldValue::Str("Haiku".to_string()));
        let v: FieldValue = serde_json::from_str("3").unwrap();
        assert_eq!(v, FieldValue::Int(3));
        let v: FieldValue = serde_json::from_str("1.25").unwrap();
        assert_eq!(v, FieldValue::Float(1.25));
    }

    #[test]
    fn test_placeholders_listing() {
        assert_eq!(placeholders("a {x} b {y}"), vec!["x", "y"]);
        assert_eq!(placeholders("no placeholders"), Vec::<&str>::new());
    }
}
