#![allow(dead_code)]

//! Widget-facing task descriptors for the UI host.
//!
//! The studio front-end renders its selection lists, text areas and sliders
//! from this catalog rather than hardcoding them. The option lists are also
//! the source of truth for handler-side bounds checks on numeric fields.

use serde::Serialize;

use crate::prompting::templates::TaskKind;

pub const CREATIVE_STYLES: &[&str] = &[
    "Magical Realism",
    "Cyberpunk",
    "Historical Fiction",
    "Mystery",
];

pub const CREATIVE_EXAMPLES: &[&str] = &[
    "A library where books rewrite themselves",
    "A heist on a floating city",
];

pub const POETRY_FORMS: &[&str] = &["Sonnet", "Haiku", "Free Verse", "Limerick"];

pub const POETRY_THEMES: &[&str] = &["Love", "Technology", "Nature", "Time"];

pub const POETRY_TONES: &[&str] = &["Melancholic", "Joyful", "Reflective", "Satirical"];

pub const POETRY_LINES_MIN: i64 = 3;
pub const POETRY_LINES_MAX: i64 = 20;
pub const POETRY_LINES_DEFAULT: i64 = 12;

pub const SUMMARY_FOCUS_AREAS: &[&str] = &[
    "Technical Details",
    "Key Arguments",
    "Main Conclusions",
    "Methodology",
];

pub const SUMMARY_LENGTH_MIN: i64 = 50;
pub const SUMMARY_LENGTH_MAX: i64 = 1000;
pub const SUMMARY_LENGTH_DEFAULT: i64 = 100;

pub const CHAT_PERSONAS: &[&str] = &[
    "a friendly, knowledgeable writing assistant",
    "a meticulous line editor",
    "a playful storyteller",
];

pub const CODE_LANGUAGES: &[&str] = &["Python", "Rust", "JavaScript", "Go", "SQL"];

/// What kind of widget collects a field, plus its constraints.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldSpec {
    Select {
        options: &'static [&'static str],
    },
    /// Host may pick several options and joins them with `join`.
    MultiSelect {
        options: &'static [&'static str],
        join: &'static str,
    },
    Text {
        multiline: bool,
    },
    Number {
        min: i64,
        max: i64,
        default: i64,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    #[serde(flatten)]
    pub spec: FieldSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskDescriptor {
    pub kind: TaskKind,
    pub label: &'static str,
    pub required: &'static [&'static str],
    pub fields: Vec<FieldDescriptor>,
    pub examples: &'static [&'static str],
}

fn field(name: &'static str, spec: FieldSpec) -> FieldDescriptor {
    FieldDescriptor { name, spec }
}

pub fn task_descriptor(kind: TaskKind) -> TaskDescriptor {
    let fields = match kind {
        TaskKind::CreativeWriting => vec![
            field("style", FieldSpec::Select { options: CREATIVE_STYLES }),
            field("prompt", FieldSpec::Text { multiline: true }),
        ],
        TaskKind::Poetry => vec![
            field("form", FieldSpec::Select { options: POETRY_FORMS }),
            field("theme", FieldSpec::Select { options: POETRY_THEMES }),
            field(
                "lines",
                FieldSpec::Number {
                    min: POETRY_LINES_MIN,
                    max: POETRY_LINES_MAX,
                    default: POETRY_LINES_DEFAULT,
                },
            ),
            field("tone", FieldSpec::Select { options: POETRY_TONES }),
        ],
        TaskKind::Summarization => vec![
            field("text", FieldSpec::Text { multiline: true }),
            field(
                "length",
                FieldSpec::Number {
                    min: SUMMARY_LENGTH_MIN,
                    max: SUMMARY_LENGTH_MAX,
                    default: SUMMARY_LENGTH_DEFAULT,
                },
            ),
            field(
                "focus_areas",
                FieldSpec::MultiSelect {
                    options: SUMMARY_FOCUS_AREAS,
                    join: ", ",
                },
            ),
        ],
        // `history` is filled by the session store, so it has no widget.
        TaskKind::Chat => vec![
            field("persona", FieldSpec::Select { options: CHAT_PERSONAS }),
            field("message", FieldSpec::Text { multiline: false }),
        ],
        TaskKind::CodeCompletion => vec![
            field("language", FieldSpec::Select { options: CODE_LANGUAGES }),
            field("instruction", FieldSpec::Text { multiline: false }),
            field("snippet", FieldSpec::Text { multiline: true }),
        ],
    };

    TaskDescriptor {
        kind,
        label: kind.label(),
        required: kind.template().required,
        fields,
        examples: match kind {
            TaskKind::CreativeWriting => CREATIVE_EXAMPLES,
            _ => &[],
        },
    }
}

pub fn catalog() -> Vec<TaskDescriptor> {
    TaskKind::ALL.into_iter().map(task_descriptor).collect()
}

/// Numeric fields with their inclusive bounds, for request validation.
pub fn number_fields(kind: TaskKind) -> &'static [(&'static str, i64, i64)] {
    match kind {
        TaskKind::Poetry => &[("lines", POETRY_LINES_MIN, POETRY_LINES_MAX)],
        TaskKind::Summarization => &[("length", SUMMARY_LENGTH_MIN, SUMMARY_LENGTH_MAX)],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_descriptor() {
        let descriptors = catalog();
        assert_eq!(descriptors.len(), TaskKind::ALL.len());
        for kind in TaskKind::ALL {
            assert!(descriptors.iter().any(|d| d.kind == kind));
        }
    }

    #[test]
    fn test_descriptor_fields_are_all_required_placeholders() {
        for descriptor in catalog() {
            for f in &descriptor.fields {
                assert!(
                    descriptor.required.contains(&f.name),
                    "catalog field '{}' of '{}' is not a template placeholder",
                    f.name,
                    descriptor.kind
                );
            }
        }
    }

    #[test]
    fn test_number_bounds_match_descriptor_specs() {
        for kind in TaskKind::ALL {
            let descriptor = task_descriptor(kind);
            for (name, min, max) in number_fields(kind) {
                let spec = descriptor
                    .fields
                    .iter()
                    .find(|f| f.name == *name)
                    .unwrap_or_else(|| panic!("no descriptor field '{name}' for '{kind}'"));
                match spec.spec {
                    FieldSpec::Number {
                        min: spec_min,
                        max: spec_max,
                        default,
                    } => {
                        assert_eq!((spec_min, spec_max), (*min, *max));
                        assert!((spec_min..=spec_max).contains(&default));
                    }
                    ref other => panic!("'{name}' is not a Number spec: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_descriptor_serializes_with_tagged_specs() {
        let json = serde_json::to_value(task_descriptor(TaskKind::Poetry)).unwrap();
        assert_eq!(json["kind"], "poetry");
        assert_eq!(json["fields"][2]["type"], "number");
        assert_eq!(json["fields"][2]["min"], 3);
        assert_eq!(json["fields"][2]["max"], 20);
    }
}
