//! Task kinds and their prompt templates.
//!
//! The registry is static data defined once at startup and never mutated:
//! each `TaskKind` maps to a `Template` holding the format string, the
//! placeholder names it requires, and the subset of fields that carry
//! user-typed text (and therefore pass through the sanitizer).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prompting::compose::ComposeError;
use crate::prompting::prompts;

/// The supported generation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    CreativeWriting,
    Poetry,
    Summarization,
    Chat,
    CodeCompletion,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::CreativeWriting,
        TaskKind::Poetry,
        TaskKind::Summarization,
        TaskKind::Chat,
        TaskKind::CodeCompletion,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::CreativeWriting => "creative-writing",
            TaskKind::Poetry => "poetry",
            TaskKind::Summarization => "summarization",
            TaskKind::Chat => "chat",
            TaskKind::CodeCompletion => "code-completion",
        }
    }

    /// Human-facing label for UI widgets.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::CreativeWriting => "Creative Writing",
            TaskKind::Poetry => "Poetry",
            TaskKind::Summarization => "Summarization",
            TaskKind::Chat => "Chat",
            TaskKind::CodeCompletion => "Code Completion",
        }
    }

    pub fn template(&self) -> &'static Template {
        match self {
            TaskKind::CreativeWriting => &CREATIVE_WRITING,
            TaskKind::Poetry => &POETRY,
            TaskKind::Summarization => &SUMMARIZATION,
            TaskKind::Chat => &CHAT,
            TaskKind::CodeCompletion => &CODE_COMPLETION,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creative-writing" => Ok(TaskKind::CreativeWriting),
            "poetry" => Ok(TaskKind::Poetry),
            "summarization" => Ok(TaskKind::Summarization),
            "chat" => Ok(TaskKind::Chat),
            "code-completion" => Ok(TaskKind::CodeCompletion),
            other => Err(ComposeError::UnknownTaskKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A prompt template plus the fields it needs.
///
/// `free_text` must be a subset of `required`: these are the user-typed
/// fields that the generate handler runs through `sanitize` before
/// composition. Choice and numeric fields are host-constrained and bypass it.
pub struct Template {
    pub text: &'static str,
    pub required: &'static [&'static str],
    pub free_text: &'static [&'static str],
}

static CREATIVE_WRITING: Template = Template {
    text: prompts::CREATIVE_WRITING_TEMPLATE,
    required: &["style", "prompt"],
    free_text: &["prompt"],
};

static POETRY: Template = Template {
    text: prompts::POETRY_TEMPLATE,
    required: &["form", "theme", "lines", "tone"],
    free_text: &[],
};

static SUMMARIZATION: Template = Template {
    text: prompts::SUMMARIZATION_TEMPLATE,
    required: &["length", "focus_areas", "text"],
    free_text: &["text"],
};

static CHAT: Template = Template {
    text: prompts::CHAT_TEMPLATE,
    required: &["persona", "history", "message"],
    // `history` is assembled server-side with each turn sanitized
    // individually, so only the widget-sourced fields are listed here.
    free_text: &["persona", "message"],
};

static CODE_COMPLETION: Template = Template {
    text: prompts::CODE_COMPLETION_TEMPLATE,
    required: &["language", "instruction", "snippet"],
    free_text: &["instruction", "snippet"],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompting::compose::placeholders;

    #[test]
    fn test_every_kind_parses_its_own_wire_name() {
        for kind in TaskKind::ALL {
            let parsed: TaskKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_wire_name_is_rejected() {
        let err = "not-a-real-kind".parse::<TaskKind>().unwrap_err();
        match err {
            ComposeError::UnknownTaskKind { kind } => assert_eq!(kind, "not-a-real-kind"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for kind in TaskKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    /// Registry consistency: every placeholder in a template body must be
    /// declared required, and vice versa.
    #[test]
    fn test_template_placeholders_match_required_fields() {
        for kind in TaskKind::ALL {
            let template = kind.template();
            let mut found = placeholders(template.text);
            found.sort_unstable();
            found.dedup();

            let mut required: Vec<&str> = template.required.to_vec();
            required.sort_unstable();

            assert_eq!(
                found, required,
                "template for '{kind}' declares fields that do not match its placeholders"
            );
        }
    }

    #[test]
    fn test_free_text_fields_are_subset_of_required() {
        for kind in TaskKind::ALL {
            let template = kind.template();
            for field in template.free_text {
                assert!(
                    template.required.contains(field),
                    "free-text field '{field}' of '{kind}' is not in the required list"
                );
            }
        }
    }

    #[test]
    fn test_templates_have_two_to_five_placeholders() {
        for kind in TaskKind::ALL {
            let n = kind.template().required.len();
            assert!((2..=5).contains(&n), "'{kind}' has {n} placeholders");
        }
    }
}
