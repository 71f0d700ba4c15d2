//! Task-specific formatting of generated text before it is returned to the
//! UI host.

use serde::Serialize;

use crate::prompting::templates::TaskKind;

/// How the UI host should render the returned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Markdown,
    Plain,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormattedOutput {
    pub text: String,
    pub render: RenderMode,
}

/// Creative text renders as plain prose; everything else is markdown.
pub fn render_mode(kind: TaskKind) -> RenderMode {
    match kind {
        TaskKind::CreativeWriting | TaskKind::Poetry => RenderMode::Plain,
        TaskKind::Summarization | TaskKind::Chat | TaskKind::CodeCompletion => {
            RenderMode::Markdown
        }
    }
}

/// Applies task-specific post-processing to raw model output.
///
/// Poetry gets markdown hard line breaks (two trailing spaces before each
/// newline) so verse lines survive rendering.
pub fn format_output(kind: TaskKind, raw: &str) -> FormattedOutput {
    let text = match kind {
        TaskKind::Poetry => raw.replace('\n', "  \n"),
        _ => raw.to_string(),
    };
    FormattedOutput {
        text,
        render: render_mode(kind),
    }
}
