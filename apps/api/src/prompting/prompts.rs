// Prompt templates for every supported writing task.
// Templates are data: each one is a fixed multi-line string with named
// `{placeholder}` slots, paired with its required-field list in `templates.rs`.

/// Creative-writing prompt template.
/// Replace `{style}` and `{prompt}` before sending.
pub const CREATIVE_WRITING_TEMPLATE: &str =
    "You are an award-winning author. Generate vivid, imaginative text in the style of {style}. \
    Focus on sensory details and emotional resonance. Respond only with the text, no explanations.\n\n\
    Prompt: {prompt}";

/// Poetry prompt template.
/// Replace `{form}`, `{theme}`, `{lines}` and `{tone}` before sending.
pub const POETRY_TEMPLATE: &str =
    "You are a poet laureate. Create a {form} poem that explores the theme of {theme}. \
    Use vivid imagery and rhythmic language. Include at least {lines} lines.\n\n\
    Additional instructions: {tone} tone";

/// Summarization prompt template.
/// Replace `{length}`, `{focus_areas}` and `{text}` before sending.
pub const SUMMARIZATION_TEMPLATE: &str =
    "You are a research assistant. Summarize this text while preserving key information \
    and technical terms. Target length: {length} words. Focus on: {focus_areas}.\n\n\
    Text: {text}";

/// Chat prompt template. `{history}` is assembled by the session store, not
/// collected from a widget.
/// Replace `{persona}`, `{history}` and `{message}` before sending.
pub const CHAT_TEMPLATE: &str =
    "You are {persona}. Continue the conversation naturally, staying consistent \
    with what has been said so far. Keep replies concise and conversational.\n\n\
    Conversation so far:\n{history}\n\nUser: {message}\nAssistant:";

/// Code-completion prompt template.
/// Replace `{language}`, `{instruction}` and `{snippet}` before sending.
pub const CODE_COMPLETION_TEMPLATE: &str =
    "You are an expert {language} developer. Complete the code below according to \
    the instruction. Respond only with the completed code, no explanations.\n\n\
    Instruction: {instruction}\n\nCode:\n{snippet}";
