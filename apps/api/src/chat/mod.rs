// Session-scoped chat: in-memory transcripts rendered into the chat prompt
// template. Sessions are owned by the app state, not the prompting core.

pub mod handlers;
pub mod store;
