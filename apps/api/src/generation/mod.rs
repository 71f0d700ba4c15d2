// One-shot generation pipeline: sanitize → compose → model call → format.
// All model calls go through llm_client; no direct Inference API calls here.

pub mod handlers;
