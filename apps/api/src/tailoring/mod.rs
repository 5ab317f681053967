// Resume tailoring: file decoding, the structured resume model, and the
// LLM round-trips for tailoring and application questions.
// All LLM calls go through llm_client; nothing here talks to Anthropic directly.

pub mod documents;
pub mod handlers;
pub mod prompts;
pub mod resume;
pub mod tailor;
