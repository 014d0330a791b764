// Message enhancement: builds the prompt contract for rewriting a
// constituent's message and validates what comes back.
// All LLM calls go through llm_client.

pub mod enhancer;
pub mod handlers;
pub mod prompts;
