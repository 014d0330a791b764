// Shared prompt constants for LLM calls.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt for calls that expect plain prose back.
pub const PLAIN_PROSE_SYSTEM: &str = "You are a careful writing assistant. \
    Respond with plain prose only. \
    Do NOT use markdown, headings, or bullet lists. \
    Do NOT add commentary before or after the requested text.";
