// LLM prompt templates for the enhance module.

/// Topic used when the constituent does not supply one.
pub const DEFAULT_TOPIC: &str = "Constituent concern";

/// Letter-body rewrite prompt.
/// Replace: {rep_name}, {rep_role}, {district_clause}, {topic}, {raw_message}
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"You are drafting a formal Canadian business letter to an elected representative.

Recipient: {rep_name}, {rep_role}{district_clause}.
Topic: {topic}.

Input message from constituent:
"{raw_message}"

Task:
- Keep the constituent's core points and requested action.
- Use clear, respectful language suited to an MP / MPP.
- Avoid partisan attacks or insults.
- Write in first person ("I").
- 3–6 short paragraphs.
- Return ONLY the letter body text (no addresses, date, greeting, or closing)."#;
