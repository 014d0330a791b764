//! Enhancement — rewrites a constituent's raw message into formal letter-body prose.
//!
//! The module owns only the prompt contract and the response check; the
//! completion itself is one call through a `TextGenerator`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::enhance::prompts::{DEFAULT_TOPIC, ENHANCE_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::non_blank;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceRequest {
    pub raw_message: Option<String>,
    pub rep_name: Option<String>,
    pub rep_role: Option<String>,
    pub district_name: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_body: String,
}

/// Builds the rewrite prompt. The district qualifier is omitted when the
/// district is unknown, and a blank topic becomes `DEFAULT_TOPIC`.
pub fn build_prompt(
    raw_message: &str,
    rep_name: &str,
    rep_role: &str,
    district_name: Option<&str>,
    topic: Option<&str>,
) -> String {
    let district_clause = district_name
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!(" for {d}"))
        .unwrap_or_default();
    let topic = topic
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TOPIC);

    fill_template(
        ENHANCE_PROMPT_TEMPLATE,
        &[
            ("{rep_name}", rep_name),
            ("{rep_role}", rep_role),
            ("{district_clause}", &district_clause),
            ("{topic}", topic),
            ("{raw_message}", raw_message),
        ],
    )
}

/// Substitutes placeholders in one pass over the template. Inserted values
/// are never rescanned, so braces inside them survive verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Accepts any non-empty completion, trimmed. Content is not inspected.
pub fn validate_response(text: Option<&str>) -> Result<String, AppError> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::EnhancementFailed("No content returned from AI".to_string()))
}

/// Runs one enhancement: field checks, then configuration, then a single
/// completion call.
pub async fn enhance(
    generator: Option<&dyn TextGenerator>,
    request: EnhanceRequest,
) -> Result<String, AppError> {
    let (Some(raw_message), Some(rep_name), Some(rep_role)) = (
        request.raw_message.filter(|m| !m.trim().is_empty()),
        non_blank(request.rep_name),
        non_blank(request.rep_role),
    ) else {
        return Err(AppError::InvalidRequest(
            "rawMessage, repName, and repRole are required".to_string(),
        ));
    };

    let generator = generator.ok_or(AppError::EnhancementUnconfigured)?;

    let prompt = build_prompt(
        &raw_message,
        &rep_name,
        &rep_role,
        request.district_name.as_deref(),
        request.topic.as_deref(),
    );

    info!("Enhancing message for {rep_name} ({rep_role})");
    let completion = generator.complete(&prompt).await?;

    validate_response(completion.as_deref())
}
