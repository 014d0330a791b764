//! Axum route handlers for letter building.
//!
//! The request carries the representative picked during lookup, so nothing
//! about a user's flow is held on the server between calls.

use axum::{extract::rejection::JsonRejection, response::Html, Json};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::letter::assembler::assemble;
use crate::letter::printable::printable_html;
use crate::models::letter::{LetterInput, Recipient, SenderIdentity};
use crate::models::non_blank;
use crate::models::representative::GovernmentLevel;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The representative as returned by `/api/representative`; other fields
/// of that response are accepted and ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RecipientPayload {
    pub name: Option<String>,
    pub office_postal: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SenderPayload {
    pub name: Option<String>,
    pub addr1: Option<String>,
    pub addr2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BuildLetterRequest {
    #[serde(default)]
    pub representative: RecipientPayload,
    /// "federal" | "provincial"; defaults to federal.
    pub level: Option<String>,
    #[serde(default)]
    pub sender: SenderPayload,
    pub topic: Option<String>,
    pub body: Option<String>,
    /// Letter date (YYYY-MM-DD); defaults to today's local date.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct LetterResponse {
    pub letter: String,
}

impl BuildLetterRequest {
    /// Trims every field and checks the rendering preconditions.
    pub fn into_input(self, today: NaiveDate) -> Result<LetterInput, AppError> {
        let level = match non_blank(self.level) {
            Some(level) => level.parse().map_err(AppError::InvalidRequest)?,
            None => GovernmentLevel::Federal,
        };

        let sender = self.sender;
        let input = LetterInput {
            sender: SenderIdentity {
                name: non_blank(sender.name).unwrap_or_default(),
                addr1: non_blank(sender.addr1).unwrap_or_default(),
                addr2: non_blank(sender.addr2),
                city: non_blank(sender.city).unwrap_or_default(),
                province: non_blank(sender.province).unwrap_or_default(),
                postal: non_blank(sender.postal).unwrap_or_default(),
                email: non_blank(sender.email),
                phone: non_blank(sender.phone),
            },
            recipient: Recipient {
                name: non_blank(self.representative.name).unwrap_or_default(),
                level,
                office_postal: non_blank(self.representative.office_postal),
            },
            topic: non_blank(self.topic),
            body: non_blank(self.body).unwrap_or_default(),
            date: self.date.unwrap_or(today),
        };

        input.validate()?;
        Ok(input)
    }
}

fn build_letter(
    payload: Result<Json<BuildLetterRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let input = request.into_input(Local::now().date_naive())?;
    Ok(assemble(&input))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/letter
///
/// Renders the letter text. Regenerated on every call; nothing is stored.
pub async fn handle_build_letter(
    payload: Result<Json<BuildLetterRequest>, JsonRejection>,
) -> Result<Json<LetterResponse>, AppError> {
    let letter = build_letter(payload)?;
    Ok(Json(LetterResponse { letter }))
}

/// POST /api/letter/printable
///
/// Same input as `/api/letter`, returned as the HTML page sent to the printer.
pub async fn handle_printable_letter(
    payload: Result<Json<BuildLetterRequest>, JsonRejection>,
) -> Result<Html<String>, AppError> {
    let letter = build_letter(payload)?;
    Ok(Html(printable_html(&letter)))
}
