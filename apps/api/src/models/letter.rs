use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::representative::GovernmentLevel;

/// The constituent writing the letter. Required fields are empty strings
/// when absent; optional fields are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SenderIdentity {
    pub name: String,
    pub addr1: String,
    pub addr2: Option<String>,
    pub city: String,
    pub province: String,
    pub postal: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// The addressee block of a letter.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub name: String,
    pub level: GovernmentLevel,
    pub office_postal: Option<String>,
}

impl Recipient {
    pub fn role_title(&self) -> &'static str {
        self.level.role_title()
    }
}

/// Everything needed to render one letter. The date is an explicit input
/// so that assembly stays a pure function.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterInput {
    pub sender: SenderIdentity,
    pub recipient: Recipient,
    pub topic: Option<String>,
    pub body: String,
    pub date: NaiveDate,
}

impl LetterInput {
    /// Checks the rendering preconditions, naming every missing field.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("representative name", &self.recipient.name),
            ("sender name", &self.sender.name),
            ("address line 1", &self.sender.addr1),
            ("city", &self.sender.city),
            ("province", &self.sender.province),
            ("sender postal code", &self.sender.postal),
            ("letter body", &self.body),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidRequest(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
