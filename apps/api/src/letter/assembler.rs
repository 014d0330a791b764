//! Letter assembly — deterministic templating of a `LetterInput` into letter text.
//!
//! Layout, top to bottom:
//!   sender block · date · recipient block · subject · salutation · body · closing
//!
//! Optional lines are omitted rather than left blank, and any run of three or
//! more newlines in the result is collapsed to exactly two.

use chrono::NaiveDate;

use crate::models::letter::LetterInput;

/// Long-form date as printed in the letter, e.g. "March 5, 2024".
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Renders the full letter. Total over inputs that pass `LetterInput::validate`.
pub fn assemble(input: &LetterInput) -> String {
    let sender = &input.sender;
    let recipient = &input.recipient;

    let city_line = format!("{}, {} {}", sender.city, sender.province, sender.postal);
    let sender_block = join_present(&[
        sender.name.as_str(),
        sender.addr1.as_str(),
        sender.addr2.as_deref().unwrap_or_default(),
        city_line.trim(),
        sender.email.as_deref().unwrap_or_default(),
        sender.phone.as_deref().unwrap_or_default(),
    ]);

    let recipient_block = join_present(&[
        recipient.name.as_str(),
        recipient.role_title(),
        recipient.office_postal.as_deref().unwrap_or_default(),
    ]);

    let subject_line = input
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Re: {t}\n"))
        .unwrap_or_default();

    let salutation = format!("Dear {},", recipient.name);
    let closing = format!("Sincerely,\n\n{}", sender.name);
    let date = format_letter_date(input.date);

    let letter = [
        sender_block.as_str(),
        "",
        date.as_str(),
        "",
        recipient_block.as_str(),
        "",
        subject_line.as_str(),
        salutation.as_str(),
        "",
        input.body.as_str(),
        "",
        closing.as_str(),
    ]
    .join("\n");

    collapse_blank_lines(&letter)
}

/// Joins the non-blank lines with newlines.
fn join_present(lines: &[&str]) -> String {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapses every run of 3+ consecutive newlines to exactly 2.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run > 2 {
                continue;
            }
        } else {
            run = 0;
        }
        out.push(c);
    }
    out
}
