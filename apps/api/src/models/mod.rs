pub mod letter;
pub mod representative;

/// Trims an optional request field, treating blank text as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
