/// Canonicalizes a raw postal code into the lookup key used by the
/// civic-data service: uppercase, every whitespace character removed.
///
/// Never fails. Postal-code grammar is not checked here; malformed input
/// passes through and is rejected by the service.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
