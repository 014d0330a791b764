/// Wraps letter text in the `<pre>` document handed to the print dialog.
/// Only `&`, `<` and `>` are escaped; `&` first so entities are not doubled.
pub fn printable_html(letter: &str) -> String {
    let escaped = letter
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<pre style=\"white-space:pre-wrap;font-family:serif;font-size:12pt;\">{escaped}</pre>"
    )
}
