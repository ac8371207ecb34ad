/// Removes every whitespace character and uppercases what is left.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !is_separator(*ch))
        .collect::<String>()
        .to_uppercase()
}

/// Whitespace as pasted from browsers and files: Unicode `White_Space` plus
/// the byte order mark, minus NEL (U+0085).
fn is_separator(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}
