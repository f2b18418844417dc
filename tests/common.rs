#![allow(dead_code)]

use harf::resolve;

/// Format the characters of `text` as `U+XXXX` so assertion failures are readable
pub fn code_points(text: &str) -> Vec<String> {
    text.chars()
        .map(|ch| format!("U+{:04X}", ch as u32))
        .collect()
}

/// The base letter each character of `text` denotes, if any
pub fn identities(text: &str) -> Vec<Option<char>> {
    text.chars()
        .map(|ch| resolve(ch).map(|letter| letter.base()))
        .collect()
}
