//! Simple filters over Arabic text.

use crate::alphabet::ELONGATION;
use crate::resolve::is_alphabetic;
use crate::unicode::is_diacritic;

/// Removes all vowel marks (tashkeel) from `text`.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|&ch| !is_diacritic(ch)).collect()
}

/// Counts the characters of `text`, ignoring vowel marks.
pub fn count_base_characters(text: &str) -> usize {
    text.chars().filter(|&ch| !is_diacritic(ch)).count()
}

/// Removes all elongation marks (tatweel) from `text`.
pub fn remove_elongation(text: &str) -> String {
    text.chars().filter(|&ch| ch != ELONGATION).collect()
}

/// Keeps only the characters of `text` that are letters of the alphabet, in any form.
///
/// Note that the elongation mark counts as a letter.
pub fn keep_only_alphabetic(text: &str) -> String {
    text.chars().filter(|&ch| is_alphabetic(ch)).collect()
}

/// Reverses the order of the characters in `text`.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
