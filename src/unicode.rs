use unicode_joining_type::{get_joining_type, JoiningType};

use crate::alphabet::DIACRITICS;

/// Returns `true` if `ch` is one of the Arabic vowel marks in [DIACRITICS].
pub fn is_diacritic(ch: char) -> bool {
    DIACRITICS.contains(&ch)
}

/// Returns `true` if `ch` is transparent to cursive joining, i.e. a combining mark that sits
/// on a letter without interrupting the connection to its neighbours.
pub fn is_transparent(ch: char) -> bool {
    get_joining_type(ch) == JoiningType::Transparent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{SUPERSCRIPT_ALEF, TATWEEL};

    #[test]
    fn diacritics() {
        assert!(is_diacritic('\u{064E}'));
        assert!(is_diacritic('\u{0651}'));
        assert!(!is_diacritic(SUPERSCRIPT_ALEF));
        assert!(!is_diacritic(TATWEEL.base()));
        assert!(!is_diacritic('a'));
    }

    #[test]
    fn marks_are_transparent() {
        for mark in DIACRITICS.iter().chain(Some(&SUPERSCRIPT_ALEF)) {
            assert!(is_transparent(*mark), "U+{:04X}", *mark as u32);
        }
    }

    #[test]
    fn letters_and_spaces_are_not_transparent() {
        assert!(!is_transparent('\u{0628}'));
        assert!(!is_transparent(TATWEEL.base()));
        assert!(!is_transparent(' '));
        assert!(!is_transparent('a'));
    }
}
