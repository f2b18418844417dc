//! Error types

use std::fmt;

/// Error returned when a single character has no transliteration
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct UnsupportedCharacter(pub char);

impl fmt::Display for UnsupportedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported character {:?} (U+{:04X})", self.0, self.0 as u32)
    }
}

impl std::error::Error for UnsupportedCharacter {}

/// The direction of a transliteration
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Direction {
    ArabicToSafeBw,
    SafeBwToArabic,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ArabicToSafeBw => write!(f, "Arabic"),
            Direction::SafeBwToArabic => write!(f, "Safe Buckwalter"),
        }
    }
}

/// Error returned from text transliteration functions
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TransliterationError {
    /// `index` counts characters, not bytes.
    UnsupportedCharacter {
        ch: char,
        index: usize,
        direction: Direction,
    },
}

impl TransliterationError {
    pub(crate) fn at(error: UnsupportedCharacter, index: usize, direction: Direction) -> Self {
        TransliterationError::UnsupportedCharacter {
            ch: error.0,
            index,
            direction,
        }
    }

    /// The offending character.
    pub fn character(&self) -> char {
        match self {
            TransliterationError::UnsupportedCharacter { ch, .. } => *ch,
        }
    }

    /// The character index of the offending character.
    pub fn index(&self) -> usize {
        match self {
            TransliterationError::UnsupportedCharacter { index, .. } => *index,
        }
    }
}

impl fmt::Display for TransliterationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransliterationError::UnsupportedCharacter {
                ch,
                index,
                direction,
            } => write!(
                f,
                "{:?} at index {} is not a valid {} character",
                ch, index, direction
            ),
        }
    }
}

impl std::error::Error for TransliterationError {}
