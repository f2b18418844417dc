//! Mapping from code points to letters.
//!
//! Every code point of a letter (its base and its four presentation forms) resolves to the same
//! [Letter], so input that mixes unshaped and already shaped text is handled uniformly.

use lazy_static::lazy_static;
use log::warn;
use rustc_hash::FxHashMap;

use crate::alphabet::ALPHABET;
use crate::letter::Letter;

lazy_static! {
    static ref LETTER_INDEX: FxHashMap<char, &'static Letter> = build_index(&ALPHABET);
}

fn build_index(alphabet: &'static [Letter]) -> FxHashMap<char, &'static Letter> {
    let mut index =
        FxHashMap::with_capacity_and_hasher(alphabet.len() * 5, Default::default());

    for letter in alphabet {
        for ch in letter.code_points() {
            // The first letter to claim a code point keeps it, as with a linear scan
            if let Some(&owner) = index.get(&ch) {
                if owner != letter {
                    warn!(
                        "U+{:04X} of {:?} is already claimed by {:?}",
                        ch as u32, letter, owner
                    );
                }
                continue;
            }
            index.insert(ch, letter);
        }
    }

    index
}

/// Returns the letter that `ch` denotes, or `None` if `ch` is not part of the alphabet.
pub fn resolve(ch: char) -> Option<&'static Letter> {
    LETTER_INDEX.get(&ch).copied()
}

/// Linear scan equivalent of [resolve].
pub fn resolve_linear(ch: char) -> Option<&'static Letter> {
    ALPHABET.iter().find(|letter| letter.contains(ch))
}

/// Returns `true` if `ch` is any form of a letter in the alphabet.
pub fn is_alphabetic(ch: char) -> bool {
    resolve(ch).is_some()
}
