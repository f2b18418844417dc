//! Contextual selection of Arabic presentation forms.
//!
//! Each letter is shaped from a window of three code points: the letter itself and its
//! immediate neighbours. A letter joins to the letter before it unless that letter is a
//! non-connector, and joins to the letter after it whenever there is one. Code points that are
//! not letters are passed through unchanged and break the connection.

use bitflags::bitflags;

use crate::alphabet::{
    is_non_connector, ALEF, ALEF_HAMZA_ABOVE, LAM, LAM_ALEF, LAM_ALEF_HAMZA_ABOVE,
};
use crate::letter::{Form, Letter};
use crate::resolve::resolve;
use crate::unicode::is_transparent;

bitflags! {
    /// Options that adjust [shape_text_with].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ShapingFlags: u8 {
        /// Look past combining marks when finding the neighbours of a letter, so vowelled text
        /// joins the same way as unvowelled text.
        const SKIP_TRANSPARENT = 1 << 0;
        /// Replace LAM followed by ALEF (or ALEF WITH HAMZA ABOVE) with the combined ligature.
        const LAM_ALEF_LIGATURES = 1 << 1;
    }
}

/// Chooses the form of `current` given its neighbours.
///
/// `prev` and `next` are `None` at the start and end of the text. Returns `None` if `current`
/// is not a letter, in which case it is left unchanged.
pub fn select_form(prev: Option<char>, current: char, next: Option<char>) -> Option<Form> {
    resolve(current)?;
    Some(joining_form(prev.and_then(resolve), next.and_then(resolve)))
}

/// Returns the presentation form of `current` given its neighbours, or `current` itself if it
/// is not a letter.
pub fn select_glyph(prev: Option<char>, current: char, next: Option<char>) -> char {
    select_form(prev, current, next)
        .and_then(|form| resolve(current).map(|letter| letter.form(form)))
        .unwrap_or(current)
}

fn joining_form(prev: Option<&Letter>, next: Option<&Letter>) -> Form {
    match (prev, next.is_some()) {
        (Some(prev), true) if is_non_connector(prev) => Form::Initial,
        (Some(_), true) => Form::Medial,
        (None, true) => Form::Initial,
        (Some(prev), false) if is_non_connector(prev) => Form::Isolated,
        (Some(_), false) => Form::Final,
        (None, false) => Form::Isolated,
    }
}

/// Replaces every letter in `text` with its contextual presentation form.
///
/// The result has the same number of code points as `text`. Text that is already (partly)
/// shaped is reshaped from scratch.
pub fn shape_text(text: &str) -> String {
    shape_text_with(text, ShapingFlags::empty())
}

/// Like [shape_text] with additional options.
///
/// With `LAM_ALEF_LIGATURES` the result can be shorter than `text`.
pub fn shape_text_with(text: &str, flags: ShapingFlags) -> String {
    let chars = text.chars().collect::<Vec<_>>();
    let mut glyphs = Vec::with_capacity(chars.len());

    for (i, &ch) in chars.iter().enumerate() {
        let glyph = match resolve(ch) {
            Some(letter) => {
                let (prev, next) = neighbours(&chars, i, flags);
                let form = joining_form(prev.and_then(resolve), next.and_then(resolve));
                ShapedChar {
                    ch: letter.form(form),
                    letter: Some((letter, form)),
                }
            }
            None => ShapedChar { ch, letter: None },
        };
        glyphs.push(glyph);
    }

    if flags.contains(ShapingFlags::LAM_ALEF_LIGATURES) {
        glyphs = ligate_lam_alef(glyphs, flags);
    }

    glyphs.iter().map(|glyph| glyph.ch).collect()
}

#[derive(Clone, Copy)]
struct ShapedChar {
    ch: char,
    letter: Option<(&'static Letter, Form)>,
}

fn neighbours(chars: &[char], i: usize, flags: ShapingFlags) -> (Option<char>, Option<char>) {
    if flags.contains(ShapingFlags::SKIP_TRANSPARENT) {
        let prev = chars[..i].iter().rev().find(|&&ch| !is_transparent(ch));
        let next = chars[i + 1..].iter().find(|&&ch| !is_transparent(ch));
        (prev.copied(), next.copied())
    } else {
        let prev = i.checked_sub(1).map(|j| chars[j]);
        (prev, chars.get(i + 1).copied())
    }
}

/// Merges each LAM and the ALEF that follows it into a single ligature.
///
/// With `SKIP_TRANSPARENT`, marks between the LAM and the ALEF are kept after the ligature.
fn ligate_lam_alef(glyphs: Vec<ShapedChar>, flags: ShapingFlags) -> Vec<ShapedChar> {
    let skip_transparent = flags.contains(ShapingFlags::SKIP_TRANSPARENT);
    let mut ligated = Vec::with_capacity(glyphs.len());
    let mut i = 0;

    while i < glyphs.len() {
        let glyph = &glyphs[i];
        if let Some((_, lam_form)) = glyph.letter.filter(|(letter, _)| **letter == LAM) {
            let mut j = i + 1;
            if skip_transparent {
                while j < glyphs.len() && is_transparent(glyphs[j].ch) {
                    j += 1;
                }
            }
            let ligature = glyphs
                .get(j)
                .and_then(|alef| alef.letter)
                .and_then(|(alef, _)| lam_alef_ligature(alef));
            if let Some(ligature) = ligature {
                // The ligature joins backwards exactly when the LAM did
                let form = match lam_form {
                    Form::Initial | Form::Isolated => Form::Isolated,
                    Form::Medial | Form::Final => Form::Final,
                };
                ligated.push(ShapedChar {
                    ch: ligature.form(form),
                    letter: Some((ligature, form)),
                });
                ligated.extend_from_slice(&glyphs[i + 1..j]);
                i = j + 1;
                continue;
            }
        }
        ligated.push(*glyph);
        i += 1;
    }

    ligated
}

fn lam_alef_ligature(alef: &Letter) -> Option<&'static Letter> {
    if *alef == ALEF {
        Some(&LAM_ALEF)
    } else if *alef == ALEF_HAMZA_ABOVE {
        Some(&LAM_ALEF_HAMZA_ABOVE)
    } else {
        None
    }
}
