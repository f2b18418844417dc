//! Transliteration between Arabic script and the Safe Buckwalter scheme.
//!
//! Safe Buckwalter is a one-to-one ASCII encoding of Arabic letters and vowel marks that avoids
//! characters with special meaning in regular expressions, XML and shells. See
//! <https://camel-tools.readthedocs.io/en/stable/reference/encoding_schemes.html>.
//!
//! Only unshaped text can be transliterated: presentation forms produced by
//! [shape_text](crate::shaping::shape_text) are rejected.

use log::debug;

use crate::alphabet::*;
use crate::error::{Direction, TransliterationError, UnsupportedCharacter};

/// Pairs of (Arabic, Safe Buckwalter) characters.
#[rustfmt::skip]
static SAFE_BW: [(char, char); 52] = [
    (HAMZA.base(),            'C'),
    (ALEF_MADDA_ABOVE.base(), 'M'),
    (ALEF_HAMZA_ABOVE.base(), 'O'),
    (WAW_HAMZA_ABOVE.base(),  'W'),
    (ALEF_HAMZA_BELOW.base(), 'I'),
    (YEH_HAMZA_ABOVE.base(),  'Q'),
    (ALEF.base(),             'A'),
    (ALEF_WASLA.base(),       'L'),
    (BEH.base(),              'b'),
    (TEH_MARBUTA.base(),      'p'),
    (TEH.base(),              't'),
    (THEH.base(),             'v'),
    (JEEM.base(),             'j'),
    (HAH.base(),              'H'),
    (KHAH.base(),             'x'),
    (DAL.base(),              'd'),
    (THAL.base(),             'V'),
    (REH.base(),              'r'),
    (ZAIN.base(),             'z'),
    (SEEN.base(),             's'),
    (SHEEN.base(),            'c'),
    (SAD.base(),              'S'),
    (DAD.base(),              'D'),
    (TAH.base(),              'T'),
    (ZAH.base(),              'Z'),
    (AIN.base(),              'E'),
    (GHAIN.base(),            'g'),
    (TATWEEL.base(),          '_'),
    (FEH.base(),              'f'),
    (QAF.base(),              'q'),
    (KAF.base(),              'k'),
    (LAM.base(),              'l'),
    (MEEM.base(),             'm'),
    (NOON.base(),             'n'),
    (HEH.base(),              'h'),
    (WAW.base(),              'w'),
    (ALEF_MAKSURA.base(),     'Y'),
    (YEH.base(),              'y'),
    (FATHATAN,                'F'),
    (DAMMATAN,                'N'),
    (KASRATAN,                'K'),
    (FATHA,                   'a'),
    (DAMMA,                   'u'),
    (KASRA,                   'i'),
    (SHADDA,                  '~'),
    (SUKUN,                   'o'),
    (SUPERSCRIPT_ALEF,        'e'),
    (PEH.base(),              'P'),
    (TCHEH.base(),            'J'),
    (VEH.base(),              'B'),
    (GAF.base(),              'G'),
    (' ',                     ' '),
];

/// Converts one Arabic letter, vowel mark or space to Safe Buckwalter.
pub fn encode(ch: char) -> Result<char, UnsupportedCharacter> {
    SAFE_BW
        .iter()
        .find(|&&(arabic, _)| arabic == ch)
        .map(|&(_, safe_bw)| safe_bw)
        .ok_or(UnsupportedCharacter(ch))
}

/// Converts one Safe Buckwalter character back to Arabic.
pub fn decode(ch: char) -> Result<char, UnsupportedCharacter> {
    SAFE_BW
        .iter()
        .find(|&&(_, safe_bw)| safe_bw == ch)
        .map(|&(arabic, _)| arabic)
        .ok_or(UnsupportedCharacter(ch))
}

/// Returns `true` if `ch` can be passed to [encode].
pub fn is_encodable(ch: char) -> bool {
    encode(ch).is_ok()
}

/// Returns `true` if `ch` can be passed to [decode].
pub fn is_decodable(ch: char) -> bool {
    decode(ch).is_ok()
}

/// Transliterates Arabic `text` to Safe Buckwalter.
///
/// Fails on the first character without a transliteration; no partial result is returned.
pub fn encode_text(text: &str) -> Result<String, TransliterationError> {
    convert_text(text, Direction::ArabicToSafeBw, encode)
}

/// Transliterates Safe Buckwalter `text` to Arabic.
///
/// Fails on the first character without a transliteration; no partial result is returned.
pub fn decode_text(text: &str) -> Result<String, TransliterationError> {
    convert_text(text, Direction::SafeBwToArabic, decode)
}

fn convert_text(
    text: &str,
    direction: Direction,
    convert: impl Fn(char) -> Result<char, UnsupportedCharacter>,
) -> Result<String, TransliterationError> {
    let mut result = String::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        let converted = convert(ch).map_err(|err| {
            debug!("transliterate {:?}: {} at index {}", direction, err, index);
            TransliterationError::at(err, index, direction)
        })?;
        result.push(converted);
    }
    Ok(result)
}
