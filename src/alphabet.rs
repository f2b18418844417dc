//! The Arabic alphabet: letters, vowel marks and the non-connecting letters.
//!
//! Presentation forms are taken from the Arabic Presentation Forms-A and -B blocks. The
//! alphabet covers the Arabic letters plus the Persian additions PEH, TCHEH, JEH, KEHEH, GAF,
//! FARSI YEH and the Maghrebi VEH.

use crate::letter::Letter;

// Vowel marks (tashkeel)
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const SUPERSCRIPT_ALEF: char = '\u{0670}';

/// Marks that are stripped by [remove_diacritics](crate::text::remove_diacritics) and not
/// counted by [count_base_characters](crate::text::count_base_characters).
///
/// `SUPERSCRIPT_ALEF` is not included: it is transliterated but otherwise treated as a regular
/// character.
pub static DIACRITICS: [char; 8] = [
    FATHA, FATHATAN, DAMMA, DAMMATAN, KASRA, KASRATAN, SHADDA, SUKUN,
];

/// The elongation mark (kashida).
pub const ELONGATION: char = TATWEEL.base();

/// ٱ
pub const ALEF_WASLA: Letter = Letter::new(
    "ALEF WASLA",
    '\u{0671}',
    '\u{FB50}',
    '\u{0671}',
    '\u{0671}',
    '\u{FB61}',
);

/// أ
pub const ALEF_HAMZA_ABOVE: Letter = Letter::new(
    "ALEF HAMZA ABOVE",
    '\u{0623}',
    '\u{FE83}',
    '\u{0623}',
    '\u{FE84}',
    '\u{FE84}',
);

/// ا
pub const ALEF: Letter = Letter::new(
    "ALEF",
    '\u{0627}',
    '\u{FE8D}',
    '\u{0627}',
    '\u{FE8E}',
    '\u{FE8E}',
);

/// آ
pub const ALEF_MADDA_ABOVE: Letter = Letter::new(
    "ALEF MADDA ABOVE",
    '\u{0622}',
    '\u{FE81}',
    '\u{0622}',
    '\u{FE82}',
    '\u{FE82}',
);

/// ء
pub const HAMZA: Letter = Letter::new(
    "HAMZA",
    '\u{0621}',
    '\u{FE80}',
    '\u{0621}',
    '\u{0621}',
    '\u{0621}',
);

/// ؤ
pub const WAW_HAMZA_ABOVE: Letter = Letter::new(
    "WAW HAMZA ABOVE",
    '\u{0624}',
    '\u{FE85}',
    '\u{0624}',
    '\u{FE86}',
    '\u{FE86}',
);

/// أ
pub const ALEF_HAMZA_BELOW: Letter = Letter::new(
    "ALEF HAMZA BELOW",
    '\u{0625}',
    '\u{FE87}',
    '\u{0625}',
    '\u{FE88}',
    '\u{FE88}',
);

/// ئ
pub const YEH_HAMZA_ABOVE: Letter = Letter::new(
    "YEH HAMZA ABOVE",
    '\u{0626}',
    '\u{FE89}',
    '\u{FE8B}',
    '\u{FE8C}',
    '\u{FE8A}',
);

/// ب
pub const BEH: Letter = Letter::new(
    "BEH",
    '\u{0628}',
    '\u{FE8F}',
    '\u{FE91}',
    '\u{FE92}',
    '\u{FE90}',
);

/// پ
pub const PEH: Letter = Letter::new(
    "PEH",
    '\u{067E}',
    '\u{FB56}',
    '\u{FB58}',
    '\u{FB59}',
    '\u{FB57}',
);

/// ت
pub const TEH: Letter = Letter::new(
    "TEH",
    '\u{062A}',
    '\u{FE95}',
    '\u{FE97}',
    '\u{FE98}',
    '\u{FE96}',
);

/// ة
pub const TEH_MARBUTA: Letter = Letter::new(
    "TEH MARBUTA",
    '\u{0629}',
    '\u{FE93}',
    '\u{0629}',
    '\u{0629}',
    '\u{FE94}',
);

/// ث
pub const THEH: Letter = Letter::new(
    "THEH",
    '\u{062B}',
    '\u{FE99}',
    '\u{FE9B}',
    '\u{FE9C}',
    '\u{FE9A}',
);

/// ج
pub const JEEM: Letter = Letter::new(
    "JEEM",
    '\u{062C}',
    '\u{FE9D}',
    '\u{FE9F}',
    '\u{FEA0}',
    '\u{FE9E}',
);

/// چ
pub const TCHEH: Letter = Letter::new(
    "TCHEH",
    '\u{0686}',
    '\u{FB7A}',
    '\u{FB7C}',
    '\u{FB7D}',
    '\u{FB7B}',
);

/// ح
pub const HAH: Letter = Letter::new(
    "HAH",
    '\u{062D}',
    '\u{FEA1}',
    '\u{FEA3}',
    '\u{FEA4}',
    '\u{FEA2}',
);

/// خ
pub const KHAH: Letter = Letter::new(
    "KHAH",
    '\u{062E}',
    '\u{FEA5}',
    '\u{FEA7}',
    '\u{FEA8}',
    '\u{FEA6}',
);

/// د
pub const DAL: Letter = Letter::new(
    "DAL",
    '\u{062F}',
    '\u{FEA9}',
    '\u{062F}',
    '\u{FEAA}',
    '\u{FEAA}',
);

/// ذ
pub const THAL: Letter = Letter::new(
    "THAL",
    '\u{0630}',
    '\u{FEAB}',
    '\u{0630}',
    '\u{FEAC}',
    '\u{FEAC}',
);

/// ر
pub const REH: Letter = Letter::new(
    "REH",
    '\u{0631}',
    '\u{FEAD}',
    '\u{0631}',
    '\u{FEAE}',
    '\u{FEAE}',
);

/// ژ
pub const JEH: Letter = Letter::new(
    "JEH",
    '\u{0698}',
    '\u{FB8A}',
    '\u{0698}',
    '\u{FB8B}',
    '\u{FB8B}',
);

/// ز
pub const ZAIN: Letter = Letter::new(
    "ZAIN",
    '\u{0632}',
    '\u{FEAF}',
    '\u{0632}',
    '\u{FEB0}',
    '\u{FEB0}',
);

/// س
pub const SEEN: Letter = Letter::new(
    "SEEN",
    '\u{0633}',
    '\u{FEB1}',
    '\u{FEB3}',
    '\u{FEB4}',
    '\u{FEB2}',
);

/// ش
pub const SHEEN: Letter = Letter::new(
    "SHEEN",
    '\u{0634}',
    '\u{FEB5}',
    '\u{FEB7}',
    '\u{FEB8}',
    '\u{FEB6}',
);

/// ص
pub const SAD: Letter = Letter::new(
    "SAD",
    '\u{0635}',
    '\u{FEB9}',
    '\u{FEBB}',
    '\u{FEBC}',
    '\u{FEBA}',
);

/// ض
pub const DAD: Letter = Letter::new(
    "DAD",
    '\u{0636}',
    '\u{FEBD}',
    '\u{FEBF}',
    '\u{FEC0}',
    '\u{FEBE}',
);

/// ط
pub const TAH: Letter = Letter::new(
    "TAH",
    '\u{0637}',
    '\u{FEC1}',
    '\u{FEC3}',
    '\u{FEC4}',
    '\u{FEC2}',
);

/// ظ
pub const ZAH: Letter = Letter::new(
    "ZAH",
    '\u{0638}',
    '\u{FEC5}',
    '\u{FEC7}',
    '\u{FEC8}',
    '\u{FEC6}',
);

/// ع
pub const AIN: Letter = Letter::new(
    "AIN",
    '\u{0639}',
    '\u{FEC9}',
    '\u{FECB}',
    '\u{FECC}',
    '\u{FECA}',
);

/// غ
pub const GHAIN: Letter = Letter::new(
    "GHAIN",
    '\u{063A}',
    '\u{FECD}',
    '\u{FECF}',
    '\u{FED0}',
    '\u{FECE}',
);

/// ف
pub const FEH: Letter = Letter::new(
    "FEH",
    '\u{0641}',
    '\u{FED1}',
    '\u{FED3}',
    '\u{FED4}',
    '\u{FED2}',
);

/// ق
pub const QAF: Letter = Letter::new(
    "QAF",
    '\u{0642}',
    '\u{FED5}',
    '\u{FED7}',
    '\u{FED8}',
    '\u{FED6}',
);

/// ڤ
pub const VEH: Letter = Letter::new(
    "VEH",
    '\u{06A4}',
    '\u{FB6A}',
    '\u{FB6C}',
    '\u{FB6D}',
    '\u{FB6B}',
);

/// ك
pub const KAF: Letter = Letter::new(
    "KAF",
    '\u{0643}',
    '\u{FED9}',
    '\u{FEDB}',
    '\u{FEDC}',
    '\u{FEDA}',
);

/// ک
pub const KEHEH: Letter = Letter::new(
    "KEHEH",
    '\u{06A9}',
    '\u{FB8E}',
    '\u{FB90}',
    '\u{FB91}',
    '\u{FB8F}',
);

/// گ
pub const GAF: Letter = Letter::new(
    "GAF",
    '\u{06AF}',
    '\u{FB92}',
    '\u{FB94}',
    '\u{FB95}',
    '\u{FB93}',
);

/// ل
pub const LAM: Letter = Letter::new(
    "LAM",
    '\u{0644}',
    '\u{FEDD}',
    '\u{FEDF}',
    '\u{FEE0}',
    '\u{FEDE}',
);

/// م
pub const MEEM: Letter = Letter::new(
    "MEEM",
    '\u{0645}',
    '\u{FEE1}',
    '\u{FEE3}',
    '\u{FEE4}',
    '\u{FEE2}',
);

/// ن
pub const NOON: Letter = Letter::new(
    "NOON",
    '\u{0646}',
    '\u{FEE5}',
    '\u{FEE7}',
    '\u{FEE8}',
    '\u{FEE6}',
);

/// ه
pub const HEH: Letter = Letter::new(
    "HEH",
    '\u{0647}',
    '\u{FEE9}',
    '\u{FEEB}',
    '\u{FEEC}',
    '\u{FEEA}',
);

/// و
pub const WAW: Letter = Letter::new(
    "WAW",
    '\u{0648}',
    '\u{FEED}',
    '\u{0648}',
    '\u{FEEE}',
    '\u{FEEE}',
);

/// ي
pub const YEH: Letter = Letter::new(
    "YEH",
    '\u{064A}',
    '\u{FEF1}',
    '\u{FEF3}',
    '\u{FEF4}',
    '\u{FEF2}',
);

/// ی
pub const FARSI_YEH: Letter = Letter::new(
    "FARSI YEH",
    '\u{06CC}',
    '\u{FBFC}',
    '\u{FBFE}',
    '\u{FBFF}',
    '\u{FBFD}',
);

/// ى
pub const ALEF_MAKSURA: Letter = Letter::new(
    "ALEF MAKSURA",
    '\u{0649}',
    '\u{FEEF}',
    '\u{0649}',
    '\u{FEF0}',
    '\u{FEF0}',
);

/// ـ
pub const TATWEEL: Letter = Letter::new(
    "TATWEEL",
    '\u{0640}',
    '\u{0640}',
    '\u{0640}',
    '\u{0640}',
    '\u{0640}',
);

/// ﻻ
pub const LAM_ALEF: Letter = Letter::new(
    "LAM ALEF",
    '\u{FEFB}',
    '\u{FEFB}',
    '\u{FEFB}',
    '\u{FEFC}',
    '\u{FEFC}',
);

/// ﻷ
pub const LAM_ALEF_HAMZA_ABOVE: Letter = Letter::new(
    "LAM ALEF HAMZA ABOVE",
    '\u{FEF7}',
    '\u{FEF7}',
    '\u{FEF7}',
    '\u{FEF8}',
    '\u{FEF8}',
);

/// Every letter known to the shaper, in definition order.
pub static ALPHABET: [Letter; 47] = [
    ALEF_WASLA,
    ALEF_HAMZA_ABOVE,
    ALEF,
    ALEF_MADDA_ABOVE,
    HAMZA,
    WAW_HAMZA_ABOVE,
    ALEF_HAMZA_BELOW,
    YEH_HAMZA_ABOVE,
    BEH,
    PEH,
    TEH,
    TEH_MARBUTA,
    THEH,
    JEEM,
    TCHEH,
    HAH,
    KHAH,
    DAL,
    THAL,
    REH,
    JEH,
    ZAIN,
    SEEN,
    SHEEN,
    SAD,
    DAD,
    TAH,
    ZAH,
    AIN,
    GHAIN,
    FEH,
    QAF,
    VEH,
    KAF,
    KEHEH,
    GAF,
    LAM,
    MEEM,
    NOON,
    HEH,
    WAW,
    YEH,
    FARSI_YEH,
    ALEF_MAKSURA,
    TATWEEL,
    LAM_ALEF,
    LAM_ALEF_HAMZA_ABOVE,
];

/// Letters that never join to the letter that follows them.
///
/// A letter preceded by one of these takes its initial or isolated form.
pub static NON_CONNECTORS: [Letter; 13] = [
    ALEF_HAMZA_ABOVE,
    ALEF_MADDA_ABOVE,
    ALEF,
    HAMZA,
    WAW_HAMZA_ABOVE,
    ALEF_HAMZA_BELOW,
    TEH_MARBUTA,
    DAL,
    THAL,
    REH,
    ZAIN,
    WAW,
    ALEF_MAKSURA,
];

/// Returns `true` if `letter` does not join to a following letter.
pub fn is_non_connector(letter: &Letter) -> bool {
    NON_CONNECTORS.contains(letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::Form;

    use rustc_hash::FxHashMap;
    use unicode_joining_type::{get_joining_type, JoiningType};

    #[test]
    fn no_shared_forms() {
        let mut owners: FxHashMap<char, &Letter> = FxHashMap::default();
        for letter in ALPHABET.iter() {
            for ch in letter.code_points() {
                if let Some(owner) = owners.insert(ch, letter) {
                    assert_eq!(owner, letter, "U+{:04X} is claimed twice", ch as u32);
                }
            }
        }
    }

    #[test]
    fn unique_bases() {
        for (i, a) in ALPHABET.iter().enumerate() {
            for b in &ALPHABET[i + 1..] {
                assert_ne!(a.base(), b.base(), "{:?} and {:?}", a, b);
            }
        }
    }

    #[test]
    fn non_connectors_are_catalogued() {
        for letter in NON_CONNECTORS.iter() {
            assert!(ALPHABET.contains(letter), "{:?}", letter);
        }
    }

    // ALEF MAKSURA is dual-joining in Unicode but is kept as a non-connector here.
    #[test]
    fn non_connectors_do_not_join_forwards() {
        for letter in NON_CONNECTORS.iter().filter(|l| **l != ALEF_MAKSURA) {
            let joining_type = get_joining_type(letter.base());
            assert!(
                joining_type == JoiningType::RightJoining
                    || joining_type == JoiningType::NonJoining,
                "{:?} has joining type {:?}",
                letter,
                joining_type
            );
        }
    }

    #[test]
    fn teh_marbuta_is_right_joining() {
        assert!(is_non_connector(&TEH_MARBUTA));
        assert_eq!(
            get_joining_type(TEH_MARBUTA.base()),
            JoiningType::RightJoining
        );
    }

    #[test]
    fn non_connectors_reuse_base_for_initial() {
        for letter in NON_CONNECTORS.iter() {
            assert_eq!(letter.form(Form::Initial), letter.base(), "{:?}", letter);
        }
    }

    #[test]
    fn diacritics_are_not_letters() {
        for mark in DIACRITICS.iter().chain(Some(&SUPERSCRIPT_ALEF)) {
            assert!(!ALPHABET.iter().any(|letter| letter.contains(*mark)));
        }
    }
}
