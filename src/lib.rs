#![warn(rust_2018_idioms)]

//! Contextual shaping of Arabic text into presentation forms, plus transliteration to and from
//! the Safe Buckwalter ASCII scheme.
//!
//! ```
//! use harf::shaping::shape_text;
//! use harf::translit::{decode_text, encode_text};
//!
//! // BEH YEH TEH: initial, medial and final forms
//! assert_eq!(shape_text("بيت"), "\u{FE91}\u{FEF4}\u{FE96}");
//!
//! let safe_bw = encode_text("هذا").unwrap();
//! assert_eq!(safe_bw, "hVA");
//! assert_eq!(decode_text(&safe_bw).unwrap(), "هذا");
//! ```

pub mod alphabet;
pub mod error;
pub mod letter;
pub mod resolve;
pub mod shaping;
pub mod text;
pub mod translit;
pub mod unicode;

pub use crate::letter::{Form, Letter};
pub use crate::resolve::{is_alphabetic, resolve};
pub use crate::shaping::{shape_text, shape_text_with, ShapingFlags};
