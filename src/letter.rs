//! Letters and their positional presentation forms.

use std::fmt;

/// The positional form a letter takes in cursive text.
///
/// The variants correspond to the OpenType `isol`, `init`, `medi` and `fina` features.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Form {
    Isolated,
    Initial,
    Medial,
    Final,
}

/// One alphabetic unit of the Arabic script together with its presentation forms.
///
/// Letters that do not visually distinguish a form reuse their base code point for it, e.g.
/// `DAL` has no separate initial form.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Letter {
    name: &'static str,
    base: char,
    isol: char,
    init: char,
    medi: char,
    fina: char,
}

impl Letter {
    pub(crate) const fn new(
        name: &'static str,
        base: char,
        isol: char,
        init: char,
        medi: char,
        fina: char,
    ) -> Letter {
        Letter {
            name,
            base,
            isol,
            init,
            medi,
            fina,
        }
    }

    /// A short name for the letter, e.g. `"TEH MARBUTA"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical (unshaped) code point.
    pub const fn base(&self) -> char {
        self.base
    }

    pub const fn form(&self, form: Form) -> char {
        match form {
            Form::Isolated => self.isol,
            Form::Initial => self.init,
            Form::Medial => self.medi,
            Form::Final => self.fina,
        }
    }

    /// The base code point followed by the isolated, initial, medial and final forms.
    pub fn code_points(&self) -> [char; 5] {
        [self.base, self.isol, self.init, self.medi, self.fina]
    }

    /// Returns `true` if `ch` denotes this letter, regardless of its shape.
    pub fn contains(&self, ch: char) -> bool {
        ch == self.base || ch == self.isol || ch == self.init || ch == self.medi || ch == self.fina
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (U+{:04X})", self.name, self.base as u32)
    }
}
