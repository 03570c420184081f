//! stage/strip_accents.rs
//!
//! Explicit Polish letter substitution: the nine accented lower-case letters
//! are replaced by their ASCII base letter.
//!
//! Canonical decomposition alone is not enough: `ł` has no decomposition,
//! and composed/decomposed forms of the other letters are not guaranteed to
//! line up across normalizer implementations. The table is therefore keyed on
//! the precomposed letters and expects NFC input.

use crate::stage::{Stage, StageError};
use phf::{Map, phf_map};
use std::borrow::Cow;

/// Polish accented letter → ASCII base letter.
pub static POLISH_ACCENTS: Map<char, char> = phf_map! {
    'ą' => 'a',
    'ć' => 'c',
    'ę' => 'e',
    'ł' => 'l',
    'ń' => 'n',
    'ó' => 'o',
    'ś' => 's',
    'ż' => 'z',
    'ź' => 'z',
};

/// Replaces each Polish accented letter with its ASCII base letter.
///
/// Only lower-case letters are in the table; upper-case input is expected to
/// be lower-cased by an earlier stage and otherwise passes through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripAccents;

impl StripAccents {
    #[inline(always)]
    pub fn map_char(c: char) -> char {
        if c.is_ascii() {
            return c;
        }
        POLISH_ACCENTS.get(&c).copied().unwrap_or(c)
    }
}

impl Stage for StripAccents {
    fn name(&self) -> &'static str {
        "strip_accents"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(false);
        }
        Ok(text.chars().any(|c| POLISH_ACCENTS.contains_key(&c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text)? {
            return Ok(text);
        }
        // Every replacement shrinks a 2-byte letter to 1 byte
        let mut out = String::with_capacity(text.len());
        out.extend(text.chars().map(Self::map_char));
        Ok(Cow::Owned(out))
    }
}
