use crate::{
    stage::{Stage, StageError},
    unicode::{needs_lowercase, to_lowercase_simple},
};
use std::borrow::Cow;

/// Locale-neutral Unicode lower-casing.
///
/// Maps every character with the simple Unicode mapping, never a
/// language-tailored one. The character count never changes, so rule length
/// gates see the same word length before and after lower-casing.
///
/// Zero-copy when the text is already lower-case.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(text.bytes().any(|b| b.is_ascii_uppercase()));
        }
        Ok(text.chars().any(needs_lowercase))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text)? {
            return Ok(text);
        }
        Ok(Cow::Owned(to_lowercase_simple(&text)))
    }
}
