use crate::{
    stage::{Stage, StageError},
    unicode::{fullwidth_to_halfwidth, is_fullwidth},
};
use std::borrow::Cow;

/// Converts full-width (wide) ASCII forms to half-width (narrow) equivalents.
///
/// - `Ａ−Ｚａ−ｚ` → `A−Za−z`
/// - `０−９` → `0−9`
/// - Full-width punctuation → ASCII equivalents
/// - `　` (U+3000) → ` ` (U+0020)
///
/// Part of the width/case canonicalization that runs before accent folding,
/// so that `ＫＯＴ` and `kot` reach the stemmer as the same word.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnifyWidth;

impl Stage for UnifyWidth {
    fn name(&self) -> &'static str {
        "unify_width"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(is_fullwidth))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text)? {
            return Ok(text);
        }
        // 1:1 mapping, output is never longer than input
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            out.push(fullwidth_to_halfwidth(c));
        }
        Ok(Cow::Owned(out))
    }
}
