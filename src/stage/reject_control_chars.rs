use crate::{
    stage::{Stage, StageError},
    unicode::is_control,
};
use std::borrow::Cow;

/// Rejects text containing Unicode control characters (General Category `Cc`).
///
/// Identifier-style canonicalization treats C0/C1 controls as disallowed
/// code points. This stage never rewrites text: it either passes the input
/// through untouched or fails with [`StageError::Validation`], leaving it to
/// the caller to decide what a rejected word turns into.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectControlChars;

impl Stage for RejectControlChars {
    fn name(&self) -> &'static str {
        "reject_control_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(is_control))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        if let Some((pos, c)) = text.char_indices().find(|&(_, c)| is_control(c)) {
            return Err(StageError::Validation(
                self.name(),
                format!("disallowed control character U+{:04X} at byte {pos}", c as u32),
            ));
        }
        Ok(text)
    }
}
