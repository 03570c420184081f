//! Accent folding for Polish text.
//!
//! The fold runs a fixed pipeline:
//!
//! 1. reject control characters (identifier-style canonicalization disallows them)
//! 2. NFD
//! 3. full-width → half-width, lower-case, NFC (username-style case mapping)
//! 4. Polish letter substitution table
//! 5. NFC
//!
//! Step 3 recomposes the text, so step 4 sees precomposed letters. Step 5 is a
//! no-op on Polish input and only matters for stray combining marks.

use crate::{
    pipeline::Pipeline,
    stage::{
        lower_case::LowerCase,
        normalization::{NFC, NFD},
        reject_control_chars::RejectControlChars,
        strip_accents::StripAccents,
        unify_width::UnifyWidth,
    },
};
use std::{borrow::Cow, sync::LazyLock};
use tracing::warn;

static UNACCENT: LazyLock<Pipeline> = LazyLock::new(|| {
    Pipeline::new()
        .push(RejectControlChars)
        .push(NFD)
        .push(UnifyWidth)
        .push(LowerCase)
        .push(NFC)
        .push(StripAccents)
        .push(NFC)
});

/// The pipeline behind [`unaccent`].
pub fn unaccent_pipeline() -> &'static Pipeline {
    &UNACCENT
}

/// Folds Polish diacritics to ASCII and canonicalizes case and width.
///
/// Never fails. If a stage rejects the input, the text as transformed so far
/// is returned; a word with a control character is returned unchanged.
///
/// ```
/// assert_eq!(polstem::unaccent("Zażółć gęślą jaźń"), "zazolc gesla jazn");
/// ```
pub fn unaccent(s: &str) -> String {
    unaccent_cow(Cow::Borrowed(s)).into_owned()
}

/// Zero-copy variant of [`unaccent`].
pub fn unaccent_cow(s: Cow<'_, str>) -> Cow<'_, str> {
    let (out, err) = UNACCENT.process_partial(s);
    if let Some(err) = err {
        warn!(error = %err, "accent folding stopped early, returning partial result");
    }
    out
}
