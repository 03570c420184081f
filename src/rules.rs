//! The suffix rule table.
//!
//! Rules are plain data: a length gate, a left/right trim and the suffixes
//! that trigger the trim. The stemmer walks the table once, top to bottom,
//! and every rule whose suffix matches the word *as it currently stands*
//! trims it. Order is therefore part of the rule set; classes go from the
//! most specific endings to the most general ones.

use thiserror::Error;

/// One suffix-stripping rule.
///
/// All lengths and shifts are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemRule {
    /// The word must be at least this many characters long.
    pub min_word_len: usize,
    /// Characters dropped from the front on a match.
    pub left_shift: usize,
    /// Characters dropped from the back on a match.
    pub right_shift: usize,
    pub suffixes_accented: &'static [&'static str],
    /// Used instead of `suffixes_accented` in unaccented mode. Empty when the
    /// accented suffixes are already ASCII.
    pub suffixes_unaccented: &'static [&'static str],
}

impl StemRule {
    /// Suffix set for the given mode.
    #[inline(always)]
    pub fn suffixes(&self, unaccented: bool) -> &'static [&'static str] {
        if unaccented && !self.suffixes_unaccented.is_empty() {
            self.suffixes_unaccented
        } else {
            self.suffixes_accented
        }
    }

    /// True if `word` ends with any suffix of the selected set.
    #[inline]
    pub fn matches(&self, word: &str, unaccented: bool) -> bool {
        self.suffixes(unaccented).iter().any(|s| word.ends_with(s))
    }
}

macro_rules! rule {
    ($min:literal, $left:literal, $right:literal, [$($acc:literal),* $(,)?]) => {
        rule!($min, $left, $right, [$($acc),*], [])
    };
    ($min:literal, $left:literal, $right:literal, [$($acc:literal),* $(,)?], [$($un:literal),* $(,)?]) => {
        StemRule {
            min_word_len: $min,
            left_shift: $left,
            right_shift: $right,
            suffixes_accented: &[$($acc),*],
            suffixes_unaccented: &[$($un),*],
        }
    };
}

/// The Polish rule table, in evaluation order.
pub static POLISH_RULES: &[StemRule] = &[
    // ── nouns ──────────────────────────────────────────────────────────
    rule!(8, 0, 4, ["zacja", "zacją", "zacji"]),
    rule!(7, 0, 4, ["acja", "acji", "acją", "tach", "anie", "enie", "eniu", "aniu"]),
    rule!(7, 0, 2, ["tyka"]),
    rule!(6, 0, 3, ["ach", "ami", "nia", "niu", "cia", "ciu"]),
    rule!(6, 0, 2, ["cji", "cja", "cją"]),
    rule!(6, 0, 2, ["ce", "ta"]),
    // ── diminutives ────────────────────────────────────────────────────
    rule!(7, 0, 5, ["eczek", "iczek", "iszek", "aszek", "uszek"]),
    rule!(7, 0, 2, ["enek", "ejek", "erek"]),
    rule!(5, 0, 2, ["ek", "ak"]),
    // ── adjectives ─────────────────────────────────────────────────────
    rule!(8, 3, 3, ["naj", "sze", "szy"]),
    rule!(8, 3, 5, ["naj", "szych"]),
    rule!(7, 0, 4, ["czny"]),
    rule!(6, 0, 3, ["owy", "owa", "owe", "ych", "ego"]),
    rule!(6, 0, 2, ["ej"]),
    // ── verbs ──────────────────────────────────────────────────────────
    rule!(6, 0, 3, ["bym"]),
    rule!(
        6, 0, 3,
        ["esz", "asz", "cie", "eść", "aść", "łem", "amy", "emy"],
        ["esz", "asz", "cie", "esc", "asc", "lem", "amy", "emy"]
    ),
    rule!(
        4, 0, 2,
        ["esz", "asz", "eść", "aść", "eć", "ać"],
        ["esz", "asz", "esc", "asc", "ec", "ac"]
    ),
    rule!(4, 0, 1, ["aj"]),
    rule!(
        4, 0, 2,
        ["ać", "em", "am", "ał", "ił", "ić", "ąc"],
        ["ac", "em", "am", "al", "il", "ic", "ac"]
    ),
    // ── adverbs ────────────────────────────────────────────────────────
    rule!(5, 0, 2, ["nie", "wie"]),
    rule!(5, 0, 2, ["rze"]),
    // ── plurals ────────────────────────────────────────────────────────
    rule!(5, 0, 2, ["ów", "om"], ["ow", "om"]),
    rule!(5, 0, 3, ["ami"]),
    // ── general endings ────────────────────────────────────────────────
    rule!(5, 0, 2, ["ia", "ie"]),
    rule!(5, 0, 1, ["u", "ą", "i", "a", "ę", "y", "ę", "ł"], ["u", "a", "i", "e", "y", "l"]),
];

/// A rule that cannot be applied safely.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule #{rule} has no accented suffixes")]
    EmptySuffixSet { rule: usize },

    #[error("rule #{rule}: suffix `{suffix}` is longer than min_word_len {min_word_len}")]
    SuffixTooLong {
        rule: usize,
        suffix: &'static str,
        min_word_len: usize,
    },

    #[error(
        "rule #{rule}: left_shift {left_shift} + right_shift {right_shift} exceeds min_word_len {min_word_len}"
    )]
    ShiftExceedsMinLen {
        rule: usize,
        left_shift: usize,
        right_shift: usize,
        min_word_len: usize,
    },
}

/// Checks the invariants that make a table safe to run.
///
/// A rule may trim a word down to nothing (`left_shift + right_shift ==
/// min_word_len` is allowed); it may never slice past either end.
pub fn validate_rules(rules: &[StemRule]) -> Result<(), RuleError> {
    for (i, r) in rules.iter().enumerate() {
        if r.suffixes_accented.is_empty() {
            return Err(RuleError::EmptySuffixSet { rule: i });
        }
        let too_long = r
            .suffixes_accented
            .iter()
            .chain(r.suffixes_unaccented)
            .find(|s| s.chars().count() > r.min_word_len);
        if let Some(suffix) = too_long {
            return Err(RuleError::SuffixTooLong {
                rule: i,
                suffix: *suffix,
                min_word_len: r.min_word_len,
            });
        }
        if r.left_shift + r.right_shift > r.min_word_len {
            return Err(RuleError::ShiftExceedsMinLen {
                rule: i,
                left_shift: r.left_shift,
                right_shift: r.right_shift,
                min_word_len: r.min_word_len,
            });
        }
    }
    Ok(())
}
