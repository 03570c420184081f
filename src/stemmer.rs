use crate::{
    rules::{POLISH_RULES, RuleError, StemRule, validate_rules},
    unaccent::unaccent,
    unicode::to_lowercase_simple,
};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StemmerError {
    #[error("invalid rule table: {0}")]
    Rule(#[from] RuleError),
}

/// Stems a single word with the Polish rule table.
///
/// The word is lower-cased (and accent-folded when `unaccented_mode` is set).
/// If it then equals any `unstemmable` entry normalized the same way, it is
/// returned as is. Otherwise every rule is tried once, in table order.
///
/// Never fails: the worst case is the normalized word, unchanged.
///
/// ```
/// use polstem::stem_word;
///
/// let none: &[&str] = &[];
/// assert_eq!(stem_word("rozwoju", false, none), "rozwoj");
/// assert_eq!(stem_word("możliwości", true, none), "mozliwosc");
/// assert_eq!(stem_word("Kariera", false, &["kariera"]), "kariera");
///
/// let owned = vec![String::from("Rozwoju")];
/// assert_eq!(stem_word("rozwoju", false, &owned), "rozwoju");
/// ```
pub fn stem_word<S: AsRef<str>>(word: &str, unaccented_mode: bool, unstemmable: &[S]) -> String {
    let word = normalize_word(word, unaccented_mode);

    if unstemmable
        .iter()
        .any(|u| normalize_word(u.as_ref(), unaccented_mode) == word)
    {
        debug!(word = %word, "word is unstemmable");
        return word;
    }

    apply_rules(word, POLISH_RULES, unaccented_mode)
}

/// Lower-cases `word`, then accent-folds it in unaccented mode.
pub fn normalize_word(word: &str, unaccented_mode: bool) -> String {
    let lower = to_lowercase_simple(word);
    if unaccented_mode {
        unaccent(&lower)
    } else {
        lower
    }
}

/// Runs every rule once, in order, against the progressively trimmed word.
fn apply_rules(mut word: String, rules: &[StemRule], unaccented_mode: bool) -> String {
    let mut len = word.chars().count();

    for (idx, rule) in rules.iter().enumerate() {
        if len < rule.min_word_len {
            continue;
        }
        if !rule.matches(&word, unaccented_mode) {
            continue;
        }

        let keep = len.saturating_sub(rule.right_shift);
        word.truncate(byte_offset(&word, keep));
        let start = byte_offset(&word, rule.left_shift);
        word.replace_range(..start, "");
        len = keep.saturating_sub(rule.left_shift);

        trace!(rule = idx, stem = %word, "suffix rule applied");
    }

    word
}

/// Byte offset of the `n`-th character, or the string length past the end.
#[inline]
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// A reusable stemmer.
///
/// Behaves exactly like [`stem_word`] with the same mode and exclusion list,
/// but normalizes the exclusion list once at build time.
#[derive(Debug, Clone)]
pub struct Stemmer {
    unaccented: bool,
    rules: &'static [StemRule],
    unstemmable: HashSet<String>,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self {
            unaccented: false,
            rules: POLISH_RULES,
            unstemmable: HashSet::new(),
        }
    }
}

impl Stemmer {
    pub fn builder() -> StemmerBuilder {
        StemmerBuilder::default()
    }

    pub fn stem(&self, word: &str) -> String {
        let word = normalize_word(word, self.unaccented);
        if self.unstemmable.contains(&word) {
            debug!(word = %word, "word is unstemmable");
            return word;
        }
        apply_rules(word, self.rules, self.unaccented)
    }

    pub fn is_unaccented(&self) -> bool {
        self.unaccented
    }

    pub fn rules(&self) -> &'static [StemRule] {
        self.rules
    }

    /// True if `word` bypasses the rules.
    pub fn is_unstemmable(&self, word: &str) -> bool {
        self.unstemmable
            .contains(&normalize_word(word, self.unaccented))
    }
}

pub struct StemmerBuilder {
    unaccented: bool,
    rules: &'static [StemRule],
    unstemmable: Vec<String>,
}

impl Default for StemmerBuilder {
    fn default() -> Self {
        Self {
            unaccented: false,
            rules: POLISH_RULES,
            unstemmable: Vec::new(),
        }
    }
}

impl StemmerBuilder {
    pub fn unaccented(mut self, unaccented: bool) -> Self {
        self.unaccented = unaccented;
        self
    }

    /// Adds words that must never be stemmed. May be called repeatedly.
    pub fn unstemmable<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unstemmable.extend(words.into_iter().map(Into::into));
        self
    }

    /// Replaces the Polish rule table.
    pub fn rules(mut self, rules: &'static [StemRule]) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(self) -> Result<Stemmer, StemmerError> {
        validate_rules(self.rules)?;
        let unstemmable = self
            .unstemmable
            .iter()
            .map(|w| normalize_word(w, self.unaccented))
            .collect();
        Ok(Stemmer {
            unaccented: self.unaccented,
            rules: self.rules,
            unstemmable,
        })
    }
}
