pub mod pipeline;
pub mod rules;
pub mod stage;
pub mod stemmer;
pub mod unaccent;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use pipeline::Pipeline;
pub use rules::{POLISH_RULES, RuleError, StemRule, validate_rules};
pub use stage::lower_case::LowerCase;
pub use stage::normalization::{NFC, NFD};
pub use stage::reject_control_chars::RejectControlChars;
pub use stage::strip_accents::StripAccents;
pub use stage::unify_width::UnifyWidth;
pub use stage::{Stage, StageError};
pub use stemmer::{Stemmer, StemmerBuilder, StemmerError, normalize_word, stem_word};
pub use unaccent::{unaccent, unaccent_cow};
