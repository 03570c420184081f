use crate::stage::{Stage, StageError};
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{
    ComposingNormalizer, ComposingNormalizerBorrowed, DecomposingNormalizer,
    DecomposingNormalizerBorrowed,
};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfd);

/// Unicode Normalization Form C (Canonical Composition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfcStage;

/// Unicode Normalization Form D (Canonical Decomposition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfdStage;

pub const NFC: NfcStage = NfcStage;
pub const NFD: NfdStage = NfdStage;

macro_rules! impl_normalization_stage {
    ($stage:ty, $name:literal, $norm:ident) => {
        impl Stage for $stage {
            fn name(&self) -> &'static str {
                $name
            }

            #[inline(always)]
            fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
                Ok(!$norm.is_normalized(text))
            }

            #[inline(always)]
            fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
                if $norm.is_normalized(&text) {
                    return Ok(text);
                }
                Ok(Cow::Owned($norm.normalize(&text).into_owned()))
            }
        }
    };
}

impl_normalization_stage!(NfcStage, "nfc", ICU4X_NFC);
impl_normalization_stage!(NfdStage, "nfd", ICU4X_NFD);
