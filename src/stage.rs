//! Core normalization stage abstraction.
//!
//! Every transform that feeds the stemmer is a [`Stage`]: a cheap
//! `needs_apply` pre-check plus an allocation-aware `apply` working on
//! `Cow<str>`. A stage that has nothing to do must hand the input back
//! untouched so that pipelines stay zero-copy on already-normalized text.
//!
//! Stages are zero-sized and stateless, so a single instance can be shared
//! across threads without synchronization.

pub mod lower_case;
pub mod normalization;
pub mod reject_control_chars;
pub mod strip_accents;
pub mod unify_width;

use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StageError {
    #[error("Normalization validation failed at stage `{0}`: {1}")]
    Validation(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError>;

    /// Allocation-aware transformation.  Must always be correct, even when
    /// called without consulting `needs_apply` first.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError>;
}
