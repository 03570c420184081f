// src/pipeline.rs
use crate::stage::{Stage, StageError};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// An ordered list of stages run one after another.
///
/// Stages whose `needs_apply` returns `false` are skipped, so a pipeline over
/// already-normalized text hands the input back without allocating.
#[derive(Default, Clone)]
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl Pipeline {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    /// Runs every stage, stopping at the first error.
    pub fn process<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current)? {
                continue;
            }
            current = stage.apply(current)?;
        }

        Ok(current)
    }

    /// Runs every stage, but never fails.
    ///
    /// When a stage errors, processing stops and the text as it stood before
    /// that stage is returned together with the error. A failure in the first
    /// stage therefore yields the input unchanged.
    pub fn process_partial<'a>(&self, text: Cow<'a, str>) -> (Cow<'a, str>, Option<StageError>) {
        let mut current = text;

        for stage in &self.stages {
            let step = stage.needs_apply(&current).and_then(|needed| {
                if needed {
                    stage.apply(Cow::Borrowed(current.as_ref())).map(Some)
                } else {
                    Ok(None)
                }
            });
            match step {
                Ok(None) => {}
                Ok(Some(Cow::Borrowed(s))) if s == current.as_ref() => {}
                Ok(Some(next)) => {
                    let next = next.into_owned();
                    current = Cow::Owned(next);
                }
                Err(e) => return (current, Some(e)),
            }
        }

        (current, None)
    }
}
