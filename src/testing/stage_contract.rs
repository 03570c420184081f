use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["Kariera na Językach", " Żółć ", "TEST", "możliwości", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    ///
    /// Default: common lowercase ASCII patterns that every stage leaves alone.
    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "rozwoj",  // Already-folded Polish stem
            "test123", // Alphanumeric
            "abc def", // Simple phrase with space
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// ### Contracts
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
/// 6. (Implicit) `Send + Sync + 'static` → required by trait bounds
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        // First pass – respect needs_apply
        if stage.needs_apply(&text).unwrap() {
            text = stage.apply(text).unwrap();
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass – must never allocate again
        let old_ptr = text.as_ref() as *const str;
        if stage.needs_apply(&text).unwrap() {
            text = stage.apply(text).unwrap();
        }
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second pass (stage: {}, input: `{input}`)",
            stage.name()
        );
    }

    // Pass-through samples must always be zero-copy and unchanged
    for &pass_through in S::should_pass_through() {
        let mut text = Cow::Borrowed(pass_through);
        let original_ptr = pass_through as *const str;

        if stage.needs_apply(&text).unwrap() {
            text = stage.apply(text).unwrap();
        }

        assert_eq!(text.as_ref(), pass_through);
        assert_eq!(
            original_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on pass-through sample (stage: {}, input: `{pass_through}`)",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let mut text = Cow::Borrowed(input);
        if stage.needs_apply(&text).unwrap() {
            text = stage.apply(text).unwrap();
        }
        assert_eq!(text.as_ref(), expected, "stage `{}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input)).unwrap();
        let twice = stage.apply(once.clone()).unwrap();
        assert_eq!(
            once,
            twice,
            "apply() not idempotent for `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    for &sample in S::samples() {
        check_accuracy(stage, sample);
    }
    for &clean in &["", "hello", "world123", " !@#"] {
        check_accuracy(stage, clean);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input).expect("needs_apply errored");
    let output = stage
        .apply(Cow::Owned(input.to_owned()))
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: &S) {
    let empty: &str = "";
    let result_empty = if stage.needs_apply(empty).unwrap() {
        stage.apply(Cow::Borrowed(empty)).unwrap()
    } else {
        Cow::Borrowed(empty)
    };
    assert_eq!(result_empty.as_ref(), "");

    let ascii = "hello world 123 !@#";
    let result_ascii = stage.apply(Cow::Borrowed(ascii)).unwrap();
    assert_eq!(result_ascii.as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let _ = stage.apply(Cow::Borrowed(
        "Zażółć gęślą jaźń 世界 русский Türkçe العربية ＦＵＬＬ",
    ));
}
