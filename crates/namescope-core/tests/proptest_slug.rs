// crates/namescope-core/tests/proptest_slug.rs
// ============================================================================
// Module: Slug Property-Based Tests
// Description: Alphabet closure, idempotence, and determinism invariants.
// Purpose: Detect normalization violations across wide input ranges.
// ============================================================================

//! Property-based tests for slug normalization invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use namescope_core::slugify;
use namescope_core::stringify;
use proptest::prelude::*;

/// Strategy producing segment lists with a mix of absent and present parts.
fn parts_strategy() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of(".{0,24}"), 0 .. 6)
}

fn as_borrowed(parts: &[Option<String>]) -> Vec<Option<&str>> {
    parts.iter().map(|part| part.as_deref()).collect()
}

proptest! {
    #[test]
    fn slugify_output_stays_inside_the_slug_alphabet(input in ".{0,64}") {
        let slug = slugify(&input);
        prop_assert!(
            slug.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'),
            "unexpected character in `{slug}`"
        );
    }

    #[test]
    fn slugify_never_produces_boundary_or_doubled_hyphens(input in ".{0,64}") {
        let slug = slugify(&input);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn slugify_is_idempotent(input in ".{0,64}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn stringify_with_default_delimiter_stays_inside_the_slug_alphabet(
        parts in parts_strategy()
    ) {
        let joined = stringify(&as_borrowed(&parts), "-");
        prop_assert!(
            joined.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        );
    }

    #[test]
    fn stringify_is_deterministic(parts in parts_strategy()) {
        let borrowed = as_borrowed(&parts);
        prop_assert_eq!(stringify(&borrowed, "_"), stringify(&borrowed, "_"));
    }

    #[test]
    fn stringify_of_all_absent_parts_is_empty(count in 0_usize .. 6) {
        let parts: Vec<Option<&str>> = vec![None; count];
        prop_assert_eq!(stringify(&parts, "-"), "");
    }

    #[test]
    fn custom_delimiter_output_contains_no_stray_hyphens(input in ".{0,32}") {
        // Every hyphen the normalization produced is replaced, including the
        // hyphens inside multi-word segments.
        let joined = stringify(&[Some(input.as_str())], "_");
        prop_assert!(!joined.contains('-'));
    }
}
