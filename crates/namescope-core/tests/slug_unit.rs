// crates/namescope-core/tests/slug_unit.rs
// ============================================================================
// Module: Slug Normalization Unit Tests
// Description: Case folding, transliteration, separator collapsing, joining.
// Purpose: Pin the normalization rule every name segment passes through.
// ============================================================================

//! Unit tests for slug normalization and segment joining.

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

#[test]
fn slugify_lowercases_and_hyphenates_whitespace() {
    assert_eq!(slugify("Foo Bar"), "foo-bar");
    assert_eq!(slugify("Logs Bucket"), "logs-bucket");
}

#[test]
fn slugify_transliterates_accented_latin_characters() {
    assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
    assert_eq!(slugify("Äpfel über Straße"), "apfel-uber-strasse");
    assert_eq!(slugify("Œuvre"), "oeuvre");
}

#[test]
fn slugify_collapses_punctuation_runs_into_single_hyphens() {
    assert_eq!(slugify("hello,   world!!"), "hello-world");
    assert_eq!(slugify("a_b./c"), "a-b-c");
}

#[test]
fn slugify_strips_leading_and_trailing_separators() {
    assert_eq!(slugify("--Foo Bar--"), "foo-bar");
    assert_eq!(slugify("  padded  "), "padded");
}

#[test]
fn slugify_is_idempotent_on_normalized_input() {
    let normalized = slugify("Foo Bar Baz");
    assert_eq!(slugify(&normalized), normalized);
    assert_eq!(slugify("already-normalized-slug"), "already-normalized-slug");
}

#[test]
fn slugify_drops_untransliterable_input_entirely() {
    assert_eq!(slugify("!!!"), "");
    assert_eq!(slugify("   "), "");
    assert_eq!(slugify(""), "");
}

#[test]
fn stringify_drops_absent_segments_without_error() {
    assert_eq!(stringify(&[None, Some("Foo Bar"), None], "-"), "foo-bar");
    assert_eq!(stringify(&[None, None], "-"), "");
}

#[test]
fn stringify_omits_segments_that_normalize_to_nothing() {
    assert_eq!(stringify(&[Some("  "), Some("Foo"), Some("!!")], "-"), "foo");
}

#[test]
fn stringify_replaces_every_hyphen_with_the_delimiter() {
    // The replacement applies at every word boundary, not only between
    // logical segments: a multi-character delimiter fragments words too.
    assert_eq!(stringify(&[Some("Foo Bar")], "_"), "foo_bar");
    assert_eq!(stringify(&[Some("Foo Bar")], "__"), "foo__bar");
    assert_eq!(
        stringify(&[Some("Foo Bar"), Some("Baz")], "__"),
        "foo__bar__baz"
    );
}

#[test]
fn stringify_joins_segments_with_the_default_delimiter() {
    assert_eq!(
        stringify(&[Some("Foo Bar"), Some("My Type"), Some("QA")], "-"),
        "foo-bar-my-type-qa"
    );
}
