// crates/namescope-core/src/core/slug.rs
// ============================================================================
// Module: Namescope Slug Normalization
// Description: Deterministic slug transform and segment joining.
// Purpose: Provide the single normalization rule every name segment passes through.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Every segment of a scoped identifier passes through [`slugify`] before
//! joining: case-fold to lower case, transliterate common accented Latin
//! characters to ASCII, collapse runs of whitespace and punctuation into
//! single hyphens, and strip leading and trailing hyphens. [`stringify`]
//! applies the shared join rule on top: absent segments are dropped without
//! error, surviving segments are trimmed, slugified, joined with literal
//! hyphens, and finally every hyphen is replaced with the caller-supplied
//! delimiter. The final replacement intentionally hits every hyphen produced
//! by normalization, not only segment boundaries, so a multi-character
//! delimiter fragments words exactly like segment spacing.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default delimiter inserted between slug words and segments.
pub const DEFAULT_DELIMITER: &str = "-";

// ============================================================================
// SECTION: Transliteration
// ============================================================================

/// Returns the ASCII fold for a common accented Latin character, if any.
///
/// Characters outside this table and outside ASCII alphanumerics are treated
/// as separators by [`slugify`].
const fn fold_latin(ch: char) -> Option<&'static str> {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => Some("a"),
        'æ' | 'Æ' => Some("ae"),
        'ç' | 'Ç' => Some("c"),
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => Some("e"),
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => Some("i"),
        'ñ' | 'Ñ' => Some("n"),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => Some("o"),
        'œ' | 'Œ' => Some("oe"),
        'ß' => Some("ss"),
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => Some("u"),
        'ý' | 'ÿ' | 'Ý' => Some("y"),
        'š' | 'Š' => Some("s"),
        'ž' | 'Ž' => Some("z"),
        'đ' | 'Đ' => Some("d"),
        'ł' | 'Ł' => Some("l"),
        _ => None,
    }
}

// ============================================================================
// SECTION: Slug Transform
// ============================================================================

/// Normalizes a string into a lowercase hyphenated slug.
///
/// # Invariants
/// - Output contains only `[a-z0-9]` and single interior hyphens.
/// - Output never starts or ends with a hyphen.
/// - Idempotent: slugifying an already-normalized slug returns it unchanged.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if let Some(folded) = fold_latin(ch) {
            out.push_str(folded);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

// ============================================================================
// SECTION: Segment Joining
// ============================================================================

/// Joins candidate name segments into a single scoped identifier.
///
/// Absent segments are dropped without error, surviving segments are trimmed
/// and slugified, segments that normalize to nothing are omitted, and the
/// joined result has every hyphen replaced with `delimiter`.
///
/// # Invariants
/// - Output contains no characters outside `[a-z0-9]` and `delimiter`.
/// - An all-absent segment list yields the empty string.
#[must_use]
pub fn stringify(parts: &[Option<&str>], delimiter: &str) -> String {
    let joined = parts
        .iter()
        .filter_map(|part| *part)
        .map(str::trim)
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .collect::<Vec<_>>()
        .join(DEFAULT_DELIMITER);
    if delimiter == DEFAULT_DELIMITER {
        joined
    } else {
        joined.replace(DEFAULT_DELIMITER, delimiter)
    }
}
