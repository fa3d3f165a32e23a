//! Name normalization utilities for author matching.
//!
//! Author strings in the publication data carry role markers (`*` for the
//! corresponding author, `^` and `+` for other annotations) and may spell the
//! same person with or without accents. These helpers reduce both forms to
//! something that can be compared.
//!
//! Key transformations:
//! - Strip role markers
//! - Remove accents/diacritics (é → e, ü → u, etc.)
//! - Convert to lowercase
//! - Normalize whitespace

use unicode_normalization::UnicodeNormalization;

/// Marker for the corresponding author.
pub const CORRESPONDING_MARKER: char = '*';

/// Every marker character that may be embedded in an author entry.
pub const AUTHOR_MARKERS: [char; 3] = ['^', '*', '+'];

/// Normalize a name for matching purposes.
///
/// Transformations applied:
/// 1. Replace special characters that don't decompose (ł, ø, æ, etc.)
/// 2. Unicode NFD normalization (decompose characters)
/// 3. Remove combining diacritical marks (accents)
/// 4. Convert to lowercase
/// 5. Normalize whitespace (collapse multiple spaces, trim)
///
/// # Examples
///
/// ```
/// use cvgen::utils::normalize_name;
///
/// assert_eq!(normalize_name("José García"), "jose garcia");
/// assert_eq!(normalize_name("  Ho   Won Lee "), "ho won lee");
/// ```
pub fn normalize_name(name: &str) -> String {
    let replaced = replace_special_chars(name);

    replaced
        // NFD decomposition: splits characters into base + combining marks
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Replace special characters that don't decompose via Unicode NFD.
fn replace_special_chars(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'Ł' => 'L',
            'ł' => 'l',
            'Ø' => 'O',
            'ø' => 'o',
            'Æ' => 'A',
            'æ' => 'a',
            'ß' => 's',
            'Đ' => 'D',
            'đ' => 'd',
            'İ' => 'I',
            'ı' => 'i',
            _ => c,
        })
        .collect()
}

/// Check if a character is a combining diacritical mark.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Remove every author marker character from an author entry.
///
/// # Examples
///
/// ```
/// use cvgen::utils::strip_markers;
///
/// assert_eq!(strip_markers("Ho Won Lee*"), "Ho Won Lee");
/// assert_eq!(strip_markers("^Jane Doe+"), "Jane Doe");
/// ```
pub fn strip_markers(author: &str) -> String {
    author.chars().filter(|c| !AUTHOR_MARKERS.contains(c)).collect()
}

/// Whether the raw author entry carries the corresponding-author marker.
pub fn is_corresponding(author: &str) -> bool {
    author.contains(CORRESPONDING_MARKER)
}

/// Case- and accent-insensitive substring test used to find the CV subject
/// in an author entry.
///
/// An empty needle never matches.
pub fn name_contains(haystack: &str, needle: &str) -> bool {
    let needle = normalize_name(needle);
    if needle.is_empty() {
        return false;
    }
    normalize_name(haystack).contains(&needle)
}
