//! Line canonicalization for matching.

/// Normalize a raw statement line for matching: uppercase, collapse every
/// whitespace run to a single space, trim. Empty input yields an empty
/// string, never an absent value.
///
/// Pure and idempotent; all matching happens on normalized text, so the
/// search is case- and whitespace-insensitive by construction.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
