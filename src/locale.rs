//! Locale code normalization for hreflang attributes.
//!
//! Platform configuration stores locales in underscore form (`en_US`,
//! `pt_BR`); the `hreflang` attribute wants BCP 47 subtags joined by hyphens,
//! conventionally lowercase. One function covers the whole mapping:
//!
//! - `"en_US"` → `"en-us"`
//! - `"pt_BR"` → `"pt-br"`
//! - `"de"` → `"de"` (no region part, passes through)
//! - `"fr-FR"` → `"fr-fr"` (already hyphenated, only the casing changes)

/// Normalize a configured locale code for emission in an `hreflang`
/// attribute: underscores become hyphens, everything is lowercased.
pub fn normalize(code: &str) -> String {
    code.replace('_', "-").to_ascii_lowercase()
}
