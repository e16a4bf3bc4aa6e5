// crates/lexicard-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides the message catalog and translation for the CLI.
// Purpose: Centralize user-facing strings for future localization support.
// Dependencies: lexicard-catalog, standard library collections.
// ============================================================================

//! ## Overview
//! The Lexicard CLI stores its own user-facing strings in a small static
//! catalog to enforce consistent messaging and to prepare for future
//! locales. All runtime output should be routed through the
//! [`t!`](crate::t) macro. Placeholder substitution reuses the library's
//! [`format_message`] so the tool and the catalogs it maintains share one
//! formatting behavior.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself to avoid panics.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

pub use lexicard_catalog::MessageArg;
use lexicard_catalog::format_message;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static catalog entries loaded into the localized message bundle.
const CATALOG_ITEMS: &[(&str, &str)] = &[
    ("main.version", "lexicard {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("catalog.load_failed", "Failed to load catalog at {path}: {error}"),
    ("validate.ok", "Catalog valid ({count} entries)."),
    ("lookup.missing", "Key `{key}` not found in {path}."),
    ("list.entry", "{key} = {value}"),
    ("list.json_failed", "Failed to render JSON output: {error}"),
    ("normalize.ok", "Normalized catalog written to {path}"),
    ("normalize.write_failed", "Failed to write normalized output to {path}: {error}"),
    ("parity.ok", "Catalogs are in parity ({count} keys)."),
    ("parity.missing.header", "Keys missing from candidate:"),
    ("parity.extra.header", "Keys not present in baseline:"),
    ("parity.entry", "- {key}"),
    (
        "parity.failed",
        "Catalog parity check failed: {missing} missing, {extra} extra.",
    ),
    ("locales.header", "Available locales:"),
    ("locales.entry", "- {locale}"),
    ("locales.none", "No catalog files found."),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
];

/// Returns the static English catalog used by the CLI.
fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    CATALOG.get_or_init(|| CATALOG_ITEMS.iter().copied().collect())
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the English fallback catalog while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: &[MessageArg]) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    format_message(template, args)
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = [
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, &args)
    }};
}
