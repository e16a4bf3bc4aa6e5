// crates/lexicard-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for the CLI's own message catalog.
// Purpose: Ensure CLI messaging stays consistent and substitution works.
// Dependencies: lexicard-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies placeholder substitution through the shared library formatter
//! and the key-echo fallback for unknown CLI message keys.

use crate::i18n::MessageArg;
use crate::i18n::translate;
use crate::t;

#[test]
fn translate_substitutes_placeholders() {
    let output = translate(
        "catalog.load_failed",
        &[
            MessageArg::new("path", "i18n/en.messages"),
            MessageArg::new("error", "catalog parse error at line 3"),
        ],
    );
    assert!(output.contains("i18n/en.messages"));
    assert!(output.contains("line 3"));
}

#[test]
fn translate_missing_key_falls_back_to_key() {
    let output = translate("nonexistent.key.does.not.exist", &[]);
    assert_eq!(output, "nonexistent.key.does.not.exist");
}

#[test]
fn translate_extra_argument_is_ignored() {
    let output = translate("config.validate.ok", &[MessageArg::new("extra", "value")]);
    assert_eq!(output, "Config valid.");
}

#[test]
fn t_macro_stringifies_named_arguments() {
    let message = t!("validate.ok", count = 42);
    assert_eq!(message, "Catalog valid (42 entries).");
}

#[test]
fn t_macro_leaves_unmatched_placeholders_visible() {
    // A missing argument must stay visible so the defect is noticeable.
    let message = t!("validate.ok");
    assert_eq!(message, "Catalog valid ({count} entries).");
}
