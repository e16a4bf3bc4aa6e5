// crates/lexicard-catalog/src/message.rs
// ============================================================================
// Module: Message Formatting
// Description: Placeholder substitution for catalog values.
// Purpose: Substitute named `{placeholder}` tokens with preformatted values.
// Dependencies: Standard library string utilities.
// ============================================================================

//! ## Overview
//! Catalog values may contain `{name}` placeholder tokens. Substitution is
//! deliberately simple and total: arguments are applied in the order given,
//! unmatched placeholders are left intact so missing data stays visible, and
//! extra arguments are ignored. Formatting never fails.

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument for placeholder substitution.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `name`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"name"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Substitutes `{placeholder}` tokens in `template` with the given arguments.
#[must_use]
pub fn format_message(template: &str, args: &[MessageArg]) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}
