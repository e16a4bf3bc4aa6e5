// crates/lexicard-catalog/src/identifiers.rs
// ============================================================================
// Module: Catalog Identifiers
// Description: Strongly typed identifiers for message keys and locales.
// Purpose: Provide opaque, serializable identifiers with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the string-based identifiers used throughout the
//! catalog crate. Message keys are opaque and serialize as plain strings;
//! structural validation (no whitespace, non-empty) is enforced at the parse
//! boundary rather than within these simple wrappers. Locale identifiers
//! normalize to the lowercased language subtag so that `en`, `EN`, and
//! `en-US` all select the same catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Stable identifier used by application code to request a display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageKey(String);

impl MessageKey {
    /// Creates a new message key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for MessageKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Language/region identifier selecting which catalog is active.
///
/// # Invariants
/// - The stored form is the lowercased language subtag (`en`, not `en-US`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    /// Attempts to parse a locale value (case-insensitive, tolerant of
    /// region tags separated by `-` or `_`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        if lang.is_empty() || !lang.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }
        Some(Self(lang.to_string()))
    }

    /// Returns the canonical locale label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
