// crates/lexicard-catalog/src/catalog.rs
// ============================================================================
// Module: Message Catalog
// Description: Immutable ordered key-to-string mapping for one locale.
// Purpose: Provide exact lookup, render-safe resolution, and serialization.
// Dependencies: crate::error, crate::identifiers
// ============================================================================

//! ## Overview
//! A [`Catalog`] is the full set of key-to-string mappings for one locale.
//! Entries preserve insertion order for serialization and human review, while
//! lookup goes through a by-key index. Catalogs are immutable after
//! construction; locale switches replace the whole catalog.
//!
//! ## Invariants
//! - Every key is unique within a catalog.
//! - Lookup returns the value exactly as written, with interior and trailing
//!   whitespace preserved.
//! - Section labels carry no lookup semantics; they exist only so that
//!   serialized output keeps the grouping of the source file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::identifiers::MessageKey;

// ============================================================================
// SECTION: Entry Type
// ============================================================================

/// A single key/value pair within a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Unique key identifying the entry within its catalog.
    pub key: MessageKey,
    /// Display text, exactly as written in the source.
    pub value: String,
    /// Section label active at the entry's definition site, if any.
    pub section: Option<String>,
    /// 1-based source line of the definition, for diagnostics.
    pub line: usize,
}

// ============================================================================
// SECTION: Catalog Type
// ============================================================================

/// Immutable ordered collection of catalog entries with by-key lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    /// Entries in insertion order.
    entries: Vec<CatalogEntry>,
    /// Index from key text to entry position.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Constructs a catalog from pre-validated parts.
    ///
    /// The parser is the only producer; it guarantees the index matches the
    /// entry vector and that keys are unique.
    pub(crate) const fn from_parts(
        entries: Vec<CatalogEntry>,
        index: HashMap<String, usize>,
    ) -> Self {
        Self {
            entries,
            index,
        }
    }

    /// Returns the number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value for `key`, exactly as written in the source.
    #[must_use]
    pub fn get(&self, key: &MessageKey) -> Option<&str> {
        self.index.get(key.as_str()).map(|position| self.entries[*position].value.as_str())
    }

    /// Returns the value for `key`, failing when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingKey`] when `key` is not in the catalog.
    pub fn require(&self, key: &MessageKey) -> Result<&str, CatalogError> {
        self.get(key).ok_or_else(|| CatalogError::MissingKey {
            key: key.as_str().to_string(),
        })
    }

    /// Resolves `key` with the render-time fallback policy: a miss returns
    /// the key's own text so the defect is visible but non-fatal.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a MessageKey) -> &'a str {
        self.get(key).unwrap_or_else(|| key.as_str())
    }

    /// Returns whether the catalog defines `key`.
    #[must_use]
    pub fn contains(&self, key: &MessageKey) -> bool {
        self.index.contains_key(key.as_str())
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &MessageKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Serializes the catalog back to the `key = value` grammar.
    ///
    /// Section markers are emitted whenever the section label changes between
    /// consecutive entries. Reparsing the output yields a catalog with
    /// identical key-to-value mappings.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        let mut current_section: Option<&str> = None;
        for entry in &self.entries {
            let section = entry.section.as_deref();
            if section != current_section {
                if let Some(label) = section {
                    if !output.is_empty() {
                        output.push('\n');
                    }
                    output.push('[');
                    output.push_str(label);
                    output.push(']');
                    output.push('\n');
                }
                current_section = section;
            }
            output.push_str(entry.key.as_str());
            if entry.value.is_empty() {
                output.push_str(" =");
            } else {
                output.push_str(" = ");
                output.push_str(&entry.value);
            }
            output.push('\n');
        }
        output
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
