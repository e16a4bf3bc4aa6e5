// crates/lexicard-catalog/src/parse.rs
// ============================================================================
// Module: Catalog Parser
// Description: Line-oriented parser for the `key = value` catalog grammar.
// Purpose: Turn raw catalog text into an immutable Catalog, fail-closed.
// Dependencies: crate::catalog, crate::error, crate::identifiers
// ============================================================================

//! ## Overview
//! Catalog files are UTF-8 text with one entry per line. Blank lines and
//! `#` comment lines are skipped. Bracketed lines such as `[Menu Bar]` mark
//! sections: they label subsequent entries for human maintainability and are
//! ignored for lookup purposes. Everything else must be a `key = value`
//! entry; any other shape is a parse error naming the offending line.
//!
//! ## Invariants
//! - Parsing is a pure transformation: the same text always yields the same
//!   catalog.
//! - Keys are trimmed; values keep interior and trailing whitespace exactly
//!   as written (only the whitespace padding after `=` is removed).
//! - Duplicate keys trigger the selected [`DuplicatePolicy`] deterministically.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::catalog::CatalogEntry;
use crate::error::CatalogError;
use crate::identifiers::MessageKey;

// ============================================================================
// SECTION: Duplicate Policy
// ============================================================================

/// Resolution strategy for keys defined more than once in one catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the load with [`CatalogError::DuplicateKey`] (default).
    #[default]
    Reject,
    /// Keep the later value; the entry retains its original position and
    /// section, and its recorded line moves to the later definition.
    LastWriteWins,
}

// ============================================================================
// SECTION: Parser
// ============================================================================

/// Parses catalog text into a [`Catalog`] under the given duplicate policy.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed lines and
/// [`CatalogError::DuplicateKey`] for key collisions under
/// [`DuplicatePolicy::Reject`].
pub fn parse_catalog(text: &str, policy: DuplicatePolicy) -> Result<Catalog, CatalogError> {
    let mut entries: Vec<CatalogEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current_section: Option<String> = None;

    for (offset, raw_line) in text.lines().enumerate() {
        let line = offset + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.starts_with('[') {
            current_section = Some(parse_section_marker(trimmed, line)?);
            continue;
        }
        let (key, value) = parse_entry_line(raw_line, line)?;
        match index.get(key.as_str()) {
            Some(position) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(CatalogError::DuplicateKey {
                        key: key.as_str().to_string(),
                        first_line: entries[*position].line,
                        line,
                    });
                }
                DuplicatePolicy::LastWriteWins => {
                    entries[*position].value = value;
                    entries[*position].line = line;
                }
            },
            None => {
                index.insert(key.as_str().to_string(), entries.len());
                entries.push(CatalogEntry {
                    key,
                    value,
                    section: current_section.clone(),
                    line,
                });
            }
        }
    }

    Ok(Catalog::from_parts(entries, index))
}

// ============================================================================
// SECTION: Line Parsers
// ============================================================================

/// Parses a bracketed section marker line into its label.
fn parse_section_marker(trimmed: &str, line: usize) -> Result<String, CatalogError> {
    let Some(body) = trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) else {
        return Err(CatalogError::Parse {
            line,
            reason: "unterminated section marker".to_string(),
        });
    };
    let label = body.trim();
    if label.is_empty() {
        return Err(CatalogError::Parse {
            line,
            reason: "section marker must not be empty".to_string(),
        });
    }
    Ok(label.to_string())
}

/// Parses a `key = value` entry line into its key and value.
fn parse_entry_line(raw_line: &str, line: usize) -> Result<(MessageKey, String), CatalogError> {
    let Some((before, after)) = raw_line.split_once('=') else {
        return Err(CatalogError::Parse {
            line,
            reason: "missing `=` separator".to_string(),
        });
    };
    let key = before.trim();
    if key.is_empty() {
        return Err(CatalogError::Parse {
            line,
            reason: "missing key before `=`".to_string(),
        });
    }
    if key.chars().any(char::is_whitespace) {
        return Err(CatalogError::Parse {
            line,
            reason: format!("key `{key}` contains whitespace"),
        });
    }
    Ok((MessageKey::new(key), after.trim_start().to_string()))
}
