// crates/lexicard-catalog/src/error.rs
// ============================================================================
// Module: Catalog Errors
// Description: Error taxonomy for catalog parsing, lookup, and loading.
// Purpose: Provide a single fail-closed error type for catalog operations.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! All fallible catalog operations return [`CatalogError`]. Parse-time errors
//! identify the offending 1-based source line so operators can fix catalog
//! files before they ship. Lookup misses are surfaced only through the strict
//! [`crate::Catalog::require`] path; render-time resolution falls back to the
//! key text instead of failing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog parsing, lookup, or loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed line encountered while parsing catalog text.
    #[error("catalog parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// Human-readable description of the defect.
        reason: String,
    },
    /// Key defined more than once within a single catalog.
    #[error("duplicate key `{key}` at line {line} (first defined at line {first_line})")]
    DuplicateKey {
        /// The colliding key.
        key: String,
        /// 1-based line of the first definition.
        first_line: usize,
        /// 1-based line of the colliding definition.
        line: usize,
    },
    /// Strict lookup miss for a key absent from the catalog.
    #[error("missing catalog key `{key}`")]
    MissingKey {
        /// The requested key.
        key: String,
    },
    /// I/O failure while reading a catalog file.
    #[error("catalog io error: {0}")]
    Io(String),
    /// Invalid catalog input (path, size, or encoding limits).
    #[error("invalid catalog input: {0}")]
    Invalid(String),
}
