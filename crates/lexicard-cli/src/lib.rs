// crates/lexicard-cli/src/lib.rs
// ============================================================================
// Module: Lexicard CLI Library
// Description: Shared helpers for the Lexicard command-line interface.
// Purpose: Provide reusable components (i18n, config) for the CLI binary and tests.
// Dependencies: lexicard-catalog, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! This library module houses shared CLI utilities: the tool's own
//! internationalized message catalog and the `lexicard.toml` configuration
//! loader. The binary entry point (`src/main.rs`) imports these helpers to
//! keep all user-facing output consistent. CLI inputs are untrusted and
//! validated fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Configuration loading and validation.
pub mod config;
/// Internationalization helpers and message catalog.
pub mod i18n;

#[cfg(test)]
mod tests;
