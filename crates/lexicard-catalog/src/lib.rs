// crates/lexicard-catalog/src/lib.rs
// ============================================================================
// Module: Lexicard Catalog Library
// Description: Public API surface for the Lexicard message catalog.
// Purpose: Expose catalog types, the parser, lookup, and the locale registry.
// Dependencies: crate::{catalog, error, identifiers, message, parse, registry, source}
// ============================================================================

//! ## Overview
//! `lexicard-catalog` provides the localization message catalog for the
//! flashcard application: an immutable mapping from stable message keys to
//! display strings, parsed from line-oriented `key = value` files, with
//! render-safe lookup, placeholder substitution, and locale-keyed catalog
//! registries supporting atomic hot replacement. Catalog files are untrusted
//! input and loading is fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod error;
pub mod identifiers;
pub mod message;
pub mod parse;
pub mod registry;
pub mod source;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::Catalog;
pub use catalog::CatalogEntry;
pub use error::CatalogError;
pub use identifiers::LocaleId;
pub use identifiers::MessageKey;
pub use message::MessageArg;
pub use message::format_message;
pub use parse::DuplicatePolicy;
pub use parse::parse_catalog;
pub use registry::ActiveCatalog;
pub use registry::CatalogRegistry;
pub use source::CATALOG_FILE_EXTENSION;
pub use source::MAX_CATALOG_FILE_SIZE;
pub use source::load_catalog_file;
pub use source::load_locale_dir;
pub use source::load_registry;
