// crates/lexicard-catalog/src/source.rs
// ============================================================================
// Module: Catalog Disk Source
// Description: Fail-closed loading of catalog files and locale directories.
// Purpose: Enforce path, size, and encoding limits before parsing.
// Dependencies: crate::catalog, crate::error, crate::identifiers, crate::parse
// ============================================================================

//! ## Overview
//! Catalog files are untrusted input: loading validates the path shape,
//! caps the file size, and requires UTF-8 before handing the text to the
//! parser. A locale directory holds one `<locale>.messages` file per locale;
//! file stems must parse as locale identifiers and two stems must not
//! normalize to the same locale.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::identifiers::LocaleId;
use crate::parse::DuplicatePolicy;
use crate::parse::parse_catalog;
use crate::registry::CatalogRegistry;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum catalog file size in bytes.
pub const MAX_CATALOG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// File extension for catalog files inside a locale directory.
pub const CATALOG_FILE_EXTENSION: &str = "messages";

// ============================================================================
// SECTION: File Loading
// ============================================================================

/// Loads and parses a single catalog file.
///
/// # Errors
///
/// Returns [`CatalogError::Invalid`] for path, size, or encoding violations,
/// [`CatalogError::Io`] for read failures, and parser errors unchanged.
pub fn load_catalog_file(path: &Path, policy: DuplicatePolicy) -> Result<Catalog, CatalogError> {
    validate_path(path)?;
    let bytes = fs::read(path).map_err(|err| CatalogError::Io(err.to_string()))?;
    if bytes.len() > MAX_CATALOG_FILE_SIZE {
        return Err(CatalogError::Invalid("catalog file exceeds size limit".to_string()));
    }
    let text = std::str::from_utf8(&bytes)
        .map_err(|_| CatalogError::Invalid("catalog file must be utf-8".to_string()))?;
    parse_catalog(text, policy)
}

/// Loads all `<locale>.messages` catalogs from a directory.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the directory cannot be read,
/// [`CatalogError::Invalid`] when a file stem is not a valid locale or two
/// stems normalize to the same locale, and file-loading errors unchanged.
pub fn load_locale_dir(
    dir: &Path,
    policy: DuplicatePolicy,
) -> Result<HashMap<LocaleId, Arc<Catalog>>, CatalogError> {
    validate_path(dir)?;
    let mut catalogs: HashMap<LocaleId, Arc<Catalog>> = HashMap::new();
    let reader = fs::read_dir(dir).map_err(|err| CatalogError::Io(err.to_string()))?;
    for item in reader {
        let item = item.map_err(|err| CatalogError::Io(err.to_string()))?;
        let path = item.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(CATALOG_FILE_EXTENSION) {
            continue;
        }
        let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("");
        let Some(locale) = LocaleId::parse(stem) else {
            return Err(CatalogError::Invalid(format!(
                "catalog file stem `{stem}` is not a valid locale"
            )));
        };
        let catalog = load_catalog_file(&path, policy)?;
        if catalogs.insert(locale.clone(), Arc::new(catalog)).is_some() {
            return Err(CatalogError::Invalid(format!(
                "multiple catalog files normalize to locale `{locale}`"
            )));
        }
    }
    Ok(catalogs)
}

/// Loads a locale directory and builds a registry around `default_locale`.
///
/// # Errors
///
/// Returns directory-loading errors unchanged, plus
/// [`CatalogError::Invalid`] when the default locale has no catalog file.
pub fn load_registry(
    dir: &Path,
    default_locale: LocaleId,
    policy: DuplicatePolicy,
) -> Result<CatalogRegistry, CatalogError> {
    let catalogs = load_locale_dir(dir, policy)?;
    CatalogRegistry::new(default_locale, catalogs)
}

// ============================================================================
// SECTION: Path Validation
// ============================================================================

/// Validates a path against length limits before any I/O.
fn validate_path(path: &Path) -> Result<(), CatalogError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(CatalogError::Invalid("catalog path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(CatalogError::Invalid("catalog path component too long".to_string()));
        }
    }
    Ok(())
}
