// crates/lexicard-catalog/src/registry.rs
// ============================================================================
// Module: Locale Registry
// Description: Locale-keyed catalog set with fallback translation.
// Purpose: Resolve keys through locale, default locale, then key echo.
// Dependencies: crate::catalog, crate::error, crate::identifiers, crate::message
// ============================================================================

//! ## Overview
//! A [`CatalogRegistry`] holds one immutable catalog per locale plus a
//! default locale used as the fallback for misses. Registries are supplied
//! explicitly to callers as context objects rather than living in ambient
//! process-wide state, so tests can substitute catalogs freely.
//!
//! [`ActiveCatalog`] covers the hot-swap case: a shared handle whose catalog
//! is replaced through an atomic reference swap, so concurrent readers
//! observe either the old or the new catalog and never a mixture.
//!
//! ## Invariants
//! - The default locale is always present in the registry.
//! - Translation never fails: the fallback chain ends at the key text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::identifiers::LocaleId;
use crate::identifiers::MessageKey;
use crate::message::MessageArg;
use crate::message::format_message;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Immutable set of catalogs keyed by locale with a default fallback locale.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    /// Loaded catalogs keyed by canonical locale.
    catalogs: HashMap<LocaleId, Arc<Catalog>>,
    /// Fallback locale consulted before the key-echo fallback.
    default_locale: LocaleId,
    /// Catalog of the default locale, resolved once at construction.
    default_catalog: Arc<Catalog>,
}

impl CatalogRegistry {
    /// Constructs a registry from loaded catalogs and a default locale.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] when the default locale has no
    /// catalog in `catalogs`.
    pub fn new(
        default_locale: LocaleId,
        catalogs: HashMap<LocaleId, Arc<Catalog>>,
    ) -> Result<Self, CatalogError> {
        let Some(default_catalog) = catalogs.get(&default_locale).cloned() else {
            return Err(CatalogError::Invalid(format!(
                "default locale `{default_locale}` has no catalog"
            )));
        };
        Ok(Self {
            catalogs,
            default_locale,
            default_catalog,
        })
    }

    /// Returns the catalog for `locale`, if loaded.
    #[must_use]
    pub fn catalog(&self, locale: &LocaleId) -> Option<&Arc<Catalog>> {
        self.catalogs.get(locale)
    }

    /// Returns the catalog for the default locale.
    #[must_use]
    pub const fn default_catalog(&self) -> &Arc<Catalog> {
        &self.default_catalog
    }

    /// Returns the default locale.
    #[must_use]
    pub const fn default_locale(&self) -> &LocaleId {
        &self.default_locale
    }

    /// Returns the loaded locales in sorted order for deterministic output.
    #[must_use]
    pub fn locales(&self) -> Vec<&LocaleId> {
        let mut locales: Vec<&LocaleId> = self.catalogs.keys().collect();
        locales.sort();
        locales
    }

    /// Translates `key` for `locale`, substituting `args`.
    ///
    /// Resolution follows the fallback chain: requested locale, then the
    /// default locale, then the key's own text.
    #[must_use]
    pub fn translate(&self, locale: &LocaleId, key: &MessageKey, args: &[MessageArg]) -> String {
        let template = self
            .catalogs
            .get(locale)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| self.default_catalog.get(key))
            .unwrap_or_else(|| key.as_str());
        format_message(template, args)
    }
}

// ============================================================================
// SECTION: Active Catalog
// ============================================================================

/// Shared handle to the currently active catalog.
///
/// Readers take a cheap [`Arc`] clone; locale switches install a new catalog
/// with [`ActiveCatalog::replace`]. The swap is atomic from the reader's
/// perspective: a reader sees the old catalog or the new one, never a
/// partially updated state.
#[derive(Debug)]
pub struct ActiveCatalog {
    /// Current catalog behind a reader/writer lock.
    inner: RwLock<Arc<Catalog>>,
}

impl ActiveCatalog {
    /// Creates a handle with `catalog` as the active catalog.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            inner: RwLock::new(catalog),
        }
    }

    /// Returns the currently active catalog.
    #[must_use]
    pub fn current(&self) -> Arc<Catalog> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Installs `catalog` as the active catalog and returns the previous one.
    pub fn replace(&self, catalog: Arc<Catalog>) -> Arc<Catalog> {
        match self.inner.write() {
            Ok(mut guard) => std::mem::replace(&mut *guard, catalog),
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                std::mem::replace(&mut *guard, catalog)
            }
        }
    }
}
