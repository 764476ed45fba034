//! In-memory host platform.
//!
//! Implements all three collaborator traits over plain declarative data, so
//! the generator can run without a real CMS behind it: embedders use it for
//! small fixed sites, the test suite uses it as its fixture backend.
//!
//! ## TOML fixture format
//!
//! A platform can be declared in TOML and loaded with
//! [`MemoryPlatform::from_toml_str`] (or [`MemoryPlatform::load`] for a
//! file):
//!
//! ```toml
//! current_store = 1
//!
//! [[stores]]
//! id = 1
//! code = "en"
//! base_url = "https://example.com"
//!
//! [stores.settings]
//! "general/locale/code" = "en_US"
//! "web/url/use_store" = "1"
//!
//! [[stores]]
//! id = 2
//! code = "fr"
//! base_url = "https://example.com"
//!
//! [stores.settings]
//! "general/locale/code" = "fr_FR"
//! "web/url/use_store" = "1"
//!
//! [[pages]]
//! id = 7
//! identifier = "about-us"
//! active = true
//! store_ids = [0]          # 0 = all store views
//! ```
//!
//! Settings values are strings, the way scoped-config storage keeps them;
//! flags read `"1"` / `"true"` as set. Unknown keys outside `settings` are
//! rejected to catch typos early.
//!
//! ## Per-store activation
//!
//! Pages are rows, and rows may share an identifier: a store-filtered lookup
//! answers with the first row assigned to that store, mirroring how a
//! store-scoped page collection resolves. Declaring a second, inactive row
//! for the same identifier is how a fixture marks a page disabled in one
//! store while live in another.

use crate::host::{HostError, PageLookup, ScopedConfig, StoreRegistry};
use crate::types::{PageId, PageRecord, StoreId, StoreView};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// One store view plus its scoped settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreEntry {
    pub id: StoreId,
    pub code: String,
    pub base_url: String,
    /// Scoped-config values for this store, keyed by config path. Values are
    /// stored as strings; flags parse `"1"` / `"true"` as set.
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

/// One CMS page row with its store assignments.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    pub id: PageId,
    pub identifier: String,
    pub active: bool,
    /// Stores this row is assigned to. `[0]` assigns it to all store views.
    #[serde(default)]
    pub store_ids: Vec<StoreId>,
}

/// A whole host platform held in memory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryPlatform {
    /// ID of the store the "current request" is served under. Unset means
    /// the platform cannot resolve a current store (and renders will fail
    /// the way a misconfigured host would).
    pub current_store: Option<StoreId>,
    #[serde(default)]
    pub stores: Vec<StoreEntry>,
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

impl MemoryPlatform {
    /// Parse a platform declaration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, PlatformError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a platform declaration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, PlatformError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    fn store_entry(&self, id: StoreId) -> Option<&StoreEntry> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// First page row matching an identifier, in declaration order.
    fn row_by_identifier(&self, identifier: &str) -> Option<&PageEntry> {
        self.pages.iter().find(|p| p.identifier == identifier)
    }

    /// First page row matching an identifier that is assigned to a store
    /// (directly or via the all-stores sentinel).
    fn row_in_store(&self, identifier: &str, store: StoreId) -> Option<&PageEntry> {
        self.pages.iter().find(|p| {
            p.identifier == identifier
                && (p.store_ids.contains(&store) || p.store_ids.contains(&StoreId::ALL))
        })
    }
}

impl PageLookup for MemoryPlatform {
    fn page_by_identifier(&self, identifier: &str) -> Result<PageRecord, HostError> {
        let row = self
            .row_by_identifier(identifier)
            .ok_or_else(|| HostError::PageNotFound(identifier.to_string()))?;
        Ok(PageRecord {
            id: row.id,
            identifier: row.identifier.clone(),
            active: row.active,
        })
    }

    fn is_active_in_store(&self, identifier: &str, store: StoreId) -> Result<bool, HostError> {
        Ok(self
            .row_in_store(identifier, store)
            .is_some_and(|row| row.active))
    }

    fn store_ids_for_page(&self, page: PageId) -> Result<Vec<StoreId>, HostError> {
        let row = self
            .pages
            .iter()
            .find(|p| p.id == page)
            .ok_or_else(|| HostError::Backend(format!("no page row with ID {page}")))?;
        Ok(row.store_ids.clone())
    }
}

impl StoreRegistry for MemoryPlatform {
    fn current_store(&self) -> Result<StoreView, HostError> {
        let id = self.current_store.ok_or(HostError::NoCurrentStore)?;
        self.store(id)
    }

    fn store(&self, id: StoreId) -> Result<StoreView, HostError> {
        let entry = self.store_entry(id).ok_or(HostError::StoreNotFound(id))?;
        Ok(StoreView {
            id: entry.id,
            code: entry.code.clone(),
            base_url: entry.base_url.clone(),
        })
    }

    fn all_stores(&self) -> Vec<StoreView> {
        self.stores
            .iter()
            .map(|entry| StoreView {
                id: entry.id,
                code: entry.code.clone(),
                base_url: entry.base_url.clone(),
            })
            .collect()
    }
}

impl ScopedConfig for MemoryPlatform {
    fn value(&self, path: &str, store: StoreId) -> Option<String> {
        self.store_entry(store)?.settings.get(path).cloned()
    }

    fn flag(&self, path: &str, store: StoreId) -> bool {
        matches!(
            self.value(path, store).as_deref(),
            Some("1") | Some("true")
        )
    }
}
