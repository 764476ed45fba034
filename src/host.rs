//! Host-platform collaborator contracts.
//!
//! The generator never talks to storage, routing, or configuration directly:
//! everything it needs from the surrounding platform comes through the three
//! narrow traits in this module, injected at construction. Embedders adapt
//! their own page repository, store registry, and scoped-config stores to
//! these contracts; [`crate::memory`] ships a ready-made in-memory adapter.
//!
//! ## Error policy
//!
//! Every fallible method returns [`HostError`]. How a failure is treated is
//! the *caller's* decision, and the generator is deliberate about it:
//!
//! - a failing [`StoreRegistry::current_store`] means the platform itself is
//!   misconfigured and propagates out of the render;
//! - a failing page lookup aborts the render with empty output (logged);
//! - a failure while handling one store is contained to that store — the
//!   remaining stores still get their tags.

use crate::types::{PageId, PageRecord, StoreId, StoreView};
use thiserror::Error;

/// Scoped-config path of a store's locale code.
pub const LOCALE_CODE: &str = "general/locale/code";

/// Scoped-config path of the "include the store code in URLs" flag.
pub const USE_STORE_CODE: &str = "web/url/use_store";

/// Locale assumed when a store has no `general/locale/code` value.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Failure surfaced by a host-platform collaborator.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("no CMS page with identifier {0:?}")]
    PageNotFound(String),
    #[error("no store view with ID {0}")]
    StoreNotFound(StoreId),
    #[error("no current store resolvable for this request")]
    NoCurrentStore,
    /// Catch-all for storage-level failures (connection loss, bad rows).
    #[error("host backend error: {0}")]
    Backend(String),
}

/// Read access to the CMS page repository and its store association table.
pub trait PageLookup {
    /// Fetch the page row addressed by a slug-like identifier.
    fn page_by_identifier(&self, identifier: &str) -> Result<PageRecord, HostError>;

    /// Whether the page with this identifier is active within one store's
    /// scope: a store-filtered lookup must match a row, and that row must be
    /// active.
    fn is_active_in_store(&self, identifier: &str, store: StoreId) -> Result<bool, HostError>;

    /// Raw association-table read: every store ID linked to a page row.
    /// May contain [`StoreId::ALL`]; expansion is the caller's job.
    fn store_ids_for_page(&self, page: PageId) -> Result<Vec<StoreId>, HostError>;
}

/// The platform-wide store view registry.
pub trait StoreRegistry {
    /// The store view the current request is being served under.
    ///
    /// Failure here is a platform misconfiguration and is the one error the
    /// generator lets escape.
    fn current_store(&self) -> Result<StoreView, HostError>;

    /// Resolve one store view by ID.
    fn store(&self, id: StoreId) -> Result<StoreView, HostError>;

    /// Every registered store view, in registry order.
    fn all_stores(&self) -> Vec<StoreView>;
}

/// Store-scoped configuration reads.
///
/// Values resolve at store-view scope, falling back to whatever default
/// scoping the implementation provides. A missing value is `None`, never an
/// error: absent config is the common case, not a failure.
pub trait ScopedConfig {
    /// String value at a config path, scoped to one store.
    fn value(&self, path: &str, store: StoreId) -> Option<String>;

    /// Boolean flag at a config path, scoped to one store. Unset reads as
    /// `false`.
    fn flag(&self, path: &str, store: StoreId) -> bool;
}
