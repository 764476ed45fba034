//! Shared value types for the render pipeline.
//!
//! These are the request-scoped records that flow between the host-platform
//! traits and the generator: everything here is constructed for a single
//! render and discarded with it. The serde derives double as the schema for
//! the [`crate::memory`] TOML fixture format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Full action name of a CMS page view request. Renders only happen for
/// requests carrying this action; anything else is gated out immediately.
pub const CMS_PAGE_VIEW: &str = "cms_page_view";

/// Identifies a store view in the host platform's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub u32);

impl StoreId {
    /// Sentinel in page-to-store associations meaning "all store views".
    ///
    /// Never a literal store: when it appears in an association list, the
    /// generator expands it to every registered store view.
    pub const ALL: StoreId = StoreId(0);
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifies a CMS page row, distinct from its slug-like identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The slice of the current request the generator needs: the resolved action
/// name, and the identifier of the page block attached to the layout (absent
/// on layouts without one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Full action name of the routed request (e.g. `cms_page_view`).
    pub full_action_name: String,
    /// Identifier of the currently rendered CMS page, if the layout has one.
    pub page_identifier: Option<String>,
}

impl RequestContext {
    /// A CMS page view request for the given page identifier.
    pub fn page_view(identifier: impl Into<String>) -> Self {
        RequestContext {
            full_action_name: CMS_PAGE_VIEW.to_string(),
            page_identifier: Some(identifier.into()),
        }
    }

    /// A request routed to some other action (no tags will be produced).
    pub fn other(action: impl Into<String>) -> Self {
        RequestContext {
            full_action_name: action.into(),
            page_identifier: None,
        }
    }
}

/// A CMS page's storage row, as read from the page repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Internal numeric ID (the association table is keyed on this).
    pub id: PageId,
    /// Slug-like key used to address the page in URLs.
    pub identifier: String,
    /// Active flag on this row. Per-store activation comes from which row a
    /// store-filtered lookup matches, not from this flag alone.
    pub active: bool,
}

/// One store view: a locale/URL scope with its own base URL and config
/// overrides. Locale and URL-format flags live in scoped config, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreView {
    pub id: StoreId,
    /// Store code, optionally used as the leading URL path segment.
    pub code: String,
    /// Base URL for links in this store's scope. May carry a trailing slash;
    /// the URL builder trims it.
    pub base_url: String,
}

/// One emitted alternate-link line: a normalized locale and an absolute URL,
/// not yet attribute-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HreflangTag {
    /// Normalized locale (`en-us`, not `en_US`).
    pub locale: String,
    /// Absolute URL of this page in the tag's store view.
    pub href: String,
}
