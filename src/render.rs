//! Hreflang tag generation.
//!
//! The one component this crate exists for: given the current request and the
//! injected host-platform collaborators, produce one
//! `<link rel="alternate" hreflang="…" href="…"/>` line per store view the
//! current CMS page is live in.
//!
//! ## Gate sequence
//!
//! A render runs a strictly linear series of gates, each an early return with
//! empty output:
//!
//! 1. the request's action must be `cms_page_view`;
//! 2. the layout must have a page identifier attached;
//! 3. the page must be active in the *current* store;
//! 4. the page row must resolve by identifier (failure is logged, not
//!    surfaced);
//! 5. the association table yields the store set, with the all-stores
//!    sentinel expanded to the full registry.
//!
//! Then the per-store loop emits one tag per store, containing any failure to
//! the store it happened in — one unresolvable store never costs the others
//! their tags.
//!
//! The only error `render` returns is a failing
//! [`StoreRegistry::current_store`]: a request with no resolvable store means
//! the platform itself is broken, and hiding that behind empty output would
//! bury the real problem.
//!
//! ## Output
//!
//! Both attribute values are HTML-escaped through [`maud::Escaper`], the same
//! escaping the `html!` macro applies. [`head_fragment`] offers the tags as
//! pre-built [`Markup`] for embedders whose layouts are maud templates;
//! [`HreflangGenerator::render`] returns the joined string form for everyone
//! else.

use crate::host::{
    DEFAULT_LOCALE, HostError, LOCALE_CODE, PageLookup, ScopedConfig, StoreRegistry,
    USE_STORE_CODE,
};
use crate::types::{CMS_PAGE_VIEW, HreflangTag, RequestContext, StoreId};
use crate::{locale, url};
use maud::{Escaper, Markup, html};
use std::fmt::Write;
use tracing::error;

/// Renders alternate-language link tags for the current CMS page.
///
/// Holds nothing but borrowed collaborators: construct it per render, or keep
/// one around — there is no state either way.
pub struct HreflangGenerator<'a> {
    pages: &'a dyn PageLookup,
    stores: &'a dyn StoreRegistry,
    config: &'a dyn ScopedConfig,
}

impl<'a> HreflangGenerator<'a> {
    pub fn new(
        pages: &'a dyn PageLookup,
        stores: &'a dyn StoreRegistry,
        config: &'a dyn ScopedConfig,
    ) -> Self {
        HreflangGenerator {
            pages,
            stores,
            config,
        }
    }

    /// Render the hreflang block for this request.
    ///
    /// Returns the tag lines joined by `\n` with a trailing newline, or the
    /// empty string when the request is not a CMS page view, the page is
    /// missing or inactive, or no store produced a tag.
    pub fn render(&self, request: &RequestContext) -> Result<String, HostError> {
        let tags = self.tags(request)?;
        Ok(render_lines(&tags))
    }

    /// The structured form of [`render`](Self::render): one [`HreflangTag`]
    /// per store view the page is live in, in association order.
    pub fn tags(&self, request: &RequestContext) -> Result<Vec<HreflangTag>, HostError> {
        if request.full_action_name != CMS_PAGE_VIEW {
            return Ok(Vec::new());
        }
        let Some(identifier) = request.page_identifier.as_deref() else {
            return Ok(Vec::new());
        };

        let current = self.stores.current_store()?;
        if !self.page_active(identifier, current.id) {
            return Ok(Vec::new());
        }

        Ok(self.tags_for_page(identifier))
    }

    /// Steps 4–6: resolve the page row, enumerate its stores, emit per store.
    fn tags_for_page(&self, identifier: &str) -> Vec<HreflangTag> {
        let page = match self.pages.page_by_identifier(identifier) {
            Ok(page) => page,
            Err(err) => {
                error!(identifier, %err, "failed to resolve CMS page for hreflang generation");
                return Vec::new();
            }
        };

        let store_ids = match self.pages.store_ids_for_page(page.id) {
            Ok(ids) => ids,
            Err(err) => {
                error!(identifier, page = %page.id, %err, "failed to enumerate stores for CMS page");
                return Vec::new();
            }
        };
        let store_ids = self.expand_sentinel(store_ids);

        let mut tags = Vec::with_capacity(store_ids.len());
        for store_id in store_ids {
            if let Some(tag) = self.tag_for_store(identifier, store_id) {
                tags.push(tag);
            }
        }
        tags
    }

    /// One loop iteration: any failure is logged and skips this store only.
    fn tag_for_store(&self, identifier: &str, store_id: StoreId) -> Option<HreflangTag> {
        let store = match self.stores.store(store_id) {
            Ok(store) => store,
            Err(err) => {
                error!(store = %store_id, identifier, %err, "skipping store for hreflang tag");
                return None;
            }
        };

        if !self.page_active(identifier, store.id) {
            return None;
        }

        let configured = self
            .config
            .value(LOCALE_CODE, store.id)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let store_code = self
            .config
            .flag(USE_STORE_CODE, store.id)
            .then_some(store.code.as_str());

        Some(HreflangTag {
            locale: locale::normalize(&configured),
            href: url::page_url(&store.base_url, store_code, identifier),
        })
    }

    /// Expand the all-stores sentinel to every registered store view ID.
    fn expand_sentinel(&self, store_ids: Vec<StoreId>) -> Vec<StoreId> {
        if store_ids.contains(&StoreId::ALL) {
            self.stores.all_stores().into_iter().map(|s| s.id).collect()
        } else {
            store_ids
        }
    }

    /// Whether the page is active in one store's scope. A failing check is
    /// logged and reads as inactive; expected inactivity stays silent.
    fn page_active(&self, identifier: &str, store: StoreId) -> bool {
        match self.pages.is_active_in_store(identifier, store) {
            Ok(active) => active,
            Err(err) => {
                error!(identifier, store = %store, %err, "page active check failed");
                false
            }
        }
    }
}

// ============================================================================
// HTML formatting
// ============================================================================

/// Format one tag as a self-closing link element, both attributes escaped.
pub fn tag_html(tag: &HreflangTag) -> String {
    format!(
        r#"<link rel="alternate" hreflang="{}" href="{}"/>"#,
        escape_attr(&tag.locale),
        escape_attr(&tag.href)
    )
}

/// The tags as a maud [`Markup`] fragment, for layouts already built with
/// `html!`. Escaping is maud's own.
pub fn head_fragment(tags: &[HreflangTag]) -> Markup {
    html! {
        @for tag in tags {
            link rel="alternate" hreflang=(tag.locale) href=(tag.href);
        }
    }
}

/// Join tag lines with `\n`, trailing newline included. Zero tags is exactly
/// the empty string, never a lone separator.
fn render_lines(tags: &[HreflangTag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let mut out = tags.iter().map(tag_html).collect::<Vec<_>>().join("\n");
    out.push('\n');
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = Escaper::new(&mut out).write_str(value);
    out
}

// ============================================================================
// Tests
// ============================================================================
