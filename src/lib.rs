//! # cms-hreflang
//!
//! Renders `<link rel="alternate" hreflang="…">` tags for a CMS page across
//! every store view the page is live in. The crate is a presentation helper
//! meant to be embedded in a larger platform's page rendering: the host
//! supplies page storage, the store registry, and scoped configuration
//! through three narrow traits, and gets back the hreflang block for the
//! current request's `<head>`.
//!
//! # Architecture: One Linear Render
//!
//! Each render is a pure function of what the host reports for that single
//! request — no caching, no state between calls:
//!
//! ```text
//! Request → PageIdentifier → PageRecord → StoreIds[] → per-store
//!   (locale, base URL, store-code flag) → tag lines → joined output
//! ```
//!
//! Every step is a gate: a request that is not a CMS page view, a layout
//! without a page, or a page inactive in the current store all short-circuit
//! to empty output. Inside the per-store loop, failures are contained to the
//! store they happened in, so one broken store view never suppresses the
//! other stores' tags.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`render`] | The generator — gate sequence, per-store loop, tag formatting |
//! | [`host`] | Collaborator traits (`PageLookup`, `StoreRegistry`, `ScopedConfig`) and the error taxonomy |
//! | [`types`] | Request-scoped value types shared across the crate |
//! | [`locale`] | `en_US` → `en-us` normalization for the `hreflang` attribute |
//! | [`url`] | Page URL assembly (base URL, optional store-code segment, identifier) |
//! | [`memory`] | In-memory host platform, TOML-loadable — fixture backend and standalone adapter |
//!
//! # Design Decisions
//!
//! ## Injected Collaborators, Not a Platform Handle
//!
//! The generator takes three trait objects rather than one "platform"
//! facade. Each contract is small enough to implement against any backing
//! store in a few lines, and tests can swap a single collaborator (say, a
//! failing active-check) without touching the rest. [`memory::MemoryPlatform`]
//! implements all three, so the common case is still one value passed three
//! times.
//!
//! ## Maud For Escaping
//!
//! Attribute values end up verbatim in the page `<head>`, so both the locale
//! and the URL are HTML-escaped through [maud](https://maud.lambda.xyz/)'s
//! `Escaper` — the same escaping `html!` applies — rather than a hand-rolled
//! replacement table. Layouts already built on maud can take the tags as
//! [`maud::Markup`] via [`render::head_fragment`] and skip the string form
//! entirely.
//!
//! ## Errors Are Contained Where They Happen
//!
//! The host's failure modes are explicit [`host::HostError`] values checked
//! at each step, not a blanket catch. Page-level failures abort the render
//! with empty output (logged via `tracing`); per-store failures skip that
//! store. The single exception is an unresolvable *current* store, which is
//! returned to the caller — that condition means the platform is
//! misconfigured, and empty output would only hide it.
//!
//! # Example
//!
//! ```
//! use cms_hreflang::memory::MemoryPlatform;
//! use cms_hreflang::render::HreflangGenerator;
//! use cms_hreflang::types::RequestContext;
//!
//! let platform = MemoryPlatform::from_toml_str(r#"
//!     current_store = 1
//!
//!     [[stores]]
//!     id = 1
//!     code = "en"
//!     base_url = "https://example.com"
//!
//!     [stores.settings]
//!     "general/locale/code" = "en_US"
//!
//!     [[pages]]
//!     id = 7
//!     identifier = "about-us"
//!     active = true
//!     store_ids = [0]
//! "#).unwrap();
//!
//! let generator = HreflangGenerator::new(&platform, &platform, &platform);
//! let block = generator.render(&RequestContext::page_view("about-us")).unwrap();
//!
//! assert_eq!(
//!     block,
//!     "<link rel=\"alternate\" hreflang=\"en-us\" href=\"https://example.com/about-us\"/>\n"
//! );
//! ```

pub mod host;
pub mod locale;
pub mod memory;
pub mod render;
pub mod types;
pub mod url;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use host::{DEFAULT_LOCALE, HostError, PageLookup, ScopedConfig, StoreRegistry};
pub use render::HreflangGenerator;
pub use types::{HreflangTag, PageId, PageRecord, RequestContext, StoreId, StoreView};
