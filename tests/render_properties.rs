//! End-to-end render properties, exercised through the public API only.
//!
//! The fixture platform is declared in TOML the way an embedder of
//! `MemoryPlatform` would declare it: two stores sharing a base URL, an
//! English store without the store-code URL segment and a French store with
//! it.

use cms_hreflang::memory::MemoryPlatform;
use cms_hreflang::{HostError, HreflangGenerator, RequestContext, StoreId};

const TWO_STORES: &str = r#"
    current_store = 1

    [[stores]]
    id = 1
    code = "en"
    base_url = "https://example.com"

    [stores.settings]
    "general/locale/code" = "en_US"

    [[stores]]
    id = 2
    code = "fr"
    base_url = "https://example.com/"

    [stores.settings]
    "general/locale/code" = "fr_FR"
    "web/url/use_store" = "1"

    [[pages]]
    id = 7
    identifier = "about-us"
    active = true
    store_ids = [0]
"#;

fn platform() -> MemoryPlatform {
    MemoryPlatform::from_toml_str(TWO_STORES).unwrap()
}

fn render(platform: &MemoryPlatform, request: &RequestContext) -> String {
    HreflangGenerator::new(platform, platform, platform)
        .render(request)
        .unwrap()
}

#[test]
fn only_cms_page_views_produce_output() {
    let platform = platform();
    for action in ["catalog_product_view", "checkout_index_index", ""] {
        assert_eq!(render(&platform, &RequestContext::other(action)), "");
    }
}

#[test]
fn full_block_for_an_all_stores_page() {
    let platform = platform();
    let block = render(&platform, &RequestContext::page_view("about-us"));

    assert_eq!(
        block,
        "<link rel=\"alternate\" hreflang=\"en-us\" href=\"https://example.com/about-us\"/>\n\
         <link rel=\"alternate\" hreflang=\"fr-fr\" href=\"https://example.com/fr/about-us\"/>\n"
    );
}

#[test]
fn page_inactive_in_current_store_is_silent() {
    let mut platform = platform();
    // Reassign the page away from store 1, which serves the request.
    platform.pages[0].store_ids = vec![StoreId(2)];

    assert_eq!(render(&platform, &RequestContext::page_view("about-us")), "");
}

#[test]
fn globally_inactive_page_is_silent() {
    let mut platform = platform();
    platform.pages[0].active = false;

    assert_eq!(render(&platform, &RequestContext::page_view("about-us")), "");
}

#[test]
fn single_store_page_emits_one_tag() {
    let mut platform = platform();
    platform.pages[0].store_ids = vec![StoreId(1)];

    let block = render(&platform, &RequestContext::page_view("about-us"));
    assert_eq!(block.lines().count(), 1);
    assert!(block.contains("en-us"));
    assert!(!block.contains("fr-fr"));
}

#[test]
fn unregistered_store_in_association_does_not_break_the_block() {
    let mut platform = platform();
    platform.pages[0].store_ids = vec![StoreId(1), StoreId(9), StoreId(2)];

    let block = render(&platform, &RequestContext::page_view("about-us"));
    assert_eq!(block.lines().count(), 2);
}

#[test]
fn leading_slash_identifier_still_joins_with_one_slash() {
    let mut platform = platform();
    platform.pages[0].identifier = "/about-us".to_string();

    let block = render(&platform, &RequestContext::page_view("/about-us"));
    assert!(block.contains(r#"href="https://example.com/about-us""#));
    assert!(block.contains(r#"href="https://example.com/fr/about-us""#));
}

#[test]
fn hostile_identifier_is_escaped_in_href() {
    let mut platform = platform();
    platform.pages[0].identifier = r#"about"><img src=x>"#.to_string();

    let block = render(
        &platform,
        &RequestContext::page_view(r#"about"><img src=x>"#),
    );
    assert!(!block.contains(r#"about"><img"#));
    assert!(block.contains("about&quot;&gt;&lt;img"));
}

#[test]
fn unresolvable_current_store_is_the_one_escaping_error() {
    let mut platform = platform();
    platform.current_store = None;

    let generator = HreflangGenerator::new(&platform, &platform, &platform);
    let result = generator.render(&RequestContext::page_view("about-us"));
    assert!(matches!(result, Err(HostError::NoCurrentStore)));
}
