//! Shared fixtures for the cms-hreflang test suite.
//!
//! The standard fixture is a two-store platform:
//!
//! | Store | Code | Locale  | Store code in URLs |
//! |-------|------|---------|--------------------|
//! | 1     | `en` | `en_US` | no                 |
//! | 2     | `fr` | `fr_FR` | yes                |
//!
//! Both share the base URL `https://example.com`, and the current request is
//! served under store 1. Tests mutate the returned platform freely — each
//! call builds a fresh one.

use crate::host::{LOCALE_CODE, USE_STORE_CODE};
use crate::memory::{MemoryPlatform, PageEntry, StoreEntry};
use crate::types::{PageId, StoreId};
use std::collections::BTreeMap;

/// The two-store platform with no pages declared.
pub fn two_store_platform() -> MemoryPlatform {
    MemoryPlatform {
        current_store: Some(StoreId(1)),
        stores: vec![
            StoreEntry {
                id: StoreId(1),
                code: "en".to_string(),
                base_url: "https://example.com".to_string(),
                settings: BTreeMap::from([(LOCALE_CODE.to_string(), "en_US".to_string())]),
            },
            StoreEntry {
                id: StoreId(2),
                code: "fr".to_string(),
                base_url: "https://example.com".to_string(),
                settings: BTreeMap::from([
                    (LOCALE_CODE.to_string(), "fr_FR".to_string()),
                    (USE_STORE_CODE.to_string(), "1".to_string()),
                ]),
            },
        ],
        pages: Vec::new(),
    }
}

/// The two-store platform plus one page row (ID 7) assigned to the given
/// stores. `0` in `store_ids` is the all-store-views sentinel.
pub fn two_store_platform_with_page(
    identifier: &str,
    active: bool,
    store_ids: &[u32],
) -> MemoryPlatform {
    let mut platform = two_store_platform();
    platform.pages.push(PageEntry {
        id: PageId(7),
        identifier: identifier.to_string(),
        active,
        store_ids: store_ids.iter().map(|&id| StoreId(id)).collect(),
    });
    platform
}
