//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  : `"{entity}--{category}"`, e.g. `"a002_paragraph--list"`
//!   - `data-page-category`  : one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `list`    → `page`
/// - `usecase` → `page page--usecase`
/// - `system`  → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let class = match category {
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
