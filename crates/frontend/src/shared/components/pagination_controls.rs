use crate::shared::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// 1-based inclusive range of rows shown on `page`, `(0, 0)` for an empty list
pub fn shown_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let size = page_size.max(1);
    let first = (page.max(1) - 1) * size + 1;
    (first.min(total), (first + size - 1).min(total))
}

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-based, matching `ListViewController::page()`.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let (first, last) =
                        shown_range(current_page.get(), page_size.get(), total_count.get());
                    format!(
                        "{}-{} of {} · page {} / {}",
                        first,
                        last,
                        total_count.get(),
                        current_page.get(),
                        total_pages.get().max(1)
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev)
                        .parse()
                        .unwrap_or(DEFAULT_PAGE_SIZE);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_range() {
        assert_eq!(shown_range(1, 25, 0), (0, 0));
        assert_eq!(shown_range(1, 25, 7), (1, 7));
        assert_eq!(shown_range(2, 25, 60), (26, 50));
        assert_eq!(shown_range(3, 25, 60), (51, 60));
    }
}
