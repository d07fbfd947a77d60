//! ListViewController: filter → sort → paginate over an in-memory snapshot.
//!
//! The controller owns the fetched collection and the [`FilterState`] of one
//! list page. Every setter recomputes the visible slice eagerly; the raw
//! collection is never reordered or mutated by a recompute.

use std::collections::BTreeMap;

use super::config::DEFAULT_PAGE_SIZE;
use super::list_utils::ListItem;

/// Sentinel value that disables an equality filter
pub const FILTER_ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// User-selected search, filters and ordering of one list page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub equality_filters: BTreeMap<String, String>,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
}

impl FilterState {
    /// Selected value of a filter, or [`FILTER_ALL`] when it is inactive
    pub fn filter_or_all(&self, name: &str) -> String {
        self.equality_filters
            .get(name)
            .cloned()
            .unwrap_or_else(|| FILTER_ALL.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ListViewController<T: ListItem> {
    items: Vec<T>,
    filter: FilterState,
    page: usize,
    page_size: usize,
    total_count: usize,
    visible: Vec<T>,
}

impl<T: ListItem> Default for ListViewController<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T: ListItem> ListViewController<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filter: FilterState::default(),
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
            visible: Vec::new(),
        }
    }

    /// Initial ordering, applied without the toggle rule of [`Self::set_sort`]
    pub fn with_sort(mut self, key: &str, direction: SortDirection) -> Self {
        self.filter.sort_key = Some(key.to_string());
        self.filter.sort_direction = direction;
        self.recompute();
        self
    }

    /// Replaces the raw collection with a fresh snapshot
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute();
    }

    /// Replaces the item with the same id, or appends it
    pub fn replace_item(&mut self, item: T) {
        let id = item.item_id();
        match self.items.iter_mut().find(|i| i.item_id() == id) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
        self.recompute();
    }

    pub fn remove_item(&mut self, id: &T::Id) {
        self.items.retain(|i| &i.item_id() != id);
        self.recompute();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.filter.search_term = term.to_string();
        self.page = 1;
        self.recompute();
    }

    /// `value == FILTER_ALL` (or empty) disables the filter
    pub fn set_equality_filter(&mut self, name: &str, value: &str) {
        if value.is_empty() || value == FILTER_ALL {
            self.filter.equality_filters.remove(name);
        } else {
            self.filter
                .equality_filters
                .insert(name.to_string(), value.to_string());
        }
        self.page = 1;
        self.recompute();
    }

    /// Reselecting the current key toggles the direction; a new key takes `direction`
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        if self.filter.sort_key.as_deref() == Some(key) {
            self.filter.sort_direction = self.filter.sort_direction.toggled();
        } else {
            self.filter.sort_key = Some(key.to_string());
            self.filter.sort_direction = direction;
        }
        self.recompute();
    }

    /// Resets search, filters and sort to defaults
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.page = 1;
        self.recompute();
    }

    /// 1-based; clamped to the available pages on recompute
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.recompute();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        let filter = &self.filter;
        let mut matched: Vec<&T> = self
            .items
            .iter()
            .filter(|item| item.matches_filter(&filter.search_term))
            .filter(|item| {
                filter
                    .equality_filters
                    .iter()
                    .all(|(name, value)| item.filter_value(name).as_deref() == Some(value.as_str()))
            })
            .collect();

        if let Some(key) = filter.sort_key.as_deref() {
            let ascending = filter.sort_direction.is_ascending();
            // slice::sort_by is stable: equal keys keep collection order
            matched.sort_by(|a, b| {
                let cmp = a.compare_by_field(b, key);
                if ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            });
        }

        self.total_count = matched.len();
        self.page = self.page.clamp(1, self.total_pages());
        let start = (self.page - 1) * self.page_size;
        self.visible = matched
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();
    }

    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Items passing the filters, across all pages
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// At least 1, so an empty result still has a (blank) first page
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size).max(1)
    }

    /// Sorted distinct values of a filter field in the raw collection
    pub fn distinct_values(&self, name: &str) -> Vec<String> {
        let mut values: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| item.filter_value(name))
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{Filterable, Searchable, SortValue, Sortable};

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        text: String,
        kind: &'static str,
        position: u32,
    }

    fn row(id: i64, text: &str, kind: &'static str, position: u32) -> Row {
        Row {
            id,
            text: text.to_string(),
            kind,
            position,
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.text.as_str()]
        }
    }

    impl Filterable for Row {
        fn filter_value(&self, name: &str) -> Option<String> {
            match name {
                "kind" => Some(self.kind.to_string()),
                _ => None,
            }
        }
    }

    impl Sortable for Row {
        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "position" => SortValue::Number(self.position as f64),
                "text" => SortValue::Text(self.text.clone()),
                "kind" => SortValue::Text(self.kind.to_string()),
                _ => SortValue::Missing,
            }
        }
    }

    impl ListItem for Row {
        type Id = i64;

        fn item_id(&self) -> i64 {
            self.id
        }
    }

    fn ids(c: &ListViewController<Row>) -> Vec<i64> {
        c.visible().iter().map(|r| r.id).collect()
    }

    fn positions(c: &ListViewController<Row>) -> Vec<u32> {
        c.visible().iter().map(|r| r.position).collect()
    }

    fn sample() -> Vec<Row> {
        vec![
            row(1, "Alpha test", "Body", 2),
            row(2, "بيتا نص", "Title", 1),
            row(3, "Gamma", "Body", 3),
        ]
    }

    #[test]
    fn test_sort_by_position_then_toggle() {
        let mut c = ListViewController::new(10);
        c.set_items(sample());
        c.set_sort("position", SortDirection::Ascending);
        assert_eq!(positions(&c), vec![1, 2, 3]);

        c.set_sort("position", SortDirection::Ascending);
        assert_eq!(c.filter_state().sort_direction, SortDirection::Descending);
        assert_eq!(positions(&c), vec![3, 2, 1]);
    }

    #[test]
    fn test_new_key_resets_direction() {
        let mut c = ListViewController::new(10);
        c.set_items(sample());
        c.set_sort("position", SortDirection::Ascending);
        c.set_sort("position", SortDirection::Ascending);
        c.set_sort("text", SortDirection::Ascending);
        assert_eq!(c.filter_state().sort_key.as_deref(), Some("text"));
        assert_eq!(c.filter_state().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_search_non_latin_term() {
        let mut c = ListViewController::new(10);
        c.set_items(sample());
        c.set_search_term("بيتا");
        assert_eq!(ids(&c), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_empty_matches_all() {
        let mut c = ListViewController::new(10);
        c.set_items(sample());
        c.set_search_term("ALPHA");
        assert_eq!(ids(&c), vec![1]);
        c.set_search_term("");
        assert_eq!(ids(&c), vec![1, 2, 3]);
        c.set_search_term("   ");
        assert_eq!(c.total_count(), 3);
    }

    #[test]
    fn test_equality_filter_and_all_sentinel() {
        let mut c = ListViewController::new(10);
        c.set_items(sample());
        c.set_equality_filter("kind", "Body");
        assert_eq!(ids(&c), vec![1, 3]);
        c.set_equality_filter("kind", FILTER_ALL);
        assert_eq!(ids(&c), vec![1, 2, 3]);
        assert_eq!(c.filter_state().filter_or_all("kind"), FILTER_ALL);
    }

    #[test]
    fn test_unknown_filter_field_excludes_everything() {
        let mut c = ListViewController::new(10);
        c.set_items(sample());
        c.set_equality_filter("project", "7");
        assert!(c.visible().is_empty());
        assert_eq!(c.total_pages(), 1);
    }

    #[test]
    fn test_filter_soundness_and_completeness() {
        let items: Vec<Row> = (0..40)
            .map(|i| {
                let kind = if i % 3 == 0 { "Title" } else { "Body" };
                let text = if i % 2 == 0 { format!("even {}", i) } else { format!("odd {}", i) };
                row(i, &text, kind, (40 - i) as u32)
            })
            .collect();
        let mut c = ListViewController::new(1000);
        c.set_items(items.clone());
        c.set_search_term("EVEN");
        c.set_equality_filter("kind", "Title");

        let expected: Vec<i64> = items
            .iter()
            .filter(|r| r.text.contains("even") && r.kind == "Title")
            .map(|r| r.id)
            .collect();
        assert_eq!(ids(&c), expected);
    }

    #[test]
    fn test_stable_sort_keeps_collection_order_for_ties() {
        let mut c = ListViewController::new(10);
        c.set_items(vec![
            row(1, "x", "Body", 1),
            row(2, "y", "Title", 1),
            row(3, "z", "Body", 1),
            row(4, "w", "Title", 1),
        ]);
        c.set_sort("kind", SortDirection::Ascending);
        assert_eq!(ids(&c), vec![1, 3, 2, 4]);
        c.set_sort("kind", SortDirection::Ascending);
        assert_eq!(ids(&c), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_recompute_is_idempotent_and_does_not_touch_raw() {
        let mut c = ListViewController::new(2);
        c.set_items(sample());
        c.set_sort("position", SortDirection::Descending);
        let first = c.visible().to_vec();
        c.recompute();
        assert_eq!(c.visible(), first.as_slice());
        assert_eq!(c.items(), sample().as_slice());
    }

    #[test]
    fn test_page_beyond_last_clamps() {
        let items: Vec<Row> = (1..=5).map(|i| row(i, "p", "Body", i as u32)).collect();
        let mut c = ListViewController::new(10);
        c.set_items(items);
        c.set_page(1);
        let first_page = c.visible().to_vec();
        c.set_page(99);
        assert_eq!(c.page(), 1);
        assert_eq!(c.visible(), first_page.as_slice());
        assert_eq!(c.visible().len(), 5);
    }

    #[test]
    fn test_page_slices_and_last_page() {
        let items: Vec<Row> = (1..=12).map(|i| row(i, "p", "Body", i as u32)).collect();
        let mut c = ListViewController::new(5);
        c.set_items(items);
        assert_eq!(c.total_pages(), 3);
        c.set_page(2);
        assert_eq!(ids(&c), vec![6, 7, 8, 9, 10]);
        c.set_page(7);
        assert_eq!(c.page(), 3);
        assert_eq!(ids(&c), vec![11, 12]);
        c.set_page(0);
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let items: Vec<Row> = (1..=12).map(|i| row(i, "p", "Body", i as u32)).collect();
        let mut c = ListViewController::new(5);
        c.set_items(items);
        c.set_page(3);
        c.set_page_size(0);
        assert_eq!(c.page_size(), 1);
        assert_eq!(c.page(), 1);
        assert_eq!(c.total_pages(), 12);
    }

    #[test]
    fn test_empty_collection() {
        let mut c: ListViewController<Row> = ListViewController::new(10);
        c.recompute();
        assert!(c.visible().is_empty());
        c.set_page(5);
        assert_eq!(c.page(), 1);
        c.set_search_term("anything");
        assert_eq!(c.total_count(), 0);
    }

    #[test]
    fn test_replace_and_remove_by_id() {
        let mut c = ListViewController::new(10);
        c.set_items(sample());
        c.replace_item(row(3, "Gamma edited", "Title", 3));
        c.replace_item(row(4, "Delta", "Body", 4));
        assert_eq!(c.items().len(), 4);
        assert_eq!(c.items()[2].text, "Gamma edited");
        c.remove_item(&1);
        assert_eq!(ids(&c), vec![2, 3, 4]);
    }

    #[test]
    fn test_distinct_values() {
        let mut c = ListViewController::new(10);
        c.set_items(sample());
        assert_eq!(c.distinct_values("kind"), vec!["Body".to_string(), "Title".to_string()]);
    }
}
