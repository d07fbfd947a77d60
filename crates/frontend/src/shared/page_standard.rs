//! Page category constants for page standardization.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_paragraph--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a002_paragraph/` directory.

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Workflow page (translation session, review).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_paragraph--list"));
        assert!(!is_valid_page_id("a002_paragraph"));
        assert!(!is_valid_page_id("--list"));
    }
}
