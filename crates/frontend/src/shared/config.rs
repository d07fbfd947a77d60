//! Client-side constants shared by the pages.

/// Autosave period of the translation session
pub const AUTOSAVE_INTERVAL_MS: u32 = 30_000;

/// Delay between a successful submit and leaving the session page
pub const SUBMIT_REDIRECT_DELAY_MS: u32 = 1_500;

pub const DEFAULT_PAGE_SIZE: usize = 25;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// localStorage key that overrides the computed API base URL
pub const API_BASE_STORAGE_KEY: &str = "api_base_url";
