//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::API_BASE_STORAGE_KEY;

/// Get the base URL for API requests
///
/// A value stored under [`API_BASE_STORAGE_KEY`] in localStorage wins.
/// Otherwise the URL is built from the current window location, using
/// port 3000 and the `/api` prefix of the backend.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    let overridden = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten())
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty());
    if let Some(url) = overridden {
        return url;
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000/api", protocol, hostname)
}

/// Join a base URL and a path, tolerating duplicate or missing slashes
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://h:3000/api/", "/Projects"), "http://h:3000/api/Projects");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Encode one dynamic path segment (status names, ids typed by users)
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000/api", "Projects"), "http://h:3000/api/Projects");
        assert_eq!(join_url("http://h:3000/api/", "/Projects/1"), "http://h:3000/api/Projects/1");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("InProgress"), "InProgress");
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
    }
}
