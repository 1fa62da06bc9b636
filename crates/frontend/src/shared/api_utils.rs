//! Helpers for reaching the remote product store.

/// Base URL of the product store.
///
/// Built from the current window location, with the store listening on
/// port 3000 next to wherever the app is served from.
///
/// # Returns
/// - Store base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full store URL from a resource path (e.g. "/products").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
