// src/utils.rs
use web_sys::window;

/// Base path the app is served under, taken from the current location
/// (everything up to and including the last `/`).
pub fn get_base_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| base_of(&path).to_string())
        .unwrap_or_else(|| String::from("/"))
}

/// Build a resource URL relative to the page's base path.
pub fn resource_url(path: &str) -> String {
    resolve_url(&get_base_path(), path)
}

/// Join `path` onto `base`. Absolute URLs, protocol-relative URLs, data URLs
/// and root-relative paths are returned unchanged.
pub fn resolve_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if is_absolute(path) || path.starts_with('/') {
        return path.to_string();
    }
    let clean_path = path.trim_start_matches("./");
    let base = base_of(base);
    if base.is_empty() {
        format!("/{}", clean_path)
    } else {
        format!("{}{}", base, clean_path)
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("//")
        || url.starts_with("data:")
        || url
            .split_once("://")
            .map(|(scheme, _)| {
                !scheme.is_empty()
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
            })
            .unwrap_or(false)
}

fn base_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "",
    }
}
