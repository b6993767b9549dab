//! Client-side preference storage
//!
//! The theme flag round-trips through a cookie so the server can render the
//! right palette on first paint.

use axum::http::{header, HeaderMap};

use crate::theme::{Theme, THEME_STORAGE_KEY};

/// One year
const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Look up a cookie value across all `Cookie` headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

pub fn stored_theme(headers: &HeaderMap) -> Theme {
    Theme::from_stored(cookie_value(headers, THEME_STORAGE_KEY))
}

/// `Set-Cookie` value persisting the given theme.
pub fn theme_cookie(theme: Theme) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        THEME_STORAGE_KEY,
        theme.to_stored(),
        COOKIE_MAX_AGE_SECS
    )
}

/// Only same-origin absolute paths are accepted as redirect targets.
pub fn sanitize_return_to(target: Option<&str>) -> &str {
    match target.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}
