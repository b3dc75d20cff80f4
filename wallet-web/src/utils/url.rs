//! URL utility functions for reading query parameters

use std::collections::HashMap;

use web_sys::window;

/// Parse a `?key=value&flag` query string into a map.
///
/// Values are URL-decoded. A key without `=` maps to an empty string; later
/// duplicates win.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            let decoded_value = urlencoding::decode(value)
                .unwrap_or_else(|_| value.into())
                .into_owned();
            (key.to_string(), decoded_value)
        })
        .collect()
}

/// Get all query parameters from the current URL
pub fn get_query_params() -> HashMap<String, String> {
    window()
        .and_then(|window| window.location().search().ok())
        .map(|search| parse_query(&search))
        .unwrap_or_default()
}
