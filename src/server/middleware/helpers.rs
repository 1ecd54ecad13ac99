//! Helper functions for middleware

use actix_web::http::header::HeaderMap;

/// Identifier used when no client address header is present.
///
/// All requests without an address share this one bucket.
pub const FALLBACK_IDENTIFIER: &str = "unknown";

const CF_CONNECTING_IP: &str = "cf-connecting-ip";
const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Derive the client identifier used for quota grouping.
///
/// Prefers the CDN-provided address and falls back to the first hop in
/// `X-Forwarded-For`.
pub fn client_identifier(headers: &HeaderMap) -> String {
    if let Some(ip) = header_str(headers, CF_CONNECTING_IP) {
        return ip;
    }

    if let Some(list) = header_str(headers, X_FORWARDED_FOR) {
        if let Some(first) = list.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    FALLBACK_IDENTIFIER.to_string()
}

/// Non-empty trimmed value of `name`, if the header is present and valid UTF-8.
fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
