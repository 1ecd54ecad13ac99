//! Upstream proxy handler
//!
//! Every request that clears the rate limiter is relayed to the configured
//! upstream service with its method, path, query string, headers, and body
//! intact. The upstream's response travels back the same way.

use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::debug;

/// Headers that describe a single hop and are never relayed.
const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

/// Relay one request to the upstream and return its response.
pub async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, GatewayError> {
    let upstream = state.config.upstream();

    let mut url = format!("{}{}", upstream.base(), req.path());
    if let Some(query) = req.uri().query() {
        url.push('?');
        url.push_str(query);
    }

    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| GatewayError::bad_request(format!("Unsupported method: {}", req.method())))?;

    // Host and content-length are rebuilt by the client for the new hop
    let mut headers = reqwest::header::HeaderMap::new();
    for (name, value) in req.headers() {
        if skip_request_header(name.as_str()) {
            continue;
        }
        if let (Ok(name), Ok(value)) = (
            reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes()),
            reqwest::header::HeaderValue::from_bytes(value.as_bytes()),
        ) {
            headers.insert(name, value);
        }
    }

    debug!("Forwarding {} {} to {}", req.method(), req.path(), url);

    let upstream_response = state
        .upstream
        .request(method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = StatusCode::from_u16(upstream_response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);

    let mut builder = HttpResponse::build(status);
    for (name, value) in upstream_response.headers() {
        if skip_response_header(name.as_str()) {
            continue;
        }
        builder.insert_header((name.as_str(), value.as_bytes()));
    }

    let bytes = upstream_response.bytes().await?;
    Ok(builder.body(bytes))
}

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP_HEADERS.contains(&name)
}

fn skip_request_header(name: &str) -> bool {
    is_hop_by_hop(name) || name == "host" || name == "content-length"
}

fn skip_response_header(name: &str) -> bool {
    is_hop_by_hop(name) || name == "content-length"
}
