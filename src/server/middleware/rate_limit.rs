//! Rate limiting middleware

use crate::core::rate_limiter::{RateLimitDecision, RateLimiter};
use crate::server::middleware::helpers::client_identifier;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use futures::future::{ready, Ready};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use tracing::warn;

/// Header reporting the window's request budget
pub const HEADER_LIMIT: &str = "x-ratelimit-limit";
/// Header reporting requests left in the window
pub const HEADER_REMAINING: &str = "x-ratelimit-remaining";
/// Header reporting when the window resets (epoch seconds)
pub const HEADER_RESET: &str = "x-ratelimit-reset";
/// Header telling a rejected client how long to wait (seconds)
pub const HEADER_RETRY_AFTER: &str = "retry-after";

/// Rate limit middleware for Actix-web
///
/// Wraps a scope of routes and runs the admission check before any handler
/// in that scope. Admitted requests pass through with the rate limit headers
/// attached to whatever the handler returns; rejected requests are answered
/// with a 429 directly and never reach the handler.
pub struct RateLimitMiddleware {
    limiter: RateLimiter,
    enabled: bool,
}

impl RateLimitMiddleware {
    pub fn new(limiter: RateLimiter, enabled: bool) -> Self {
        Self { limiter, enabled }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RateLimitMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service,
            limiter: self.limiter.clone(),
            enabled: self.enabled,
        }))
    }
}

/// Service implementation for rate limit middleware
pub struct RateLimitMiddlewareService<S> {
    service: S,
    limiter: RateLimiter,
    enabled: bool,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.enabled {
            let fut = self.service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        let identifier = client_identifier(req.headers());
        let path = req.path().to_string();
        let decision = self.limiter.check_and_record(&identifier, &path);

        if !decision.allowed {
            warn!(
                "Rate limit exceeded for {} on {}: {} of {} requests this window",
                identifier, path, decision.current_count, decision.limit
            );
            let response = RateLimitExceeded::new(decision).error_response();
            return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            apply_rate_limit_headers(res.headers_mut(), &decision);
            Ok(res.map_into_left_body())
        })
    }
}

/// Attach the standard rate limit headers to a response.
pub(crate) fn apply_rate_limit_headers(map: &mut HeaderMap, decision: &RateLimitDecision) {
    map.insert(
        HeaderName::from_static(HEADER_LIMIT),
        HeaderValue::from(decision.limit),
    );
    map.insert(
        HeaderName::from_static(HEADER_REMAINING),
        HeaderValue::from(decision.remaining),
    );
    map.insert(
        HeaderName::from_static(HEADER_RESET),
        HeaderValue::from(decision.reset_at_secs),
    );
}

/// Error produced when a client exhausts its request window.
///
/// Rendering this as an HTTP response yields the 429 with the rate limit
/// headers, a `Retry-After` hint, and a JSON body.
#[derive(Debug)]
pub struct RateLimitExceeded {
    decision: RateLimitDecision,
}

impl RateLimitExceeded {
    pub fn new(decision: RateLimitDecision) -> Self {
        Self { decision }
    }
}

impl fmt::Display for RateLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rate limit of {} requests exceeded, retry after {}s",
            self.decision.limit,
            self.decision.retry_after_secs.unwrap_or(1)
        )
    }
}

impl ResponseError for RateLimitExceeded {
    fn status_code(&self) -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::TooManyRequests().json(serde_json::json!({
            "success": false,
            "message": "Too many requests. Please try again later."
        }));

        apply_rate_limit_headers(response.headers_mut(), &self.decision);
        if let Some(retry_after) = self.decision.retry_after_secs {
            response.headers_mut().insert(
                HeaderName::from_static(HEADER_RETRY_AFTER),
                HeaderValue::from(retry_after),
            );
        }

        response
    }
}
