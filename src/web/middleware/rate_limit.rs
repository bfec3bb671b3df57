//! Rate limiting middleware.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc, time::Duration};

use crate::web::error::ApiError;

/// Interval between sweeps of idle per-IP buckets.
const CLEANUP_INTERVAL_SECS: u64 = 300;

/// State for rate limiting.
pub struct RateLimitState {
    /// Per-IP limiter for the board API.
    api_limiter: DefaultKeyedRateLimiter<String>,
}

impl RateLimitState {
    /// Create a new rate limit state.
    pub fn new(api_rate_limit: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(api_rate_limit).unwrap_or(NonZeroU32::MIN));
        Self {
            api_limiter: RateLimiter::keyed(quota),
        }
    }

    /// Check if a request is allowed for the board API.
    pub fn check_api(&self, ip: &str) -> bool {
        self.api_limiter.check_key(&ip.to_string()).is_ok()
    }

    /// Forget clients whose buckets are full again.
    pub fn cleanup(&self) {
        self.api_limiter.retain_recent();
        self.api_limiter.shrink_to_fit();
    }

    /// Start a background task to periodically clean up old entries.
    pub fn start_cleanup_task(self: Arc<Self>) {
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(CLEANUP_INTERVAL_SECS)).await;
                self.cleanup();
                tracing::debug!(clients = self.api_limiter.len(), "Rate limiter cleaned up");
            }
        });
    }
}

/// Extract client IP from request.
fn get_client_ip(req: &Request<Body>) -> String {
    // Behind a reverse proxy the first forwarded address is the client
    if let Some(forwarded) = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(ip) = forwarded.split(',').next() {
            return ip.trim().to_string();
        }
    }

    if let Some(real_ip) = req
        .headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
    {
        return real_ip.to_string();
    }

    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown".to_string()
}

/// Rate limiting middleware for the board API.
pub async fn api_rate_limit(
    state: Arc<RateLimitState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let ip = get_client_ip(&req);

    if !state.check_api(&ip) {
        tracing::warn!(ip = %ip, "API rate limit exceeded");
        return ApiError::too_many_requests("Too many requests. Please try again later.")
            .into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware, routing::get, Router};
    use tower::util::ServiceExt;

    #[test]
    fn test_zero_limit_still_admits_one_request() {
        let state = RateLimitState::new(0);
        assert!(state.check_api("127.0.0.1"));
        assert!(!state.check_api("127.0.0.1"));
    }

    #[test]
    fn test_api_rate_limit() {
        let state = RateLimitState::new(3);

        assert!(state.check_api("127.0.0.1"));
        assert!(state.check_api("127.0.0.1"));
        assert!(state.check_api("127.0.0.1"));

        // 4th request should fail
        assert!(!state.check_api("127.0.0.1"));

        // Different IP should work
        assert!(state.check_api("192.168.1.1"));
    }

    #[test]
    fn test_cleanup_keeps_active_clients_limited() {
        let state = RateLimitState::new(1);
        assert!(state.check_api("127.0.0.1"));
        state.cleanup();
        assert!(!state.check_api("127.0.0.1"));
    }

    #[test]
    fn test_get_client_ip_headers() {
        let req = Request::builder()
            .header("X-Forwarded-For", "10.0.0.1, 10.0.0.2")
            .body(Body::empty())
            .unwrap();
        assert_eq!(get_client_ip(&req), "10.0.0.1");

        let req = Request::builder()
            .header("X-Real-IP", "10.0.0.3")
            .body(Body::empty())
            .unwrap();
        assert_eq!(get_client_ip(&req), "10.0.0.3");

        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(get_client_ip(&req), "unknown");
    }

    #[tokio::test]
    async fn test_middleware_rejects_with_429() {
        let state = Arc::new(RateLimitState::new(1));
        let app = Router::new()
            .route("/", get(|| async { "OK" }))
            .layer(middleware::from_fn(move |req, next| {
                let state = state.clone();
                api_rate_limit(state, req, next)
            }));

        let first = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
