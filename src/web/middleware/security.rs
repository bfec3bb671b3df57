//! Security headers middleware.

use axum::{
    body::Body,
    http::{header::HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Security headers middleware.
///
/// Adds the following headers to all responses:
/// - X-Frame-Options: SAMEORIGIN
/// - X-DNS-Prefetch-Control: off
/// - Referrer-Policy: same-origin
/// - X-Content-Type-Options: nosniff
pub async fn security_headers(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    // Only allow framing by our own pages
    headers.insert("X-Frame-Options", HeaderValue::from_static("SAMEORIGIN"));

    headers.insert("X-DNS-Prefetch-Control", HeaderValue::from_static("off"));

    // Referrer is only sent to our own pages
    headers.insert("Referrer-Policy", HeaderValue::from_static("same-origin"));

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    response
}
