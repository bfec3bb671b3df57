//! Request body extraction for the board API.

use axum::{
    async_trait,
    body::{to_bytes, Body},
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::web::error::ApiError;

/// A body extractor that accepts either JSON or an HTML form.
///
/// Browsers posting the board's forms send
/// `application/x-www-form-urlencoded`; scripted clients send JSON. Both
/// deserialize into the same request type. A request without a body, or
/// with any other content type, yields a request whose fields are all
/// empty, so the handler still answers it. Only a body that is present
/// but malformed is rejected with 400.
///
/// # Example
///
/// ```ignore
/// use anonboard::web::dto::{CreateThreadRequest, Payload};
///
/// async fn create_thread(
///     Payload(req): Payload<CreateThreadRequest>,
/// ) -> Result<Json<ThreadResponse>, ApiError> {
///     // ...
/// }
/// ```
pub struct Payload<T>(pub T);

/// Largest body read, matching axum's default body limit.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// How a request body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Form,
    Json,
    /// No body, or a content type the board does not read.
    Empty,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else if content_type.starts_with("application/json") {
        BodyKind::Json
    } else {
        BodyKind::Empty
    }
}

/// Every field at its default, as for an empty JSON object.
fn empty_fields<T: DeserializeOwned>() -> Result<T, ApiError> {
    serde_json::from_str("{}").map_err(|e| ApiError::bad_request(format!("Invalid body: {}", e)))
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(&req);
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid body: {}", e)))?;

        if kind == BodyKind::Empty || bytes.is_empty() {
            return empty_fields().map(Payload);
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        match kind {
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid form body: {}", e)))?;
                Ok(Payload(value))
            }
            _ => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;
                Ok(Payload(value))
            }
        }
    }
}
