//! Actor identity extractor for axum.
//!
//! Authentication happens upstream. The gateway forwards the authenticated
//! platform user in the `x-actor-id` header and handlers read it through
//! [`RequireActor`].
//!
//! ```ignore
//! async fn my_handler(RequireActor(actor): RequireActor) -> impl IntoResponse {
//!     format!("Hello, {}!", actor)
//! }
//! ```

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::ActorId;

/// Header carrying the caller's actor id.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Extractor that requires an actor id on the request.
#[derive(Debug, Clone)]
pub struct RequireActor(pub ActorId);

#[async_trait]
impl<S> FromRequestParts<S> for RequireActor
where
    S: Send + Sync,
{
    type Rejection = ActorRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACTOR_HEADER)
            .ok_or(ActorRejection::Missing)?
            .to_str()
            .map_err(|_| ActorRejection::Invalid)?;

        ActorId::new(raw.trim())
            .map(RequireActor)
            .map_err(|_| ActorRejection::Invalid)
    }
}

/// Rejection type for a missing or malformed actor header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRejection {
    Missing,
    Invalid,
}

impl IntoResponse for ActorRejection {
    fn into_response(self) -> Response {
        let message = match self {
            ActorRejection::Missing => "Missing x-actor-id header",
            ActorRejection::Invalid => "Invalid x-actor-id header",
        };

        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "code": "BAD_REQUEST",
                "message": message,
            })),
        )
            .into_response()
    }
}
