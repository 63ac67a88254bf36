use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use medipredict_core::domain::authentication::{
    ports::AuthService,
    value_objects::{AuthorizeRequestInput, Identity},
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves a Bearer token into an `Identity` request extension.
/// Requests without a valid token continue anonymously; handlers that need a
/// caller ask for [`RequiredIdentity`].
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(&req).map(str::to_string) {
        match state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
        {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
            }
            Err(e) => debug!("bearer token rejected: {}", e),
        }
    }

    next.run(req).await
}

pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Authentication required: provide a Bearer token".to_string(),
                )
            })
    }
}
