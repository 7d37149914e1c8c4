use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::verify_token;
use crate::domain::repositories::User;

/// Bearer token extractor for protected routes
///
/// Accepts `Authorization: bearer <token>` with the scheme in any case, then
/// resolves the token subject to a stored user.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(JwtAuth(user): JwtAuth) -> String {
///     format!("Hello {}", user.username)
/// }
/// ```
pub struct JwtAuth(pub User);

/// Returns the token of a `bearer <token>` header value
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

#[async_trait]
impl FromRequestParts<AppState> for JwtAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        let token = bearer_token(auth_header)
            .ok_or_else(|| ApiError::unauthorized("Invalid authorization format"))?;

        let claims = verify_token(token, &state.config.jwt_secret)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        let user = state
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| ApiError::unauthorized(format!("Unknown user: {}", claims.sub)))?;

        Ok(JwtAuth(user))
    }
}
