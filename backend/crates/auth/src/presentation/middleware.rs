//! Auth Middleware
//!
//! Bearer token verification and role gating for protected routes.
//!
//! ## Usage
//! ```rust,ignore
//! let admin = Router::new()
//!     .route("/users", get(list_users))
//!     .route_layer(from_fn_with_state(UserRole::Admin, require_role))
//!     .route_layer(from_fn_with_state(tokens, require_bearer_token));
//! ```
//! Layers added later run first, so the token is verified before the role
//! is checked.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;

use crate::application::access_token::AccessTokenService;
use crate::domain::entity::access_token::AuthenticatedUser;
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthError;

/// Verify `Authorization: Bearer <token>` and attach the identity.
/// No storage is touched.
pub async fn require_bearer_token(
    State(tokens): State<AccessTokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(request.headers()).ok_or(AuthError::Unauthenticated)?;

    let identity = tokens.verify(token)?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Reject any identity whose role differs from the required one
pub async fn require_role(
    State(required): State<UserRole>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = request
        .extensions()
        .get::<AuthenticatedUser>()
        .copied()
        .ok_or(AuthError::Unauthenticated)?;

    if identity.role != required {
        tracing::debug!(user_id = %identity.id, role = %identity.role, required = %required, "Role mismatch");
        return Err(AuthError::Forbidden);
    }

    Ok(next.run(request).await)
}

/// Identity attached by `require_bearer_token`
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    async fn whoami(user: AuthenticatedUser) -> String {
        user.id.to_string()
    }

    #[tokio::test]
    async fn test_extractor_without_verifier_is_unauthenticated() {
        let app = Router::new().route("/me", get(whoami));

        let response = app
            .oneshot(HttpRequest::builder().uri("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_role_gate_without_verifier_is_unauthenticated() {
        let app = Router::new()
            .route("/admin", get(|| async { "ok" }))
            .route_layer(axum::middleware::from_fn_with_state(UserRole::Admin, require_role));

        let response = app
            .oneshot(HttpRequest::builder().uri("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
