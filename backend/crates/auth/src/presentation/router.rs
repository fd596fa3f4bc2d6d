//! Auth Router

use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::application::access_token::AccessTokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{require_bearer_token, require_role};

/// Public account routes: `/register`, `/login`
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

/// Admin user management: `/users`, `/users/{id}/role`
pub fn users_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let tokens = state.tokens.clone();

    let router = Router::new()
        .route("/users", get(handlers::list_users::<R>))
        .route("/users/{id}/role", put(handlers::change_role::<R>))
        .with_state(state);

    admin_only(router, tokens)
}

/// Guard every route of `router` with token verification then the admin role
/// gate. Neither guard reaches the handler or its storage on failure.
pub fn admin_only(router: Router, tokens: AccessTokenService) -> Router {
    router
        .route_layer(from_fn_with_state(UserRole::Admin, require_role))
        .route_layer(from_fn_with_state(tokens, require_bearer_token))
}

/// Every auth route, ready to be nested under `/api`
pub fn api_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    auth_router(state.clone()).merge(users_router(state))
}
