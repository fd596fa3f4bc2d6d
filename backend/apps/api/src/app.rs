//! Router Composition
//!
//! Mounts the auth and catalog routers under `/api`, guards every admin
//! route, and serves the storefront's static files for everything else.

use auth::domain::repository::UserRepository;
use auth::{AuthAppState, AuthConfig, admin_only};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use catalog::domain::repository::ProductRepository;
use catalog::CatalogAppState;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

/// `/api/*` plus the static fallback. Layers are added by the caller.
pub fn build_router<U, P>(users: U, products: P, auth_config: AuthConfig, static_dir: &str) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let auth_state = AuthAppState::new(users, auth_config);
    let tokens = auth_state.tokens.clone();
    let catalog_state = CatalogAppState::new(products);

    let api = auth::api_router(auth_state)
        .merge(catalog::public_router(catalog_state.clone()))
        .merge(admin_only(catalog::admin_router(catalog_state), tokens))
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir))
}

/// Known path, unsupported method. Runs outside the admin guards.
async fn method_not_allowed() -> AppError {
    AppError::new(ErrorKind::MethodNotAllowed, "Method not allowed")
}

/// Allow-list when origins are configured, otherwise any origin
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if allowed.is_empty() {
        cors.allow_origin(AllowOrigin::any())
    } else {
        cors.allow_origin(allowed).allow_credentials(true)
    }
}
