//! Catalog Router
//!
//! Split into a public and an admin half so the caller can put its own
//! access guard on the admin half before merging.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::domain::repository::ProductRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Read-only storefront routes: `GET /products`
pub fn public_router<P>(state: CatalogAppState<P>) -> Router
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/products", get(handlers::list_products::<P>))
        .with_state(state)
}

/// Mutating routes; unguarded until the caller layers them
pub fn admin_router<P>(state: CatalogAppState<P>) -> Router
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/products", post(handlers::create_product::<P>))
        .route(
            "/products/{id}",
            put(handlers::update_product::<P>).delete(handlers::delete_product::<P>),
        )
        .with_state(state)
}
