//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::{ListProductsUseCase, ProductAdminUseCase};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::error::CatalogResult;
use crate::presentation::dto::{ProductMutationResponse, ProductRequest, ProductResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<P>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<P>,
}

impl<P> CatalogAppState<P>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: P) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// GET /api/products
pub async fn list_products<P>(
    State(state): State<CatalogAppState<P>>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /api/products
pub async fn create_product<P>(
    State(state): State<CatalogAppState<P>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> CatalogResult<Json<ProductMutationResponse>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let draft = req.into_draft()?;

    let product = ProductAdminUseCase::new(state.repo.clone())
        .create(draft)
        .await?;

    Ok(Json(ProductMutationResponse {
        message: "Product created",
        product: product.into(),
    }))
}

/// PUT /api/products/{id}
pub async fn update_product<P>(
    State(state): State<CatalogAppState<P>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> CatalogResult<Json<ProductMutationResponse>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(req) = payload?;
    let draft = req.into_draft()?;

    let product = ProductAdminUseCase::new(state.repo.clone())
        .update(ProductId::new(id), draft)
        .await?;

    Ok(Json(ProductMutationResponse {
        message: "Product updated",
        product: product.into(),
    }))
}

/// DELETE /api/products/{id}
pub async fn delete_product<P>(
    State(state): State<CatalogAppState<P>>,
    id: Result<Path<i32>, PathRejection>,
) -> CatalogResult<Json<ProductMutationResponse>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = id?;

    let product = ProductAdminUseCase::new(state.repo.clone())
        .delete(ProductId::new(id))
        .await?;

    Ok(Json(ProductMutationResponse {
        message: "Product deleted",
        product: product.into(),
    }))
}
