//! Product Administration Use Case
//!
//! Create, replace and delete. Callers are expected to have passed the admin
//! role gate already.

use std::sync::Arc;

use crate::domain::entity::product::{Product, ProductDraft};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::error::{CatalogError, CatalogResult};

pub struct ProductAdminUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> ProductAdminUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let product = self.product_repo.create(draft).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Product> {
        let product = self
            .product_repo
            .update(id, draft)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;
        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    pub async fn delete(&self, id: ProductId) -> CatalogResult<Product> {
        let product = self
            .product_repo
            .delete(id)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;
        tracing::info!(product_id = %product.id, "Product deleted");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ListProductsUseCase;
    use crate::infra::memory::InMemoryProductRepository;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft::new(
            name.to_string(),
            "soups".to_string(),
            Some(100.0),
            String::new(),
            String::new(),
            false,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let admin = ProductAdminUseCase::new(repo.clone());

        let created = admin.create(draft("Borscht")).await.unwrap();
        let updated = admin.update(created.id, draft("Solyanka")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Solyanka");

        let deleted = admin.delete(created.id).await.unwrap();
        assert_eq!(deleted.name, "Solyanka");

        let remaining = ListProductsUseCase::new(repo).execute().await.unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_not_found() {
        let admin = ProductAdminUseCase::new(Arc::new(InMemoryProductRepository::new()));
        assert!(matches!(
            admin.update(ProductId::new(999), draft("X")).await,
            Err(CatalogError::ProductNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_not_found() {
        let admin = ProductAdminUseCase::new(Arc::new(InMemoryProductRepository::new()));
        assert!(matches!(
            admin.delete(ProductId::new(1)).await,
            Err(CatalogError::ProductNotFound)
        ));
    }
}
