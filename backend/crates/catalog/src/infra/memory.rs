//! In-Memory Repository Implementation
//!
//! Serial ids starting at 1, never reused after a delete.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entity::product::{Product, ProductDraft};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::error::{CatalogError, CatalogResult};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<Product>,
}

/// Shared in-memory product table; clones see the same rows
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    table: Arc<Mutex<Table>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CatalogResult<MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|_| CatalogError::Internal("product table lock poisoned".to_string()))
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.lock()?.rows.clone())
    }

    async fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let mut table = self.lock()?;
        table.next_id += 1;
        let product = draft.into_product(ProductId::new(table.next_id));
        table.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Option<Product>> {
        let mut table = self.lock()?;
        Ok(table.rows.iter_mut().find(|p| p.id == id).map(|row| {
            *row = draft.into_product(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let mut table = self.lock()?;
        let position = table.rows.iter().position(|p| p.id == id);
        Ok(position.map(|index| table.rows.remove(index)))
    }
}
