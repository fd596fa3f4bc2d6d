//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::product::{Product, ProductDraft};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{price::Price, product_id::ProductId};
use crate::error::CatalogResult;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, category, price, image, description, popular
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, category, price, image, description, popular)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, category, price, image, description, popular
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.price.get())
        .bind(&draft.image)
        .bind(&draft.description)
        .bind(draft.popular)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_product())
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $1,
                category = $2,
                price = $3,
                image = $4,
                description = $5,
                popular = $6
            WHERE id = $7
            RETURNING id, name, category, price, image, description, popular
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.price.get())
        .bind(&draft.image)
        .bind(&draft.description)
        .bind(draft.popular)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            DELETE FROM products
            WHERE id = $1
            RETURNING id, name, category, price, image, description, popular
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    category: String,
    price: f64,
    image: String,
    description: String,
    popular: bool,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            category: self.category,
            price: Price::from_db(self.price),
            image: self.image,
            description: self.description,
            popular: self.popular,
        }
    }
}
