//! Application Layer
//!
//! Use cases for browsing and administering the catalog.

pub mod list_products;
pub mod manage_products;

// Re-exports
pub use list_products::ListProductsUseCase;
pub use manage_products::ProductAdminUseCase;
