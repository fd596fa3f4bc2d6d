use kernel::id::Id;

/// Marker for product keys
pub struct ProductMarker;

/// `products.id`
pub type ProductId = Id<ProductMarker>;
