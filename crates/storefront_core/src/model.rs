pub type ProductId = u64;
pub type CategoryId = u64;

/// A named grouping of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A catalog item as fetched from the remote API.
///
/// Immutable once fetched; the whole list is replaced on reload. The creation
/// timestamp is kept as the raw RFC 3339 string the API sent; presentation
/// decides how (and whether) to display it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub images: Vec<String>,
    pub created_at: Option<String>,
}
