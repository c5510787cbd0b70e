use crate::{CategoryId, FilterCriteria, ProductId};

/// Everything the shell needs to render one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub catalog: CatalogView,
    pub category_bar: CategoryBarView,
    pub criteria: FilterCriteria,
    pub detail: Option<ProductDetailView>,
    pub dirty: bool,
}

/// The product grid: a spinner, a load error with retry, or the card rows.
///
/// `total` is the size of the unfiltered catalog, so the shell can say
/// "showing 3 of 120".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogView {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready {
        cards: Vec<ProductCardView>,
        total: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category_name: String,
    pub description: String,
    pub thumbnail: Option<String>,
}

/// The category chip row. Fails independently of the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryBarView {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready {
        chips: Vec<CategoryChipView>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChipView {
    pub id: CategoryId,
    pub name: String,
    pub selected: bool,
}

/// Full projection of the product behind the open detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailView {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category_name: String,
    pub description: String,
    pub images: Vec<String>,
    pub created_at: Option<String>,
}
