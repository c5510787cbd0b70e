#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search box text.
    SearchChanged(String),
    /// User clicked a category chip; selects it, or deselects it when it is
    /// already the active one.
    CategoryToggled(crate::CategoryId),
    /// User clicked the "all products" chip.
    CategoryCleared,
    /// User picked a price bucket from the dropdown.
    PriceFilterChanged(crate::PriceBucket),
    /// User picked a sort mode from the dropdown.
    SortChanged(crate::SortMode),
    /// User reset every filter back to defaults.
    FiltersCleared,
    /// User clicked a product card to open its detail overlay.
    DetailOpened(crate::ProductId),
    /// User closed the detail overlay (close button or backdrop).
    DetailClosed,
    /// Request, or re-request, the product catalog.
    ProductsRequested,
    /// Request, or re-request, the category list.
    CategoriesRequested,
    /// Engine completion for a products fetch.
    ProductsLoaded {
        request_id: crate::RequestId,
        products: Vec<crate::Product>,
    },
    /// Engine failure for a products fetch.
    ProductsFailed {
        request_id: crate::RequestId,
        error: crate::LoadError,
    },
    /// Engine completion for a categories fetch.
    CategoriesLoaded {
        request_id: crate::RequestId,
        categories: Vec<crate::Category>,
    },
    /// Engine failure for a categories fetch.
    CategoriesFailed {
        request_id: crate::RequestId,
        error: crate::LoadError,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
