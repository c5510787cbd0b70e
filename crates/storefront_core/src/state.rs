use crate::filter::filter_and_sort;
use crate::view_model::{
    AppViewModel, CatalogView, CategoryBarView, CategoryChipView, ProductCardView,
    ProductDetailView,
};
use crate::{Category, FilterCriteria, LoadError, PriceBucket, Product, ProductId, Resource, SortMode};

pub type RequestId = u64;

/// Whole application state; mutated only through `update`.
///
/// The two resources are independent fetch state machines. Each records the
/// id of its most recently issued request; completions carrying any other id
/// are stale and must be ignored, so overlapping reloads cannot race on
/// last-writer-wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    products: Resource<Vec<Product>>,
    categories: Resource<Vec<Category>>,
    criteria: FilterCriteria,
    selected: Option<ProductId>,
    next_request_id: RequestId,
    current_products_request: Option<RequestId>,
    current_categories_request: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a render is due, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // --- fetch state machines -------------------------------------------

    pub(crate) fn begin_products_fetch(&mut self) -> RequestId {
        let request_id = self.issue_request_id();
        self.current_products_request = Some(request_id);
        self.products = Resource::Loading;
        self.mark_dirty();
        request_id
    }

    pub(crate) fn begin_categories_fetch(&mut self) -> RequestId {
        let request_id = self.issue_request_id();
        self.current_categories_request = Some(request_id);
        self.categories = Resource::Loading;
        self.mark_dirty();
        request_id
    }

    pub(crate) fn resolve_products(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<Product>, LoadError>,
    ) {
        if self.current_products_request != Some(request_id) {
            // Stale completion from an overwritten request.
            return;
        }
        self.products = match result {
            Ok(products) => Resource::Loaded(products),
            Err(error) => Resource::Failed(error),
        };
        self.drop_missing_selection();
        self.mark_dirty();
    }

    pub(crate) fn resolve_categories(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<Category>, LoadError>,
    ) {
        if self.current_categories_request != Some(request_id) {
            return;
        }
        self.categories = match result {
            Ok(categories) => Resource::Loaded(categories),
            Err(error) => Resource::Failed(error),
        };
        self.mark_dirty();
    }

    fn issue_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    // --- filter criteria and overlay ------------------------------------

    pub(crate) fn set_search_query(&mut self, text: String) {
        if self.criteria.search_query != text {
            self.criteria.search_query = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_category(&mut self, id: crate::CategoryId) {
        self.criteria.category = if self.criteria.category == Some(id) {
            None
        } else {
            Some(id)
        };
        self.mark_dirty();
    }

    pub(crate) fn clear_category(&mut self) {
        if self.criteria.category.is_some() {
            self.criteria.category = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_price_filter(&mut self, bucket: PriceBucket) {
        if self.criteria.price != bucket {
            self.criteria.price = bucket;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_sort_mode(&mut self, mode: SortMode) {
        if self.criteria.sort != mode {
            self.criteria.sort = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_filters(&mut self) {
        if !self.criteria.is_default() {
            self.criteria = FilterCriteria::default();
            self.mark_dirty();
        }
    }

    pub(crate) fn open_detail(&mut self, id: ProductId) {
        let exists = self
            .products
            .loaded()
            .is_some_and(|products| products.iter().any(|product| product.id == id));
        if exists && self.selected != Some(id) {
            self.selected = Some(id);
            self.mark_dirty();
        }
    }

    pub(crate) fn close_detail(&mut self) {
        if self.selected.is_some() {
            self.selected = None;
            self.mark_dirty();
        }
    }

    /// The overlay cannot outlive its product across a reload.
    fn drop_missing_selection(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        let still_there = self
            .products
            .loaded()
            .is_some_and(|products| products.iter().any(|product| product.id == id));
        if !still_there {
            self.selected = None;
        }
    }

    // --- view derivation -------------------------------------------------

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            catalog: self.catalog_view(),
            category_bar: self.category_bar_view(),
            criteria: self.criteria.clone(),
            detail: self.detail_view(),
            dirty: self.dirty,
        }
    }

    fn catalog_view(&self) -> CatalogView {
        match &self.products {
            Resource::Idle | Resource::Loading => CatalogView::Loading,
            Resource::Failed(error) => CatalogView::Failed {
                message: error.message.clone(),
            },
            Resource::Loaded(products) => CatalogView::Ready {
                cards: filter_and_sort(products, &self.criteria)
                    .into_iter()
                    .map(card_view)
                    .collect(),
                total: products.len(),
            },
        }
    }

    fn category_bar_view(&self) -> CategoryBarView {
        match &self.categories {
            Resource::Idle | Resource::Loading => CategoryBarView::Loading,
            Resource::Failed(error) => CategoryBarView::Failed {
                message: error.message.clone(),
            },
            Resource::Loaded(categories) => CategoryBarView::Ready {
                chips: categories
                    .iter()
                    .map(|category| CategoryChipView {
                        id: category.id,
                        name: category.name.clone(),
                        selected: self.criteria.category == Some(category.id),
                    })
                    .collect(),
            },
        }
    }

    fn detail_view(&self) -> Option<ProductDetailView> {
        let id = self.selected?;
        let product = self
            .products
            .loaded()?
            .iter()
            .find(|product| product.id == id)?;
        Some(ProductDetailView {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            category_name: product.category.name.clone(),
            description: product.description.clone(),
            images: product.images.clone(),
            created_at: product.created_at.clone(),
        })
    }
}

fn card_view(product: Product) -> ProductCardView {
    ProductCardView {
        thumbnail: product.images.first().cloned(),
        id: product.id,
        title: product.title,
        price: product.price,
        category_name: product.category.name,
        description: product.description,
    }
}
