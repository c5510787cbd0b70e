//! Storefront core: pure state machine, filter pipeline, and view-model helpers.
mod criteria;
mod effect;
mod filter;
mod model;
mod msg;
mod resource;
mod state;
mod update;
mod view_model;

pub use criteria::{FilterCriteria, PriceBucket, SortMode};
pub use effect::Effect;
pub use filter::filter_and_sort;
pub use model::{Category, CategoryId, Product, ProductId};
pub use msg::Msg;
pub use resource::{LoadError, Resource};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{
    AppViewModel, CatalogView, CategoryBarView, CategoryChipView, ProductCardView,
    ProductDetailView,
};
