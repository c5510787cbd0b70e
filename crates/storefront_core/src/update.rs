use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchChanged(text) => {
            state.set_search_query(text);
            Vec::new()
        }
        Msg::CategoryToggled(id) => {
            state.toggle_category(id);
            Vec::new()
        }
        Msg::CategoryCleared => {
            state.clear_category();
            Vec::new()
        }
        Msg::PriceFilterChanged(bucket) => {
            state.set_price_filter(bucket);
            Vec::new()
        }
        Msg::SortChanged(mode) => {
            state.set_sort_mode(mode);
            Vec::new()
        }
        Msg::FiltersCleared => {
            state.clear_filters();
            Vec::new()
        }
        Msg::DetailOpened(id) => {
            state.open_detail(id);
            Vec::new()
        }
        Msg::DetailClosed => {
            state.close_detail();
            Vec::new()
        }
        Msg::ProductsRequested => {
            let request_id = state.begin_products_fetch();
            vec![Effect::FetchProducts { request_id }]
        }
        Msg::CategoriesRequested => {
            let request_id = state.begin_categories_fetch();
            vec![Effect::FetchCategories { request_id }]
        }
        Msg::ProductsLoaded {
            request_id,
            products,
        } => {
            state.resolve_products(request_id, Ok(products));
            Vec::new()
        }
        Msg::ProductsFailed { request_id, error } => {
            state.resolve_products(request_id, Err(error));
            Vec::new()
        }
        Msg::CategoriesLoaded {
            request_id,
            categories,
        } => {
            state.resolve_categories(request_id, Ok(categories));
            Vec::new()
        }
        Msg::CategoriesFailed { request_id, error } => {
            state.resolve_categories(request_id, Err(error));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
