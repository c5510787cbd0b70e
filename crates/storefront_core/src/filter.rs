use std::cmp::Reverse;

use crate::{FilterCriteria, Product, SortMode};

/// Pure filter/sort pipeline: search, category, price bucket, then sort.
///
/// Each stage narrows the previous stage's output; `SortMode::Default` keeps
/// whatever order survived filtering. The input slice is never mutated, and
/// the result is always a (possibly reordered) subset of it.
pub fn filter_and_sort(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let query = criteria.search_query.trim().to_lowercase();

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|product| query.is_empty() || matches_search(product, &query))
        .filter(|product| {
            criteria
                .category
                .map_or(true, |id| product.category.id == id)
        })
        .filter(|product| criteria.price.admits(product.price))
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::Default => {}
        SortMode::PriceAsc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::NameAsc => filtered.sort_by_cached_key(name_key),
        SortMode::NameDesc => filtered.sort_by_cached_key(|product| Reverse(name_key(product))),
    }

    filtered
}

/// `query` must already be trimmed and lowercased.
fn matches_search(product: &Product, query: &str) -> bool {
    product.title.to_lowercase().contains(query)
        || product.description.to_lowercase().contains(query)
        || product.category.name.to_lowercase().contains(query)
}

// Case-folded title with the raw title as tiebreak, so the order is total
// and repeated sorts are no-ops.
fn name_key(product: &Product) -> (String, String) {
    (product.title.to_lowercase(), product.title.clone())
}
