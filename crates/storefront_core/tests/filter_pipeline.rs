use storefront_core::{
    filter_and_sort, Category, FilterCriteria, PriceBucket, Product, SortMode,
};

fn product(id: u64, title: &str, price: f64) -> Product {
    product_in(id, title, price, 1, "Gadgets")
}

fn product_in(id: u64, title: &str, price: f64, category_id: u64, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("A fine {}", title.to_lowercase()),
        price,
        category: Category {
            id: category_id,
            name: category.to_string(),
        },
        images: Vec::new(),
        created_at: None,
    }
}

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|product| product.title.as_str()).collect()
}

#[test]
fn default_criteria_is_identity() {
    let products = vec![
        product(1, "Banana Stand", 60.0),
        product(2, "Apple Slicer", 40.0),
        product(3, "Cherry Bowl", 15.0),
    ];

    let result = filter_and_sort(&products, &FilterCriteria::default());
    assert_eq!(result, products);
}

#[test]
fn empty_input_stays_empty() {
    let criteria = FilterCriteria {
        search_query: "anything".to_string(),
        ..FilterCriteria::default()
    };
    assert!(filter_and_sort(&[], &criteria).is_empty());
}

#[test]
fn search_matches_title_description_or_category_name() {
    let products = vec![
        product_in(1, "Walnut Desk", 180.0, 1, "Furniture"),
        product_in(2, "Reading Lamp", 25.0, 2, "Lighting"),
        product_in(3, "Desk Organizer", 12.0, 3, "Office"),
    ];

    // Title hit, case-insensitive.
    let criteria = FilterCriteria {
        search_query: "DESK".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&products, &criteria)),
        vec!["Walnut Desk", "Desk Organizer"]
    );

    // Description hit ("A fine reading lamp").
    let criteria = FilterCriteria {
        search_query: "fine reading".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&products, &criteria)),
        vec!["Reading Lamp"]
    );

    // Category-name hit.
    let criteria = FilterCriteria {
        search_query: "lighting".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&products, &criteria)),
        vec!["Reading Lamp"]
    );

    // No hit anywhere.
    let criteria = FilterCriteria {
        search_query: "aquarium".to_string(),
        ..FilterCriteria::default()
    };
    assert!(filter_and_sort(&products, &criteria).is_empty());
}

#[test]
fn whitespace_only_query_passes_everything() {
    let products = vec![product(1, "Lamp", 25.0), product(2, "Desk", 180.0)];
    let criteria = FilterCriteria {
        search_query: "   ".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(filter_and_sort(&products, &criteria), products);
}

#[test]
fn category_filter_is_an_exact_id_match() {
    let products = vec![
        product_in(1, "Walnut Desk", 180.0, 1, "Furniture"),
        product_in(2, "Reading Lamp", 25.0, 2, "Lighting"),
        product_in(3, "Oak Shelf", 90.0, 1, "Furniture"),
    ];

    let criteria = FilterCriteria {
        category: Some(1),
        ..FilterCriteria::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&products, &criteria)),
        vec!["Walnut Desk", "Oak Shelf"]
    );

    let criteria = FilterCriteria {
        category: Some(9),
        ..FilterCriteria::default()
    };
    assert!(filter_and_sort(&products, &criteria).is_empty());
}

#[test]
fn price_buckets_honor_their_boundaries() {
    let products = vec![
        product(1, "Free Sample", 0.0),
        product(2, "Apple", 40.0),
        product(3, "Edge Fifty", 50.0),
        product(4, "Banana", 60.0),
        product(5, "Edge Hundred", 100.0),
        product(6, "Desk", 180.0),
        product(7, "Edge Five Hundred", 500.0),
        product(8, "Grand Piano", 501.0),
    ];

    let result = |bucket: PriceBucket| {
        let criteria = FilterCriteria {
            price: bucket,
            ..FilterCriteria::default()
        };
        titles(&filter_and_sort(&products, &criteria))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        result(PriceBucket::All).len(),
        products.len(),
        "`all` is a no-op"
    );
    // $50 belongs to 0-50 and nowhere else; same for the other edges.
    assert_eq!(
        result(PriceBucket::UpTo50),
        vec!["Free Sample", "Apple", "Edge Fifty"]
    );
    assert_eq!(
        result(PriceBucket::From50To100),
        vec!["Banana", "Edge Hundred"]
    );
    assert_eq!(
        result(PriceBucket::From100To500),
        vec!["Desk", "Edge Five Hundred"]
    );
    assert_eq!(result(PriceBucket::Above500), vec!["Grand Piano"]);
}

#[test]
fn price_cap_on_a_two_item_catalog() {
    let products = vec![product(1, "Apple", 40.0), product(2, "Banana", 60.0)];
    let criteria = FilterCriteria {
        price: PriceBucket::UpTo50,
        ..FilterCriteria::default()
    };
    assert_eq!(titles(&filter_and_sort(&products, &criteria)), vec!["Apple"]);
}

#[test]
fn name_sorts_are_case_insensitive_and_reversible() {
    let products = vec![
        product(1, "banana Holder", 10.0),
        product(2, "Apple Slicer", 20.0),
        product(3, "cherry Bowl", 30.0),
    ];

    let criteria = FilterCriteria {
        sort: SortMode::NameAsc,
        ..FilterCriteria::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&products, &criteria)),
        vec!["Apple Slicer", "banana Holder", "cherry Bowl"]
    );

    let criteria = FilterCriteria {
        sort: SortMode::NameDesc,
        ..FilterCriteria::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&products, &criteria)),
        vec!["cherry Bowl", "banana Holder", "Apple Slicer"]
    );
}

#[test]
fn name_desc_on_a_two_item_catalog() {
    let products = vec![product(1, "Apple", 40.0), product(2, "Banana", 60.0)];
    let criteria = FilterCriteria {
        sort: SortMode::NameDesc,
        ..FilterCriteria::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&products, &criteria)),
        vec!["Banana", "Apple"]
    );
}

#[test]
fn price_sort_is_stable_and_idempotent() {
    // Three items share a price; their input order must survive the sort.
    let products = vec![
        product(1, "Third", 50.0),
        product(2, "First", 10.0),
        product(3, "Fourth", 50.0),
        product(4, "Fifth", 50.0),
        product(5, "Second", 20.0),
    ];
    let criteria = FilterCriteria {
        sort: SortMode::PriceAsc,
        ..FilterCriteria::default()
    };

    let sorted = filter_and_sort(&products, &criteria);
    assert_eq!(
        titles(&sorted),
        vec!["First", "Second", "Third", "Fourth", "Fifth"]
    );

    // Re-applying the same sort to its own output is a no-op.
    let resorted = filter_and_sort(&sorted, &criteria);
    assert_eq!(resorted, sorted);

    let criteria = FilterCriteria {
        sort: SortMode::PriceDesc,
        ..FilterCriteria::default()
    };
    let sorted_desc = filter_and_sort(&products, &criteria);
    assert_eq!(
        titles(&sorted_desc),
        vec!["Third", "Fourth", "Fifth", "Second", "First"]
    );
    assert_eq!(filter_and_sort(&sorted_desc, &criteria), sorted_desc);
}

#[test]
fn stages_compose_in_order() {
    let products = vec![
        product_in(1, "Walnut Desk", 180.0, 1, "Furniture"),
        product_in(2, "Standing Desk", 420.0, 1, "Furniture"),
        product_in(3, "Desk Lamp", 35.0, 2, "Lighting"),
        product_in(4, "Oak Shelf", 150.0, 1, "Furniture"),
    ];

    let criteria = FilterCriteria {
        search_query: "desk".to_string(),
        category: Some(1),
        price: PriceBucket::From100To500,
        sort: SortMode::PriceDesc,
    };

    assert_eq!(
        titles(&filter_and_sort(&products, &criteria)),
        vec!["Standing Desk", "Walnut Desk"]
    );
}
