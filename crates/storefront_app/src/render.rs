use chrono::DateTime;
use storefront_core::{
    AppViewModel, CatalogView, CategoryBarView, CategoryChipView, FilterCriteria, ProductCardView,
    ProductDetailView,
};

const SNIPPET_CHARS: usize = 60;

/// Formats one frame of the view model as terminal text.
pub fn render(view: &AppViewModel) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(render_category_bar(&view.category_bar, &view.criteria));
    if let Some(filters) = render_active_filters(&view.criteria) {
        lines.push(filters);
    }
    lines.extend(render_catalog(&view.catalog));

    if let Some(detail) = &view.detail {
        lines.push(String::new());
        lines.extend(render_detail(detail));
    }

    lines.join("\n")
}

fn render_category_bar(bar: &CategoryBarView, criteria: &FilterCriteria) -> String {
    match bar {
        CategoryBarView::Loading => "Categories: loading...".to_string(),
        CategoryBarView::Failed { message } => {
            format!("Categories unavailable: {message} (type `reload categories` to retry)")
        }
        CategoryBarView::Ready { chips } => {
            let mut parts = Vec::with_capacity(chips.len() + 1);
            parts.push(if criteria.category.is_none() {
                "[All]".to_string()
            } else {
                "All".to_string()
            });
            parts.extend(chips.iter().map(format_chip));
            format!("Categories: {}", parts.join(" | "))
        }
    }
}

fn format_chip(chip: &CategoryChipView) -> String {
    if chip.selected {
        format!("[{} (#{})]", chip.name, chip.id)
    } else {
        format!("{} (#{})", chip.name, chip.id)
    }
}

fn render_active_filters(criteria: &FilterCriteria) -> Option<String> {
    let mut parts = Vec::new();
    let query = criteria.search_query.trim();
    if !query.is_empty() {
        parts.push(format!("search \"{query}\""));
    }
    if let Some(id) = criteria.category {
        parts.push(format!("category #{id}"));
    }
    if criteria.price != storefront_core::PriceBucket::All {
        parts.push(format!("price {}", criteria.price.as_str()));
    }
    if criteria.sort != storefront_core::SortMode::Default {
        parts.push(format!("sort {}", criteria.sort.as_str()));
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("Filters: {}", parts.join(" | ")))
    }
}

fn render_catalog(catalog: &CatalogView) -> Vec<String> {
    match catalog {
        CatalogView::Loading => vec!["Loading products...".to_string()],
        CatalogView::Failed { message } => vec![
            format!("Could not load products: {message}"),
            "Type `reload` to try again.".to_string(),
        ],
        CatalogView::Ready { cards, total } => {
            if *total == 0 {
                return vec!["No products found.".to_string()];
            }
            if cards.is_empty() {
                return vec!["No products match the current filters.".to_string()];
            }
            let mut lines = Vec::with_capacity(cards.len() * 2 + 1);
            lines.push(format!("Showing {} of {} products", cards.len(), total));
            for card in cards {
                lines.push(format_card_row(card));
                let snippet = truncate(&card.description, SNIPPET_CHARS);
                if !snippet.is_empty() {
                    lines.push(format!("        {snippet}"));
                }
            }
            lines
        }
    }
}

fn format_card_row(card: &ProductCardView) -> String {
    format!(
        "  [#{id}] {title} — {category} — {price}",
        id = card.id,
        title = card.title,
        category = card.category_name,
        price = format_price(card.price)
    )
}

fn render_detail(detail: &ProductDetailView) -> Vec<String> {
    let mut lines = vec![
        format!("── Product #{} ──", detail.id),
        detail.title.clone(),
    ];

    let mut facts = vec![
        format!("Category: {}", detail.category_name),
        format!("Price: {}", format_price(detail.price)),
    ];
    if let Some(added) = detail.created_at.as_deref().and_then(format_added) {
        facts.push(format!("Added: {added}"));
    }
    lines.push(facts.join(" | "));

    if !detail.description.is_empty() {
        lines.push(detail.description.clone());
    }
    if !detail.images.is_empty() {
        lines.push("Images:".to_string());
        lines.extend(detail.images.iter().map(|url| format!("  {url}")));
    }
    lines.push("(type `close` to dismiss)".to_string());
    lines
}

/// Parses the API's raw RFC 3339 stamp for display; unparseable input is
/// simply not shown.
fn format_added(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|stamp| stamp.format("%Y-%m-%d").to_string())
}

fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let sign = if price < 0.0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        format_with_commas(cents / 100),
        cents % 100
    )
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CatalogView, CategoryBarView, CategoryChipView, ProductCardView};

    fn card(id: u64, title: &str, price: f64) -> ProductCardView {
        ProductCardView {
            id,
            title: title.to_string(),
            price,
            category_name: "Furniture".to_string(),
            description: String::new(),
            thumbnail: None,
        }
    }

    #[test]
    fn prices_group_thousands_and_keep_cents() {
        assert_eq!(format_price(40.0), "$40.00");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn added_date_requires_a_valid_stamp() {
        assert_eq!(
            format_added("2024-11-05T08:30:00.000Z").as_deref(),
            Some("2024-11-05")
        );
        assert_eq!(format_added("last tuesday"), None);
    }

    #[test]
    fn long_descriptions_are_clipped() {
        assert_eq!(truncate("short", 60), "short");
        let long = "x".repeat(70);
        let clipped = truncate(&long, 60);
        assert_eq!(clipped.chars().count(), 63);
        assert!(clipped.ends_with("..."));
    }

    #[test]
    fn ready_catalog_shows_counts_and_rows() {
        let catalog = CatalogView::Ready {
            cards: vec![card(1, "Walnut Desk", 180.0)],
            total: 3,
        };
        let lines = render_catalog(&catalog);
        assert_eq!(lines[0], "Showing 1 of 3 products");
        assert_eq!(lines[1], "  [#1] Walnut Desk — Furniture — $180.00");
    }

    #[test]
    fn filtered_to_nothing_and_truly_empty_read_differently() {
        let empty = CatalogView::Ready {
            cards: Vec::new(),
            total: 0,
        };
        assert_eq!(render_catalog(&empty), vec!["No products found."]);

        let filtered_out = CatalogView::Ready {
            cards: Vec::new(),
            total: 5,
        };
        assert_eq!(
            render_catalog(&filtered_out),
            vec!["No products match the current filters."]
        );
    }

    #[test]
    fn selected_chip_is_bracketed() {
        let bar = CategoryBarView::Ready {
            chips: vec![
                CategoryChipView {
                    id: 1,
                    name: "Furniture".to_string(),
                    selected: true,
                },
                CategoryChipView {
                    id: 2,
                    name: "Lighting".to_string(),
                    selected: false,
                },
            ],
        };
        let criteria = FilterCriteria {
            category: Some(1),
            ..FilterCriteria::default()
        };
        assert_eq!(
            render_category_bar(&bar, &criteria),
            "Categories: All | [Furniture (#1)] | Lighting (#2)"
        );
    }
}
