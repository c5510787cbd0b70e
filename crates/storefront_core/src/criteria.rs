use crate::CategoryId;

/// Price range selector, matching the storefront's dropdown options.
///
/// Boundary semantics are deliberate: `$50` belongs to `UpTo50` only, `$100`
/// to `From50To100` only, `$500` to `From100To500` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBucket {
    #[default]
    All,
    UpTo50,
    From50To100,
    From100To500,
    Above500,
}

impl PriceBucket {
    pub fn as_str(self) -> &'static str {
        match self {
            PriceBucket::All => "all",
            PriceBucket::UpTo50 => "0-50",
            PriceBucket::From50To100 => "50-100",
            PriceBucket::From100To500 => "100-500",
            PriceBucket::Above500 => "500+",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "all" => Some(PriceBucket::All),
            "0-50" => Some(PriceBucket::UpTo50),
            "50-100" => Some(PriceBucket::From50To100),
            "100-500" => Some(PriceBucket::From100To500),
            "500+" => Some(PriceBucket::Above500),
            _ => None,
        }
    }

    /// Whether `price` falls inside this bucket.
    pub fn admits(self, price: f64) -> bool {
        match self {
            PriceBucket::All => true,
            PriceBucket::UpTo50 => (0.0..=50.0).contains(&price),
            PriceBucket::From50To100 => price > 50.0 && price <= 100.0,
            PriceBucket::From100To500 => price > 100.0 && price <= 500.0,
            PriceBucket::Above500 => price > 500.0,
        }
    }
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the order the API returned.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::NameAsc => "name-asc",
            SortMode::NameDesc => "name-desc",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "default" => Some(SortMode::Default),
            "price-asc" => Some(SortMode::PriceAsc),
            "price-desc" => Some(SortMode::PriceDesc),
            "name-asc" => Some(SortMode::NameAsc),
            "name-desc" => Some(SortMode::NameDesc),
            _ => None,
        }
    }
}

/// The user-selected search/category/price/sort parameters.
///
/// Transient UI state; `Default` passes everything through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_query: String,
    pub category: Option<CategoryId>,
    pub price: PriceBucket,
    pub sort: SortMode,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
