pub const NAME_MAX_LENGTH: usize = 255;
pub const BRAND_MAX_LENGTH: usize = 100;
pub const CATEGORY_MAX_LENGTH: usize = 100;
pub const UNIT_MAX_LENGTH: usize = 50;
pub const SIZE_MAX_LENGTH: usize = 50;
pub const BARCODE_MAX_LENGTH: usize = 50;

/// Optional filters for listing products.
///
/// Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring over name and brand.
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn new(category: Option<String>, search: Option<String>) -> Self {
        let non_blank = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            category: non_blank(category),
            search: non_blank(search),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_drop_blank_filters() {
        let filter = ProductFilter::new(Some("  ".to_string()), Some("".to_string()));
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn should_trim_filter_values() {
        let filter = ProductFilter::new(Some(" Dairy ".to_string()), Some("milk".to_string()));
        assert_eq!(filter.category.as_deref(), Some("Dairy"));
        assert_eq!(filter.search.as_deref(), Some("milk"));
    }
}
