use super::aggregate::{Product, StockTier};
use std::collections::HashSet;

/// Sentinel category meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

// ============================================================================
// Inventory aggregation
// ============================================================================

/// Live metrics derived from the in-memory product collection.
///
/// Recomputed from scratch on every call; with catalogs in the tens to low
/// thousands a single O(n) pass per render is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total_products: usize,
    pub low_stock: usize,
    pub medium_stock: usize,
    pub high_stock: usize,
    pub category_count: usize,
}

impl InventoryStats {
    pub fn collect(products: &[Product]) -> Self {
        let mut stats = InventoryStats::default();
        let mut categories = HashSet::new();
        for product in products {
            stats.total_products += 1;
            match product.stock_tier() {
                StockTier::Low => stats.low_stock += 1,
                StockTier::Medium => stats.medium_stock += 1,
                StockTier::High => stats.high_stock += 1,
            }
            categories.insert(product.category.as_str());
        }
        stats.category_count = categories.len();
        stats
    }
}

// ============================================================================
// Search / category filtering
// ============================================================================

/// The two filter inputs of the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub category: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ProductFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// Case-folded substring match on name or description, then exact
    /// category equality unless the category is "All".
    pub fn matches(&self, product: &Product) -> bool {
        let search = self.search.trim();
        if !search.is_empty() {
            let needle = search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        self.category == ALL_CATEGORIES || product.category == self.category
    }

    /// Returns a fresh vector in source order; the input is never mutated.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

// ============================================================================
// Category universe
// ============================================================================

/// Dropdown options: "All" followed by the distinct categories in
/// first-seen order (deliberately not sorted).
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    let mut seen = HashSet::new();
    for product in products {
        if seen.insert(product.category.as_str()) {
            options.push(product.category.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductId;

    fn product(id: u64, name: &str, description: &str, category: &str, stock: u32) -> Product {
        Product {
            id: ProductId::Number(id),
            name: name.into(),
            description: description.into(),
            price: 10.0,
            category: category.into(),
            stock,
            rating: None,
            sales: 0,
            image: String::new(),
            created_at: None,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Smartphone X", "Flagship phone", "Electronics", 5),
            product(2, "Laptop Pro", "Workstation", "Electronics", 50),
            product(3, "Desk Chair", "Ergonomic", "Home & Kitchen", 150),
        ]
    }

    #[test]
    fn stats_scenario_from_three_products() {
        let stats = InventoryStats::collect(&fixture());
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.medium_stock, 1);
        assert_eq!(stats.high_stock, 1);
        assert_eq!(stats.category_count, 2);
    }

    #[test]
    fn tier_counts_sum_to_total() {
        let stats = InventoryStats::collect(&fixture());
        assert_eq!(
            stats.low_stock + stats.medium_stock + stats.high_stock,
            stats.total_products
        );
    }

    #[test]
    fn empty_filter_is_identity() {
        let products = fixture();
        let filtered = ProductFilter::default().apply(&products);
        assert_eq!(filtered, products);
    }

    #[test]
    fn filter_is_idempotent() {
        let products = fixture();
        let filter = ProductFilter::new("o", "Electronics");
        let once = filter.apply(&products);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn search_matches_name_or_description_case_folded() {
        let products = fixture();
        let hits = ProductFilter::new("phone", ALL_CATEGORIES).apply(&products);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Smartphone X");

        // "workstation" only appears in a description
        let hits = ProductFilter::new("WORKSTATION", ALL_CATEGORIES).apply(&products);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Laptop Pro");
    }

    #[test]
    fn category_restricts_after_search() {
        let products = fixture();
        let hits = ProductFilter::new("o", "Home & Kitchen").apply(&products);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Desk Chair");
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let products = vec![
            product(1, "a", "", "A", 0),
            product(2, "b", "", "B", 0),
            product(3, "c", "", "A", 0),
        ];
        assert_eq!(category_options(&products), vec!["All", "A", "B"]);
    }

    #[test]
    fn categories_of_empty_collection() {
        assert_eq!(category_options(&[]), vec!["All"]);
    }
}
