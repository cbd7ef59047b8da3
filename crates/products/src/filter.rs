//! Category and price filtering over a product collection.
//!
//! Every function here is pure: inputs are borrowed, outputs are fresh values,
//! and the relative order of products is never changed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};

use crate::product::Product;

/// A named toggle deciding whether a category is part of the visible set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    pub filter_name: String,
    pub active: bool,
}

impl CategoryFilter {
    pub fn inactive(filter_name: impl Into<String>) -> Self {
        Self {
            filter_name: filter_name.into(),
            active: false,
        }
    }

    pub fn active(filter_name: impl Into<String>) -> Self {
        Self {
            filter_name: filter_name.into(),
            active: true,
        }
    }
}

impl ValueObject for CategoryFilter {}

/// Inclusive price bounds with an on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub enabled: bool,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            enabled: false,
        }
    }
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn new(min: f64, max: f64, enabled: bool) -> Self {
        Self { min, max, enabled }
    }

    /// Whether `price` lies within `min..=max`, ignoring `enabled`.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// Whether a product with `price` passes this range (always true when disabled).
    pub fn admits(&self, price: f64) -> bool {
        !self.enabled || self.contains(price)
    }

    /// Parse a user-typed bound such as `"250"` or `" 19.99 "`.
    pub fn parse_bound(text: &str) -> DomainResult<f64> {
        let trimmed = text.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| DomainError::validation(format!("price bound is not a number: {trimmed:?}")))?;
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "price bound must be finite: {trimmed:?}"
            )));
        }
        Ok(value)
    }
}

/// One inactive filter per distinct category name, in first-seen order.
pub fn derive_category_filters(products: &[Product]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(Product::category_name)
        .filter(|name| seen.insert(*name))
        .map(CategoryFilter::inactive)
        .collect()
}

/// Re-derive filters for `products`, keeping `active` for names that persist.
///
/// Names no longer present in `products` are dropped.
pub fn merge_category_filters(previous: &[CategoryFilter], products: &[Product]) -> Vec<CategoryFilter> {
    let still_active: HashSet<&str> = previous
        .iter()
        .filter(|f| f.active)
        .map(|f| f.filter_name.as_str())
        .collect();

    let mut filters = derive_category_filters(products);
    for filter in &mut filters {
        filter.active = still_active.contains(filter.filter_name.as_str());
    }
    filters
}

/// Invert `active` on the entry named `filter_name`; unknown names are a no-op.
pub fn toggle_filter(filters: &[CategoryFilter], filter_name: &str) -> Vec<CategoryFilter> {
    filters
        .iter()
        .map(|filter| {
            if filter.filter_name == filter_name {
                CategoryFilter {
                    filter_name: filter.filter_name.clone(),
                    active: !filter.active,
                }
            } else {
                filter.clone()
            }
        })
        .collect()
}

/// The entries currently switched on, in list order.
pub fn active_filters(filters: &[CategoryFilter]) -> Vec<CategoryFilter> {
    filters.iter().filter(|f| f.active).cloned().collect()
}

/// Products passing both the category filter and the price range.
///
/// `active` is the list of switched-on filters. When it is empty there is no
/// category restriction; otherwise a product passes if its category matches
/// ANY of the names.
pub fn compute_visible(products: &[Product], active: &[CategoryFilter], price_range: &PriceRange) -> Vec<Product> {
    let names: HashSet<&str> = active.iter().map(|f| f.filter_name.as_str()).collect();

    products
        .iter()
        .filter(|p| names.is_empty() || names.contains(p.category_name()))
        .filter(|p| price_range.admits(p.price()))
        .cloned()
        .collect()
}
