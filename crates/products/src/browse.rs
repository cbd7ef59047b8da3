//! Browsing state and its single update function.
//!
//! All mutation goes through [`update`], which takes the current state and one
//! [`Intent`] and returns the next state together with freshly derived
//! [`ReadModels`]. Nothing is recomputed behind the caller's back.

use serde::{Deserialize, Serialize};

use crate::filter::{
    CategoryFilter, PriceRange, active_filters, compute_visible, merge_category_filters, toggle_filter,
};
use crate::product::Product;

/// Everything a browsing view owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseState {
    products: Vec<Product>,
    filters: Vec<CategoryFilter>,
    price_range: PriceRange,
}

/// A mutation requested by the UI or by the catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// The catalog fetch resolved with these products.
    CatalogLoaded(Vec<Product>),
    /// Flip the named category filter.
    ToggleCategory(String),
    /// Replace the price bounds (the enabled flag is left as is).
    SetPriceBounds { min: f64, max: f64 },
    /// Switch the price filter on or off.
    TogglePriceFilter,
}

/// The three views handed to rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadModels {
    pub filters: Vec<CategoryFilter>,
    pub active_filters: Vec<CategoryFilter>,
    pub visible: Vec<Product>,
}

/// Result of applying one intent.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: BrowseState,
    pub views: ReadModels,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filters(&self) -> &[CategoryFilter] {
        &self.filters
    }

    pub fn price_range(&self) -> &PriceRange {
        &self.price_range
    }

    /// Derive the read models for this state.
    pub fn views(&self) -> ReadModels {
        let active = active_filters(&self.filters);
        let visible = compute_visible(&self.products, &active, &self.price_range);
        ReadModels {
            filters: self.filters.clone(),
            active_filters: active,
            visible,
        }
    }

    fn apply(self, intent: Intent) -> Self {
        match intent {
            Intent::CatalogLoaded(products) => {
                let filters = merge_category_filters(&self.filters, &products);
                Self {
                    products,
                    filters,
                    ..self
                }
            }
            Intent::ToggleCategory(name) => {
                let filters = toggle_filter(&self.filters, &name);
                Self { filters, ..self }
            }
            Intent::SetPriceBounds { min, max } => Self {
                price_range: PriceRange {
                    min,
                    max,
                    ..self.price_range
                },
                ..self
            },
            Intent::TogglePriceFilter => Self {
                price_range: PriceRange {
                    enabled: !self.price_range.enabled,
                    ..self.price_range
                },
                ..self
            },
        }
    }
}

/// Apply `intent` to `state`, returning the next state and its read models.
pub fn update(state: BrowseState, intent: Intent) -> Transition {
    tracing::debug!(?intent, "applying browse intent");
    let state = state.apply(intent);
    let views = state.views();
    Transition { state, views }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Category, ProductId};

    fn product(id: u64, price: f64, category: &str) -> Product {
        Product::new(ProductId(id), price, Category::new(category), Vec::new())
    }

    fn loaded() -> BrowseState {
        let products = vec![
            product(1, 50.0, "shoes"),
            product(2, 5000.0, "watches"),
            product(3, 80.0, "hats"),
        ];
        update(BrowseState::new(), Intent::CatalogLoaded(products)).state
    }

    fn visible_ids(views: &ReadModels) -> Vec<u64> {
        views.visible.iter().map(|p| p.id_typed().0).collect()
    }

    #[test]
    fn empty_state_has_empty_views() {
        assert_eq!(BrowseState::new().views(), ReadModels::default());
    }

    #[test]
    fn catalog_loaded_derives_inactive_filters_and_shows_everything() {
        let views = loaded().views();
        assert_eq!(views.filters.len(), 3);
        assert!(views.active_filters.is_empty());
        assert_eq!(visible_ids(&views), vec![1, 2, 3]);
    }

    #[test]
    fn toggle_category_updates_all_three_views() {
        let t = update(loaded(), Intent::ToggleCategory("shoes".into()));

        assert_eq!(t.views.active_filters, vec![CategoryFilter::active("shoes")]);
        assert!(t.views.filters.contains(&CategoryFilter::active("shoes")));
        assert_eq!(visible_ids(&t.views), vec![1]);
        assert_eq!(t.views, t.state.views());
    }

    #[test]
    fn toggle_unknown_category_changes_nothing() {
        let before = loaded();
        let t = update(before.clone(), Intent::ToggleCategory("boats".into()));
        assert_eq!(t.state, before);
    }

    #[test]
    fn price_bounds_apply_only_once_enabled() {
        let t = update(loaded(), Intent::SetPriceBounds { min: 0.0, max: 100.0 });
        assert_eq!(visible_ids(&t.views), vec![1, 2, 3]);

        let t = update(t.state, Intent::TogglePriceFilter);
        assert!(t.state.price_range().enabled);
        assert_eq!(visible_ids(&t.views), vec![1, 3]);

        let t = update(t.state, Intent::TogglePriceFilter);
        assert_eq!(visible_ids(&t.views), vec![1, 2, 3]);
    }

    #[test]
    fn set_price_bounds_keeps_enabled_flag() {
        let t = update(loaded(), Intent::TogglePriceFilter);
        let t = update(t.state, Intent::SetPriceBounds { min: 60.0, max: 6000.0 });

        assert_eq!(*t.state.price_range(), PriceRange::new(60.0, 6000.0, true));
        assert_eq!(visible_ids(&t.views), vec![2, 3]);
    }

    #[test]
    fn category_and_price_filters_combine() {
        let t = update(loaded(), Intent::ToggleCategory("shoes".into()));
        let t = update(t.state, Intent::ToggleCategory("watches".into()));
        let t = update(t.state, Intent::SetPriceBounds { min: 0.0, max: 100.0 });
        let t = update(t.state, Intent::TogglePriceFilter);

        assert_eq!(visible_ids(&t.views), vec![1]);
    }

    #[test]
    fn reloading_catalog_preserves_selection_for_surviving_categories() {
        let t = update(loaded(), Intent::ToggleCategory("shoes".into()));
        let t = update(t.state, Intent::ToggleCategory("hats".into()));

        let reloaded = vec![product(4, 10.0, "shoes"), product(5, 20.0, "bags")];
        let t = update(t.state, Intent::CatalogLoaded(reloaded));

        assert_eq!(
            t.views.filters,
            vec![CategoryFilter::active("shoes"), CategoryFilter::inactive("bags")]
        );
        assert_eq!(visible_ids(&t.views), vec![4]);
    }

    #[test]
    fn read_models_serialize_for_rendering() {
        let json = serde_json::to_value(loaded().views()).unwrap();
        assert!(json.get("activeFilters").is_some());
        assert_eq!(json["visible"].as_array().unwrap().len(), 3);
    }
}
