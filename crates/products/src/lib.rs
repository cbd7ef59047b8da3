//! Products domain module.
//!
//! This crate contains the catalog browsing rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no runtime):
//! - [`product`]: the fetched catalog item
//! - [`filter`]: category/price filtering over a product collection
//! - [`browse`]: the single state-update function driving a browsing view

pub mod browse;
pub mod filter;
pub mod product;

pub use browse::{BrowseState, Intent, ReadModels, Transition, update};
pub use filter::{
    CategoryFilter, PriceRange, active_filters, compute_visible, derive_category_filters,
    merge_category_filters, toggle_filter,
};
pub use product::{Category, Product, ProductId};
