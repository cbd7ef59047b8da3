//! `storefront-session`
//!
//! **Responsibility:** the IO shell around the pure browsing domain.
//!
//! This crate provides:
//! - Session configuration (catalog endpoint, log format)
//! - The catalog source (HTTP GET of the product list)
//! - A browse session owning the state and its single cancellable fetch
//! - Presentation helpers for whatever renders the read models

pub mod config;
pub mod session;
pub mod source;
pub mod view;

pub use config::{ConfigError, SessionConfig};
pub use session::{BrowseSession, SessionHandle};
pub use source::{CatalogSource, FetchError, HttpCatalog};
