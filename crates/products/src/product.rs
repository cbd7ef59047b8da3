use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Entity};

/// Catalog product identifier (the catalog API uses integer ids).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(id))
    }
}

/// Product category as returned by the catalog (only the name is used).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A fetched catalog item.
///
/// Immutable once decoded; unknown fields of the catalog record are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    price: f64,
    category: Category,
    images: Vec<String>,
}

impl Product {
    pub fn new(
        id: ProductId,
        price: f64,
        category: Category,
        images: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id,
            price,
            category,
            images: images.into_iter().collect(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn category_name(&self) -> &str {
        &self.category.name
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// The image shown on the product card (first in catalog order).
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
