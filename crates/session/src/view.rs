//! Presentation helpers for the rendering layer.
//!
//! Nothing here owns state; these turn read models into display-ready values
//! and user-typed text into intents.

use std::fmt::Write as _;

use storefront_core::DomainResult;
use storefront_products::{CategoryFilter, Intent, PriceRange, Product, ProductId, ReadModels};

/// Label of a category toggle button.
pub fn filter_button_label(filter: &CategoryFilter) -> String {
    filter.filter_name.to_uppercase()
}

/// Label of an active-filter chip.
pub fn active_chip_label(filter: &CategoryFilter) -> String {
    format!("❌ {}", filter.filter_name)
}

/// What a product tile shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub price_label: String,
    pub image: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id_typed(),
            price_label: format!("Price: {}", product.price()),
            image: product.primary_image().map(str::to_string),
        }
    }
}

pub fn product_cards(views: &ReadModels) -> Vec<ProductCard> {
    views.visible.iter().map(ProductCard::from).collect()
}

/// Build a `SetPriceBounds` intent from the two price input boxes.
pub fn price_bounds_intent(min: &str, max: &str) -> DomainResult<Intent> {
    Ok(Intent::SetPriceBounds {
        min: PriceRange::parse_bound(min)?,
        max: PriceRange::parse_bound(max)?,
    })
}

/// Plain-text rendering of the three read models.
pub fn render_text(views: &ReadModels) -> String {
    let mut out = String::new();

    let buttons: Vec<String> = views
        .filters
        .iter()
        .map(|f| {
            let label = filter_button_label(f);
            if f.active { format!("[*{label}*]") } else { format!("[{label}]") }
        })
        .collect();
    let _ = writeln!(out, "Filters: {}", buttons.join(" "));

    if !views.active_filters.is_empty() {
        let chips: Vec<String> = views.active_filters.iter().map(active_chip_label).collect();
        let _ = writeln!(out, "Active: {}", chips.join("  "));
    }

    let _ = writeln!(out, "Products ({}):", views.visible.len());
    for card in product_cards(views) {
        let _ = writeln!(
            out,
            "  #{:<6} {:<16} {}",
            card.id,
            card.price_label,
            card.image.as_deref().unwrap_or("-")
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::DomainError;
    use storefront_products::{BrowseState, Category, update};

    fn views() -> ReadModels {
        let products = vec![
            Product::new(
                ProductId(1),
                50.0,
                Category::new("shoes"),
                vec!["https://img/1a.png".to_string(), "https://img/1b.png".to_string()],
            ),
            Product::new(ProductId(2), 5000.5, Category::new("watches"), Vec::new()),
        ];
        let t = update(BrowseState::new(), Intent::CatalogLoaded(products));
        update(t.state, Intent::ToggleCategory("shoes".into())).state.views()
    }

    #[test]
    fn labels_follow_button_and_chip_conventions() {
        assert_eq!(filter_button_label(&CategoryFilter::inactive("Shoes")), "SHOES");
        assert_eq!(active_chip_label(&CategoryFilter::active("Shoes")), "❌ Shoes");
    }

    #[test]
    fn card_shows_price_and_first_image() {
        let product = Product::new(
            ProductId(9),
            50.0,
            Category::new("shoes"),
            vec!["first".to_string(), "second".to_string()],
        );
        let card = ProductCard::from(&product);
        assert_eq!(card.price_label, "Price: 50");
        assert_eq!(card.image.as_deref(), Some("first"));

        let bare = Product::new(ProductId(10), 12.5, Category::new("misc"), Vec::new());
        let card = ProductCard::from(&bare);
        assert_eq!(card.price_label, "Price: 12.5");
        assert_eq!(card.image, None);
    }

    #[test]
    fn price_inputs_become_an_intent() {
        assert_eq!(
            price_bounds_intent("10", " 99.5 ").unwrap(),
            Intent::SetPriceBounds { min: 10.0, max: 99.5 }
        );
        assert!(matches!(
            price_bounds_intent("10", "lots"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn text_rendering_marks_active_filters_and_lists_visible_products() {
        let text = render_text(&views());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Filters: [*SHOES*] [WATCHES]");
        assert_eq!(lines[1], "Active: ❌ shoes");
        assert_eq!(lines[2], "Products (1):");
        assert!(lines[3].contains("Price: 50"));
        assert!(lines[3].ends_with("https://img/1a.png"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn text_rendering_of_empty_views() {
        assert_eq!(render_text(&ReadModels::default()), "Filters: \nProducts (0):\n");
    }
}
