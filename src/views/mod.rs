//! Views
//!
//! Plain, serializable records describing what a display layer should show. Nothing here
//! produces markup; prices are pre-formatted strings and stock is pre-classified.

use serde::Serialize;

use crate::{
    cart::{Cart, CartLine},
    catalog::Catalog,
    pricing::format_price,
    products::{Product, ProductId},
    stock::{StockStatus, quantity_input_max},
};

pub mod table;

/// Notice shown in place of cart lines when the cart is empty.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty";

/// One product card in the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntryView {
    /// Product identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// One-line description
    pub short_description: String,
    /// Product image URL
    pub image: Option<String>,
    /// Formatted unit price
    pub price: String,
    /// Stock classification
    pub stock: StockStatus,
    /// Stock badge text, e.g. `Only 5 left!`
    pub stock_label: String,
    /// Stock badge key, e.g. `low-stock`
    pub stock_badge: &'static str,
    /// Whether the product can be opened for purchase
    pub available: bool,
    /// Call-to-action text
    pub action_label: &'static str,
}

impl From<&Product<'_>> for CatalogEntryView {
    fn from(product: &Product<'_>) -> Self {
        let stock = product.stock_status();

        Self {
            id: product.id,
            name: product.name.clone(),
            short_description: product.short_description.clone(),
            image: product.image.clone(),
            price: format_price(&product.price),
            stock,
            stock_label: stock.to_string(),
            stock_badge: stock.badge(),
            available: stock.is_available(),
            action_label: if stock.is_available() {
                "View Details"
            } else {
                "Out of Stock"
            },
        }
    }
}

/// Catalog listing in catalog order.
pub fn catalog_view(catalog: &Catalog<'_>) -> Vec<CatalogEntryView> {
    catalog.iter().map(CatalogEntryView::from).collect()
}

/// A selector for one product option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroupView {
    /// Option name as declared, used as the selection key
    pub name: String,
    /// Capitalised label, e.g. `Size:`
    pub label: String,
    /// Allowed values; the first is preselected
    pub values: Vec<String>,
}

/// Product detail panel with its add-to-cart controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetailView {
    /// Product identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Long description
    pub description: String,
    /// Product image URL
    pub image: Option<String>,
    /// Formatted unit price
    pub price: String,
    /// Stock badge text
    pub stock_label: String,
    /// Stock badge key
    pub stock_badge: &'static str,
    /// Option selectors in declaration order
    pub options: Vec<OptionGroupView>,
    /// Initial quantity
    pub quantity: u32,
    /// Largest quantity the selector offers
    pub max_quantity: u32,
    /// Whether the add-to-cart control is enabled
    pub can_add: bool,
    /// Add-to-cart button text
    pub add_label: &'static str,
}

impl From<&Product<'_>> for ProductDetailView {
    fn from(product: &Product<'_>) -> Self {
        let stock = product.stock_status();

        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: format_price(&product.price),
            stock_label: stock.to_string(),
            stock_badge: stock.badge(),
            options: product
                .options
                .iter()
                .map(|option| OptionGroupView {
                    name: option.name().to_string(),
                    label: option_label(option.name()),
                    values: option.values().to_vec(),
                })
                .collect(),
            quantity: 1,
            max_quantity: quantity_input_max(product.stock),
            can_add: stock.is_available(),
            add_label: if stock.is_available() {
                "Add to Cart"
            } else {
                "Out of Stock"
            },
        }
    }
}

/// Detail view for a product id, if the catalog has it.
pub fn product_detail(catalog: &Catalog<'_>, id: ProductId) -> Option<ProductDetailView> {
    catalog.get(id).map(ProductDetailView::from)
}

fn option_label(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => format!("{}{}:", first.to_uppercase(), chars.as_str()),
        None => ":".to_string(),
    }
}

/// One cart line as listed in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView {
    /// Zero-based position, valid until the next cart mutation
    pub position: usize,
    /// Product identifier
    pub product_id: ProductId,
    /// Product name snapshot
    pub name: String,
    /// Product image snapshot
    pub image: Option<String>,
    /// Selected options as `name: value, name: value`
    pub options_text: String,
    /// Formatted unit price
    pub unit_price: String,
    /// Number of units
    pub quantity: u32,
    /// Formatted unit price times quantity
    pub line_total: String,
}

/// Cart panel contents and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// Lines in cart order
    pub lines: Vec<LineView>,
    /// Sum of quantities, shown on the cart badge
    pub total_item_count: u64,
    /// Formatted total price
    pub total_price: String,
    /// Whether the cart has no lines
    pub is_empty: bool,
    /// Notice to show instead of lines
    pub empty_notice: Option<&'static str>,
}

impl From<&Cart<'_>> for CartView {
    fn from(cart: &Cart<'_>) -> Self {
        let summary = cart.summary();

        Self {
            lines: cart
                .lines()
                .iter()
                .enumerate()
                .map(|(position, line)| line_view(cart.catalog(), position, line))
                .collect(),
            total_item_count: summary.total_item_count,
            total_price: summary.display_total(),
            is_empty: cart.is_empty(),
            empty_notice: cart.is_empty().then_some(EMPTY_CART_NOTICE),
        }
    }
}

fn line_view(catalog: &Catalog<'_>, position: usize, line: &CartLine<'_>) -> LineView {
    LineView {
        position,
        product_id: line.product_id(),
        name: line.name().to_string(),
        image: line.image().map(str::to_string),
        options_text: options_text(catalog, line),
        unit_price: format_price(line.price()),
        quantity: line.quantity(),
        line_total: format_price(&line.total()),
    }
}

/// Selected options in the product's declaration order, falling back to name order.
fn options_text(catalog: &Catalog<'_>, line: &CartLine<'_>) -> String {
    let selected = line.options();

    let pairs: Vec<String> = match catalog.get_by_key(line.product_key()) {
        Some(product) => product
            .options
            .iter()
            .filter_map(|option| {
                selected
                    .get(option.name())
                    .map(|value| format!("{}: {value}", option.name()))
            })
            .collect(),
        None => selected
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect(),
    };

    pairs.join(", ")
}

/// Confirmation shown after a successful addition.
///
/// `quantity` is what [`Cart::add_item`] returned, so a capped request reports the capped
/// amount rather than the number asked for.
pub fn added_to_cart_message(quantity: u32, name: &str) -> String {
    format!("Added {quantity} {name} to cart!")
}
