//! Cart Lines

use rusty_money::{Money, iso::Currency};

use crate::{
    options::SelectedOptions,
    pricing::line_total,
    products::{Product, ProductId, ProductKey},
};

/// A product with a specific option selection and quantity.
///
/// Name, price and image are a snapshot of the product taken when the line was created.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product_key: ProductKey,
    product_id: ProductId,
    name: String,
    price: Money<'a, Currency>,
    image: Option<String>,
    quantity: u32,
    options: SelectedOptions,
}

impl<'a> CartLine<'a> {
    pub(crate) fn new(
        product_key: ProductKey,
        product: &Product<'a>,
        quantity: u32,
        options: SelectedOptions,
    ) -> Self {
        Self {
            product_key,
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            options,
        }
    }

    /// Whether this line is the same product with the same option selection.
    pub fn matches(&self, product_id: ProductId, options: &SelectedOptions) -> bool {
        self.product_id == product_id && self.options == *options
    }

    pub(crate) fn increase_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// Catalog key of the product
    pub fn product_key(&self) -> ProductKey {
        self.product_key
    }

    /// Product identifier
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Product name at the time the line was created
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price at the time the line was created
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Product image at the time the line was created
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Number of units
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected option values
    pub fn options(&self) -> &SelectedOptions {
        &self.options
    }

    /// Unit price multiplied by quantity
    pub fn total(&self) -> Money<'a, Currency> {
        line_total(&self.price, self.quantity)
    }
}
