//! Cart
//!
//! The cart owns an ordered list of [`CartLine`]s. Lines are keyed by product and option
//! selection: adding the same product with the same options again grows the existing line
//! instead of appending a new one. Every mutation either applies fully or leaves the cart
//! untouched.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::Catalog,
    checkout::CheckoutOutcome,
    options::{OptionSelectionError, SelectedOptions},
    pricing::line_total_minor,
    products::ProductId,
    stock::clamp_quantity,
};

pub mod line;
pub mod summary;

pub use line::CartLine;
pub use summary::CartSummary;

/// Errors returned by cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product id is not in the catalog.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    /// The product has no stock left.
    #[error("Product {0} is out of stock")]
    OutOfStock(ProductId),

    /// The option selection does not fit the product's option schema.
    #[error("Invalid option selection for product {product}: {source}")]
    InvalidOptionSelection {
        /// Product the selection was made for
        product: ProductId,
        /// Which constraint was violated
        source: OptionSelectionError,
    },

    /// No line exists at the given position.
    #[error("Line {index} out of range for cart with {len} lines")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of lines in the cart
        len: usize,
    },
}

/// Cart
#[derive(Debug)]
pub struct Cart<'a> {
    catalog: &'a Catalog<'a>,
    lines: Vec<CartLine<'a>>,
}

impl<'a> Cart<'a> {
    /// Create an empty cart backed by `catalog`.
    pub fn new(catalog: &'a Catalog<'a>) -> Self {
        Cart {
            catalog,
            lines: Vec::new(),
        }
    }

    /// Add `quantity` units of a product with the given option selection.
    ///
    /// The quantity is clamped to `[1, min(10, stock)]`. If a line with the same product and
    /// options exists its quantity grows by the clamped amount; the merged total is not
    /// clamped again.
    ///
    /// Returns the effective quantity added, which may be less than `quantity`.
    ///
    /// # Errors
    ///
    /// - [`CartError::ProductNotFound`]: the product id is not in the catalog.
    /// - [`CartError::OutOfStock`]: the product has zero stock.
    /// - [`CartError::InvalidOptionSelection`]: an option is missing, unknown, or set to a
    ///   value the product does not allow.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        options: SelectedOptions,
    ) -> Result<u32, CartError> {
        let result = self.try_add_item(product_id, quantity, options);

        if let Err(error) = &result {
            debug!(%product_id, quantity, %error, "rejected cart addition");
        }

        result
    }

    fn try_add_item(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        options: SelectedOptions,
    ) -> Result<u32, CartError> {
        let catalog = self.catalog;

        let (key, product) = catalog
            .entry(product_id)
            .ok_or(CartError::ProductNotFound(product_id))?;

        let quantity =
            clamp_quantity(quantity, product.stock).ok_or(CartError::OutOfStock(product_id))?;

        product
            .options
            .validate(&options)
            .map_err(|source| CartError::InvalidOptionSelection {
                product: product_id,
                source,
            })?;

        if let Some((index, line)) = self
            .lines
            .iter_mut()
            .enumerate()
            .find(|(_, line)| line.matches(product_id, &options))
        {
            line.increase_quantity(quantity);

            debug!(
                %product_id,
                index,
                added = quantity,
                quantity = line.quantity(),
                "merged into existing cart line"
            );

            return Ok(quantity);
        }

        self.lines
            .push(CartLine::new(key, product, quantity, options));

        debug!(
            %product_id,
            index = self.lines.len() - 1,
            quantity,
            "appended cart line"
        );

        Ok(quantity)
    }

    /// Remove the line at `index`. Later lines shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if there is no line at `index`.
    pub fn remove_line(&mut self, index: usize) -> Result<(), CartError> {
        let len = self.lines.len();

        if index >= len {
            debug!(index, len, "rejected cart line removal");

            return Err(CartError::IndexOutOfRange { index, len });
        }

        let removed = self.lines.remove(index);

        debug!(
            product_id = %removed.product_id(),
            index,
            quantity = removed.quantity(),
            "removed cart line"
        );

        Ok(())
    }

    /// Total item count and exact total price.
    pub fn summary(&self) -> CartSummary<'a> {
        let (total_item_count, total_minor) =
            self.lines
                .iter()
                .fold((0_u64, 0_i64), |(count, minor), line| {
                    (
                        count.saturating_add(u64::from(line.quantity())),
                        minor.saturating_add(line_total_minor(line.price(), line.quantity())),
                    )
                });

        CartSummary {
            total_item_count,
            total_price: Money::from_minor(total_minor, self.catalog.currency()),
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        let removed = self.lines.len();

        self.lines.clear();

        debug!(removed, "cleared cart");
    }

    /// Report what checkout would do. The cart is left untouched.
    pub fn checkout(&self) -> CheckoutOutcome {
        if self.is_empty() {
            CheckoutOutcome::EmptyCart
        } else {
            CheckoutOutcome::ComingSoon
        }
    }

    /// Get the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if there is no line at `index`.
    pub fn line(&self, index: usize) -> Result<&CartLine<'a>, CartError> {
        self.lines.get(index).ok_or(CartError::IndexOutOfRange {
            index,
            len: self.lines.len(),
        })
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Catalog the cart validates against.
    pub fn catalog(&self) -> &'a Catalog<'a> {
        self.catalog
    }

    /// Currency of the cart's totals.
    pub fn currency(&self) -> &'static Currency {
        self.catalog.currency()
    }
}
