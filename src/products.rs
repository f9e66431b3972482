//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::{options::OptionSchema, stock::StockStatus};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Public product identifier, unique within a catalog and always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    /// Returns the raw identifier value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        ProductId(value)
    }
}

/// Product
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Long description shown on the detail view
    pub description: String,

    /// One-line description shown on the catalog listing
    pub short_description: String,

    /// Product image URL
    pub image: Option<String>,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Units available for purchase
    pub stock: u32,

    /// Declared option schema
    pub options: OptionSchema,
}

impl<'a> Product<'a> {
    /// Create a product with no image, descriptions or options.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        stock: u32,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            description: String::new(),
            short_description: String::new(),
            image: None,
            price,
            stock,
            options: OptionSchema::empty(),
        }
    }

    /// Replace the option schema.
    #[must_use]
    pub fn with_options(mut self, options: OptionSchema) -> Self {
        self.options = options;
        self
    }

    /// Set the long and short descriptions.
    #[must_use]
    pub fn with_descriptions(
        mut self,
        description: impl Into<String>,
        short_description: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self.short_description = short_description.into();
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Stock status for this product.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock)
    }

    /// Whether the product can be added to a cart at all.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}
