//! `IdeaForge` Shop prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, CartSummary},
    catalog::{Catalog, CatalogError},
    checkout::CheckoutOutcome,
    fixtures::{Fixture, FixtureError, catalog_from_str},
    options::{
        OptionSchema, OptionSchemaError, OptionSelectionError, ProductOption, SelectedOptions,
    },
    pricing::format_price,
    products::{Product, ProductId, ProductKey},
    stock::{LOW_STOCK_THRESHOLD, MAX_QUANTITY_PER_ADD, StockStatus},
    views::{
        CartView, CatalogEntryView, LineView, OptionGroupView, ProductDetailView,
        added_to_cart_message, catalog_view, product_detail,
        table::{TableError, write_cart_table, write_catalog_table},
    },
};
