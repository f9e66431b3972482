//! `IdeaForge` Shop
//!
//! Cart engine and product-options model for the `IdeaForge` creative shop: a read-only product
//! catalog, a cart that merges additions by product and option selection, stock status
//! classification, and data-only views for whatever renders the shop.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod options;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod stock;
pub mod utils;
pub mod views;
