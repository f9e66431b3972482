//! Plain-text tables for terminal display layers.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::views::{CartView, CatalogEntryView};

/// Errors raised while writing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Writing to the output failed.
    #[error("failed to write table: {0}")]
    Io(#[from] io::Error),
}

/// Write the catalog listing as a table.
///
/// # Errors
///
/// Returns a [`TableError`] if the output cannot be written.
pub fn write_catalog_table(
    mut out: impl io::Write,
    entries: &[CatalogEntryView],
) -> Result<(), TableError> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Product", "Price", "Stock", ""]);

    for entry in entries {
        builder.push_record([
            entry.id.to_string(),
            entry.name.clone(),
            entry.price.clone(),
            entry.stock_label.clone(),
            entry.action_label.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the cart lines and totals as a table.
///
/// # Errors
///
/// Returns a [`TableError`] if the output cannot be written.
pub fn write_cart_table(mut out: impl io::Write, cart: &CartView) -> Result<(), TableError> {
    if let Some(notice) = cart.empty_notice {
        writeln!(out, "{notice}")?;
        writeln!(out, "Total: {}", cart.total_price)?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Options", "Price", "Qty", "Total"]);

    for line in &cart.lines {
        builder.push_record([
            format!("#{:<3}", line.position),
            line.name.clone(),
            line.options_text.clone(),
            line.unit_price.clone(),
            line.quantity.to_string(),
            line.line_total.clone(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "Items: {}  Total: {}",
        cart.total_item_count, cart.total_price
    )?;

    Ok(())
}
