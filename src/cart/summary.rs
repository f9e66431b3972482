//! Cart Summary

use rusty_money::{Money, iso::Currency};

use crate::pricing::format_price;

/// Totals derived from the cart's lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary<'a> {
    /// Sum of quantities over all lines
    pub total_item_count: u64,

    /// Exact sum of unit price times quantity over all lines
    pub total_price: Money<'a, Currency>,
}

impl CartSummary<'_> {
    /// Total price rounded half-up at the currency's precision, e.g. `$124.97`.
    pub fn display_total(&self) -> String {
        format_price(&self.total_price)
    }

    /// Whether the cart holds no units.
    pub fn is_empty(&self) -> bool {
        self.total_item_count == 0
    }
}
