//! Stock Status

use std::fmt;

use serde::Serialize;

/// Stock levels below this count are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Most units a single add-to-cart request may carry.
pub const MAX_QUANTITY_PER_ADD: u32 = 10;

/// Three-level classification of remaining inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum StockStatus {
    /// Nothing left to sell.
    OutOfStock,

    /// Fewer than [`LOW_STOCK_THRESHOLD`] units remain.
    LowStock {
        /// Exact units remaining
        remaining: u32,
    },

    /// At least [`LOW_STOCK_THRESHOLD`] units remain.
    InStock,
}

impl StockStatus {
    /// Classify a stock count.
    pub fn classify(stock: u32) -> Self {
        match stock {
            0 => StockStatus::OutOfStock,
            remaining if remaining < LOW_STOCK_THRESHOLD => StockStatus::LowStock { remaining },
            _ => StockStatus::InStock,
        }
    }

    /// Badge key used by display layers (`out-of-stock`, `low-stock`, `in-stock`).
    pub fn badge(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::LowStock { .. } => "low-stock",
            StockStatus::InStock => "in-stock",
        }
    }

    /// Whether the product can be purchased.
    pub fn is_available(self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
            StockStatus::LowStock { remaining } => write!(f, "Only {remaining} left!"),
            StockStatus::InStock => write!(f, "In Stock"),
        }
    }
}

/// Ceiling applied to a single addition: `min(10, stock)`.
pub fn max_quantity_per_add(stock: u32) -> u32 {
    stock.min(MAX_QUANTITY_PER_ADD)
}

/// Upper bound for a quantity selector; never below one so the control stays usable.
pub fn quantity_input_max(stock: u32) -> u32 {
    max_quantity_per_add(stock).max(1)
}

/// Clamp a requested quantity into `[1, min(10, stock)]`.
///
/// Returns `None` when nothing can be added (`stock == 0`).
pub fn clamp_quantity(requested: u32, stock: u32) -> Option<u32> {
    let ceiling = max_quantity_per_add(stock);

    (ceiling > 0).then(|| requested.clamp(1, ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_zero_is_out_of_stock() {
        assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
    }

    #[test]
    fn classify_below_threshold_is_low_stock() {
        assert_eq!(
            StockStatus::classify(5),
            StockStatus::LowStock { remaining: 5 }
        );
        assert_eq!(
            StockStatus::classify(9),
            StockStatus::LowStock { remaining: 9 }
        );
        assert_eq!(
            StockStatus::classify(1),
            StockStatus::LowStock { remaining: 1 }
        );
    }

    #[test]
    fn classify_at_threshold_is_in_stock() {
        assert_eq!(StockStatus::classify(10), StockStatus::InStock);
        assert_eq!(StockStatus::classify(100), StockStatus::InStock);
    }

    #[test]
    fn labels_include_remaining_count() {
        assert_eq!(StockStatus::classify(0).to_string(), "Out of Stock");
        assert_eq!(StockStatus::classify(5).to_string(), "Only 5 left!");
        assert_eq!(StockStatus::classify(50).to_string(), "In Stock");
    }

    #[test]
    fn badges() {
        assert_eq!(StockStatus::OutOfStock.badge(), "out-of-stock");
        assert_eq!(StockStatus::LowStock { remaining: 3 }.badge(), "low-stock");
        assert_eq!(StockStatus::InStock.badge(), "in-stock");
    }

    #[test]
    fn clamp_quantity_respects_stock_and_ceiling() {
        assert_eq!(clamp_quantity(0, 50), Some(1));
        assert_eq!(clamp_quantity(3, 50), Some(3));
        assert_eq!(clamp_quantity(25, 50), Some(10));
        assert_eq!(clamp_quantity(8, 5), Some(5));
        assert_eq!(clamp_quantity(1, 0), None);
    }

    #[test]
    fn quantity_input_max_never_drops_below_one() {
        assert_eq!(quantity_input_max(0), 1);
        assert_eq!(quantity_input_max(5), 5);
        assert_eq!(quantity_input_max(50), 10);
    }
}
