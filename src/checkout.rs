//! Checkout

use std::fmt;

use serde::Serialize;

/// Result of asking the cart to check out.
///
/// Payment is not handled; checkout only tells the shopper whether there is anything to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutOutcome {
    /// The cart has no lines.
    EmptyCart,

    /// The cart has lines, but checkout is not available yet.
    ComingSoon,
}

impl CheckoutOutcome {
    /// Notice shown to the shopper.
    pub fn message(self) -> &'static str {
        match self {
            CheckoutOutcome::EmptyCart => "Your cart is empty!",
            CheckoutOutcome::ComingSoon => "Checkout feature coming soon!",
        }
    }
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
