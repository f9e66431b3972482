//! Pricing
//!
//! Money is carried as integer minor units so totals are exact; rounding only happens when an
//! amount is formatted for display.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

/// Price of `quantity` units at `unit_price`, in minor units.
pub fn line_total_minor(unit_price: &Money<'_, Currency>, quantity: u32) -> i64 {
    unit_price
        .to_minor_units()
        .saturating_mul(i64::from(quantity))
}

/// Price of `quantity` units at `unit_price`.
pub fn line_total<'a>(unit_price: &Money<'a, Currency>, quantity: u32) -> Money<'a, Currency> {
    Money::from_minor(
        line_total_minor(unit_price, quantity),
        unit_price.currency(),
    )
}

/// Round a major-unit amount to `decimal_places`, halves away from zero.
pub fn round_for_display(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a money amount for display, e.g. `$124.97`.
pub fn format_price(amount: &Money<'_, Currency>) -> String {
    format_minor(amount.to_minor_units(), amount.currency())
}

/// Format a minor-unit amount in `currency` for display.
///
/// Minor units are scaled by the currency's exponent, so `1050` is `$10.50` but `1050 JPY`.
pub fn format_minor(minor_units: i64, currency: &Currency) -> String {
    let decimal_places = currency.exponent;
    let major = round_for_display(Decimal::new(minor_units, decimal_places), decimal_places);
    let sign = if major.is_sign_negative() { "-" } else { "" };
    let major = major.abs();
    let precision = decimal_places as usize;

    let symbol = match currency.iso_alpha_code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{major:.precision$} {}", currency.iso_alpha_code)
    } else {
        format!("{sign}{symbol}{major:.precision$}")
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, JPY, KWD, USD};

    use super::*;

    #[test]
    fn line_total_multiplies_exactly() {
        let price = Money::from_minor(4999, USD);

        assert_eq!(line_total(&price, 2), Money::from_minor(9998, USD));
        assert_eq!(line_total_minor(&price, 0), 0);
    }

    #[test]
    fn format_price_uses_currency_symbol() {
        assert_eq!(format_price(&Money::from_minor(12497, USD)), "$124.97");
        assert_eq!(format_price(&Money::from_minor(5, GBP)), "£0.05");
        assert_eq!(format_price(&Money::from_minor(0, USD)), "$0.00");
    }

    #[test]
    fn format_price_falls_back_to_code() {
        assert_eq!(format_minor(1050, JPY), "1050 JPY");
        assert_eq!(format_minor(1050, KWD), "1.050 KWD");
    }

    #[test]
    fn format_price_scales_by_currency_exponent() {
        assert_eq!(format_price(&Money::from_minor(1050, JPY)), "1050 JPY");
        assert_eq!(format_price(&Money::from_minor(1050, USD)), "$10.50");
    }

    #[test]
    fn format_price_negative_amounts() {
        assert_eq!(format_minor(-250, USD), "-$2.50");
    }

    #[test]
    fn round_for_display_rounds_half_up() {
        assert_eq!(
            round_for_display(Decimal::new(12_345, 3), 2),
            Decimal::new(1235, 2)
        );
        assert_eq!(
            round_for_display(Decimal::new(12_344, 3), 2),
            Decimal::new(1234, 2)
        );
    }
}
