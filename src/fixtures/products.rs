//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    options::{OptionSchema, ProductOption},
    products::Product,
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in listing order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product price (e.g., "49.99 USD")
    pub price: String,

    /// Product image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// One-line description
    #[serde(default)]
    pub short_description: String,

    /// Units in stock
    pub stock: u32,

    /// Option declarations
    #[serde(default)]
    pub options: Vec<OptionFixture>,
}

/// Option Fixture
#[derive(Debug, Deserialize)]
pub struct OptionFixture {
    /// Option name
    pub name: String,

    /// Allowed values, in display order
    pub values: Vec<String>,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        let options = OptionSchema::new(
            fixture
                .options
                .into_iter()
                .map(|option| ProductOption::new(option.name, option.values)),
        )?;

        Ok(Product {
            id: fixture.id.into(),
            name: fixture.name,
            description: fixture.description,
            short_description: fixture.short_description,
            image: fixture.image,
            price: Money::from_minor(minor_units, currency),
            stock: fixture.stock,
            options,
        })
    }
}

/// Parse price string (e.g., "49.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is
/// negative or has more than two decimal places, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() || amount.normalize().scale() > 2 {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use crate::{options::OptionSchemaError, products::ProductId};

    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        assert!(matches!(
            parse_price("-1.00 USD"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_sub_cent_precision() {
        assert!(matches!(
            parse_price("1.999 USD"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_accepts_trailing_zeros() -> Result<(), FixtureError> {
        let (minor, _) = parse_price("2.500 EUR")?;

        assert_eq!(minor, 250);

        Ok(())
    }

    #[test]
    fn parse_price_accepts_gbp_usd_and_eur() -> Result<(), FixtureError> {
        let (gbp_minor, gbp) = parse_price("0.05 GBP")?;
        let (usd_minor, usd) = parse_price("49.99 USD")?;
        let (eur_minor, eur) = parse_price("3 EUR")?;

        assert_eq!(gbp_minor, 5);
        assert_eq!(gbp, GBP);
        assert_eq!(usd_minor, 4999);
        assert_eq!(usd, USD);
        assert_eq!(eur_minor, 300);
        assert_eq!(eur, EUR);

        Ok(())
    }

    #[test]
    fn product_fixture_converts_options() -> Result<(), FixtureError> {
        let fixture = ProductFixture {
            id: 5,
            name: "Collaboration Sticker Pack".to_string(),
            price: "9.99 USD".to_string(),
            image: None,
            description: String::new(),
            short_description: "20 premium vinyl stickers".to_string(),
            stock: 100,
            options: vec![OptionFixture {
                name: "pack".to_string(),
                values: vec!["Standard".to_string(), "Holographic".to_string()],
            }],
        };

        let product = Product::try_from(fixture)?;

        assert_eq!(product.id, ProductId(5));
        assert_eq!(product.price, Money::from_minor(999, USD));
        assert_eq!(
            product.options.get("pack").map(ProductOption::values),
            Some(["Standard".to_string(), "Holographic".to_string()].as_slice())
        );

        Ok(())
    }

    #[test]
    fn product_fixture_rejects_empty_option_values() {
        let fixture = ProductFixture {
            id: 1,
            name: "Toolkit".to_string(),
            price: "1.00 USD".to_string(),
            image: None,
            description: String::new(),
            short_description: String::new(),
            stock: 1,
            options: vec![OptionFixture {
                name: "format".to_string(),
                values: Vec::new(),
            }],
        };

        assert!(matches!(
            Product::try_from(fixture),
            Err(FixtureError::OptionSchema(OptionSchemaError::EmptyOptionValues(_)))
        ));
    }
}
