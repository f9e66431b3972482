//! Fixtures
//!
//! Catalogs are loaded from YAML files under `<base>/products/<name>.yml`.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{Catalog, CatalogError},
    options::OptionSchemaError,
    products::Product,
};

pub mod products;

use products::{ProductsFixture, parse_price};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The fixture defines no products, so the catalog currency is unknown
    #[error("No products in fixture; currency unknown")]
    NoProducts,

    /// Invalid option declaration
    #[error("Invalid option schema: {0}")]
    OptionSchema(#[from] OptionSchemaError),

    /// Products break a catalog invariant
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a catalog from `products/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the products break a
    /// catalog invariant.
    pub fn load_catalog(&self, name: &str) -> Result<Catalog<'static>, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let catalog = catalog_from_str(&contents)?;

        info!(
            path = %file_path.display(),
            products = catalog.len(),
            currency = catalog.currency().iso_alpha_code,
            "loaded catalog fixture"
        );

        Ok(catalog)
    }
}

/// Build a catalog from YAML fixture contents.
///
/// The catalog currency is taken from the first product; every other product must match it.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, a price or option is invalid, or the products
/// break a catalog invariant.
pub fn catalog_from_str(contents: &str) -> Result<Catalog<'static>, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(contents)?;

    let first = fixture.products.first().ok_or(FixtureError::NoProducts)?;
    let (_minor_units, currency): (i64, &'static Currency) = parse_price(&first.price)?;

    let products = fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::with_products(products, currency)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    const SMALL_CATALOG: &str = "
products:
  - id: 1
    name: Creative Toolkit Bundle
    price: 49.99 USD
    stock: 50
    options:
      - name: format
        values: [Digital Download, USB Drive]
  - id: 6
    name: Writer's Inspiration Deck
    price: 14.99 USD
    stock: 5
";

    #[test]
    fn catalog_from_str_preserves_file_order() -> TestResult {
        let catalog = catalog_from_str(SMALL_CATALOG)?;

        let ids: Vec<ProductId> = catalog.iter().map(|product| product.id).collect();

        assert_eq!(ids, [ProductId(1), ProductId(6)]);
        assert_eq!(catalog.currency(), USD);

        Ok(())
    }

    #[test]
    fn catalog_from_str_rejects_empty_fixture() {
        let result = catalog_from_str("products: []");

        assert!(matches!(result, Err(FixtureError::NoProducts)));
    }

    #[test]
    fn catalog_from_str_rejects_mixed_currencies() {
        let yaml = "
products:
  - id: 1
    name: A
    price: 1.00 GBP
    stock: 1
  - id: 2
    name: B
    price: 1.00 USD
    stock: 1
";

        let result = catalog_from_str(yaml);

        assert!(matches!(
            result,
            Err(FixtureError::Catalog(CatalogError::CurrencyMismatch(
                ProductId(2),
                "USD",
                "GBP"
            )))
        ));
    }

    #[test]
    fn catalog_from_str_rejects_duplicate_ids() {
        let yaml = "
products:
  - id: 3
    name: A
    price: 1.00 GBP
    stock: 1
  - id: 3
    name: B
    price: 2.00 GBP
    stock: 1
";

        assert!(matches!(
            catalog_from_str(yaml),
            Err(FixtureError::Catalog(CatalogError::DuplicateProductId(
                ProductId(3)
            )))
        ));
    }

    #[test]
    fn catalog_from_str_rejects_malformed_yaml() {
        assert!(matches!(
            catalog_from_str("products: {"),
            Err(FixtureError::Yaml(_))
        ));
    }

    #[test]
    fn load_catalog_reads_from_base_path() -> TestResult {
        let dir = tempfile::tempdir()?;
        let products_dir = dir.path().join("products");

        fs::create_dir_all(&products_dir)?;
        fs::write(
            products_dir.join("pounds.yml"),
            "products:\n  - id: 9\n    name: Mug\n    price: 8.50 GBP\n    stock: 12\n",
        )?;

        let catalog = Fixture::with_base_path(dir.path()).load_catalog("pounds")?;

        assert_eq!(catalog.currency(), GBP);
        assert_eq!(catalog.get(ProductId(9)).map(|p| p.stock), Some(12));

        Ok(())
    }

    #[test]
    fn load_catalog_missing_file_is_io_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = Fixture::with_base_path(dir.path()).load_catalog("missing");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }
}
