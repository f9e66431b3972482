//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Product, ProductId, ProductKey};

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Product identifiers must be positive.
    #[error("Product at position {0} has id 0; ids must be positive")]
    InvalidProductId(usize),

    /// Two products share an identifier.
    #[error("Product id {0} is used more than once")]
    DuplicateProductId(ProductId),

    /// A product has a negative price.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),

    /// A product's currency differs from the catalog currency (product, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Read-only product collection, in listing order.
#[derive(Debug)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    order: Vec<ProductKey>,
    ids: FxHashMap<ProductId, ProductKey>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            products: SlotMap::with_key(),
            order: Vec::new(),
            ids: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog from products, validating ids, prices and currency.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for the first product breaking a catalog invariant.
    pub fn with_products(
        products: impl IntoIterator<Item = Product<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        for (position, product) in products.into_iter().enumerate() {
            catalog.insert(position, product)?;
        }

        Ok(catalog)
    }

    fn insert(&mut self, position: usize, product: Product<'a>) -> Result<(), CatalogError> {
        if product.id.get() == 0 {
            return Err(CatalogError::InvalidProductId(position));
        }

        if self.ids.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProductId(product.id));
        }

        if product.price.to_minor_units() < 0 {
            return Err(CatalogError::NegativePrice(product.id));
        }

        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let id = product.id;
        let key = self.products.insert(product);

        self.order.push(key);
        self.ids.insert(id, key);

        Ok(())
    }

    /// Look up a product by its public identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product<'a>> {
        let key = self.key(id)?;

        self.products.get(key)
    }

    /// Look up a product and its internal key in one step.
    pub fn entry(&self, id: ProductId) -> Option<(ProductKey, &Product<'a>)> {
        let key = self.key(id)?;

        self.products.get(key).map(|product| (key, product))
    }

    /// Look up a product by its internal key.
    pub fn get_by_key(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Internal key for a product identifier.
    pub fn key(&self, id: ProductId) -> Option<ProductKey> {
        self.ids.get(&id).copied()
    }

    /// Iterate over the products in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use super::*;

    fn products<'a>() -> [Product<'a>; 3] {
        [
            Product::new(1, "Creative Toolkit Bundle", Money::from_minor(4999, USD), 50),
            Product::new(2, "IdeaForge T-Shirt", Money::from_minor(2499, USD), 25),
            Product::new(3, "Artist Sketchbook", Money::from_minor(1999, USD), 15),
        ]
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new(USD);

        assert!(catalog.is_empty());
        assert_eq!(catalog.currency(), USD);
    }

    #[test]
    fn with_products_preserves_listing_order() -> TestResult {
        let catalog = Catalog::with_products(products(), USD)?;

        let ids: Vec<u32> = catalog.iter().map(|product| product.id.get()).collect();

        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(catalog.len(), 3);

        Ok(())
    }

    #[test]
    fn get_finds_products_by_id() -> TestResult {
        let catalog = Catalog::with_products(products(), USD)?;

        let shirt = catalog.get(ProductId(2));

        assert_eq!(shirt.map(|p| p.name.as_str()), Some("IdeaForge T-Shirt"));
        assert!(catalog.get(ProductId(99)).is_none());

        Ok(())
    }

    #[test]
    fn key_round_trips_through_get_by_key() -> TestResult {
        let catalog = Catalog::with_products(products(), USD)?;

        let key = catalog.key(ProductId(3)).ok_or("missing key")?;

        assert_eq!(
            catalog.get_by_key(key).map(|p| p.id),
            Some(ProductId(3))
        );

        Ok(())
    }

    #[test]
    fn entry_pairs_key_with_product() -> TestResult {
        let catalog = Catalog::with_products(products(), USD)?;

        let (key, product) = catalog.entry(ProductId(2)).ok_or("missing entry")?;

        assert_eq!(product.id, ProductId(2));
        assert_eq!(catalog.key(ProductId(2)), Some(key));
        assert!(catalog.entry(ProductId(99)).is_none());

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::with_products(
            [
                Product::new(1, "A", Money::from_minor(100, USD), 1),
                Product::new(1, "B", Money::from_minor(200, USD), 1),
            ],
            USD,
        );

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProductId(ProductId(1)))
        ));
    }

    #[test]
    fn zero_id_is_rejected() {
        let result =
            Catalog::with_products([Product::new(0, "A", Money::from_minor(100, USD), 1)], USD);

        assert!(matches!(result, Err(CatalogError::InvalidProductId(0))));
    }

    #[test]
    fn negative_price_is_rejected() {
        let result =
            Catalog::with_products([Product::new(7, "A", Money::from_minor(-1, USD), 1)], USD);

        assert!(matches!(
            result,
            Err(CatalogError::NegativePrice(ProductId(7)))
        ));
    }

    #[test]
    fn currency_mismatch_is_rejected() {
        let result = Catalog::with_products(
            [
                Product::new(1, "A", Money::from_minor(100, USD), 1),
                Product::new(2, "B", Money::from_minor(100, GBP), 1),
            ],
            USD,
        );

        match result {
            Err(CatalogError::CurrencyMismatch(id, product_currency, catalog_currency)) => {
                assert_eq!(id, ProductId(2));
                assert_eq!(product_currency, GBP.iso_alpha_code);
                assert_eq!(catalog_currency, USD.iso_alpha_code);
            }
            other => panic!("expected CurrencyMismatch error, got {other:?}"),
        }
    }
}
