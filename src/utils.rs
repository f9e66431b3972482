//! Utils

use std::{path::PathBuf, str::FromStr};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::{
    options::SelectedOptions,
    products::{Product, ProductId},
};

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// How the demo prints catalog and cart views.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text tables.
    Table,

    /// YAML documents of the view records.
    Yaml,
}

/// Arguments for the shop examples
#[derive(Debug, Parser)]
#[command(name = "shop", about = "Run a scripted IdeaForge shop session", long_about = None)]
pub struct ExampleShopArgs {
    /// Fixture set to load the catalog from
    #[arg(short, long, default_value = "shop")]
    pub fixture: String,

    /// Directory containing `products/<fixture>.yml`
    #[arg(long, env = "SHOP_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Add to the cart: `ID[xQTY][:name=value,...]`, e.g. `2x3:size=M,color=Black`
    #[arg(short, long = "add", value_name = "REQUEST")]
    pub add: Vec<AddRequest>,

    /// Remove the cart line at this position (applied after additions, in order)
    #[arg(short, long = "remove", value_name = "INDEX")]
    pub remove: Vec<usize>,

    /// Attempt checkout once the cart is built
    #[arg(long)]
    pub checkout: bool,

    /// Output format (table, yaml)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Errors parsing an add-to-cart request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddRequestError {
    /// The product id is not a positive integer.
    #[error("invalid product id: {0}")]
    InvalidProductId(String),

    /// The quantity is not a non-negative integer.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// An option is not written as `name=value`.
    #[error("invalid option {0}, expected name=value")]
    InvalidOption(String),
}

/// A parsed add-to-cart request from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    /// Product to add
    pub product_id: ProductId,

    /// Requested quantity
    pub quantity: u32,

    /// Explicit option selection; `None` selects each option's first value
    pub options: Option<SelectedOptions>,
}

impl AddRequest {
    /// Options to submit for `product`, defaulting to each option's first value.
    pub fn options_for(&self, product: Option<&Product<'_>>) -> SelectedOptions {
        match (&self.options, product) {
            (Some(options), _) => options.clone(),
            (None, Some(product)) => product.options.default_selection(),
            (None, None) => SelectedOptions::new(),
        }
    }
}

impl FromStr for AddRequest {
    type Err = AddRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (item, options) = match s.split_once(':') {
            Some((item, options)) => (item, Some(options)),
            None => (s, None),
        };

        let (id, quantity) = match item.split_once(['x', 'X']) {
            Some((id, quantity)) => (id, Some(quantity)),
            None => (item, None),
        };

        let product_id = id
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|id| *id > 0)
            .map(ProductId)
            .ok_or_else(|| AddRequestError::InvalidProductId(id.to_string()))?;

        let quantity = match quantity {
            Some(quantity) => quantity
                .trim()
                .parse::<u32>()
                .map_err(|_err| AddRequestError::InvalidQuantity(quantity.to_string()))?,
            None => 1,
        };

        let options = options.map(parse_options).transpose()?;

        Ok(Self {
            product_id,
            quantity,
            options,
        })
    }
}

fn parse_options(s: &str) -> Result<SelectedOptions, AddRequestError> {
    s.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.trim(), value.trim()))
                .filter(|(name, value)| !name.is_empty() && !value.is_empty())
                .ok_or_else(|| AddRequestError::InvalidOption(pair.to_string()))
        })
        .collect()
}
