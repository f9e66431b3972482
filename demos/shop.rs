//! Shop Example
//!
//! Runs a scripted shop session against a catalog fixture and prints the catalog and cart.
//!
//! Use `-f` to load a fixture set by name
//! Use `-a ID[xQTY][:name=value,...]` to add items (repeatable)
//! Use `-r INDEX` to remove cart lines after the additions (repeatable)
//! Use `--checkout` to attempt checkout and `-o yaml` for YAML output

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use ideaforge_shop::{
    cart::Cart,
    fixtures::Fixture,
    utils::{ExampleShopArgs, LogFormat, OutputFormat},
    views::{
        CartView, added_to_cart_message, catalog_view,
        table::{write_cart_table, write_catalog_table},
    },
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(args: &ExampleShopArgs) -> Result<()> {
    let filter = EnvFilter::try_new(&args.log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    match args.log_format {
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(true).with_writer(io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .try_init()?,
    }

    Ok(())
}

/// Shop Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleShopArgs::parse();

    init_logging(&args)?;

    let catalog = Fixture::with_base_path(&args.fixtures_dir).load_catalog(&args.fixture)?;
    let mut cart = Cart::new(&catalog);

    for request in &args.add {
        let options = request.options_for(catalog.get(request.product_id));

        match cart.add_item(request.product_id, request.quantity, options) {
            Ok(added) => {
                if let Some(product) = catalog.get(request.product_id) {
                    println!("{}", added_to_cart_message(added, &product.name));
                }
            }
            Err(error) => warn!(%error, "could not add to cart"),
        }
    }

    for &index in &args.remove {
        if let Err(error) = cart.remove_line(index) {
            warn!(%error, "could not remove cart line");
        }
    }

    let entries = catalog_view(&catalog);
    let cart_view = CartView::from(&cart);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match args.output {
        OutputFormat::Table => {
            write_catalog_table(&mut handle, &entries)?;
            write_cart_table(&mut handle, &cart_view)?;
        }
        OutputFormat::Yaml => {
            writeln!(handle, "{}", serde_norway::to_string(&entries)?)?;
            writeln!(handle, "{}", serde_norway::to_string(&cart_view)?)?;
        }
    }

    if args.checkout {
        writeln!(handle, "{}", cart.checkout())?;
    }

    Ok(())
}
