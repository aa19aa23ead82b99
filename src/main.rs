//! Demo: fill a cart, restart, check out.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use std::sync::Arc;

use anyhow::Context;
use storefront_cart::checkout::{CheckoutForm, LogLauncher};
use storefront_cart::config::StoreConfig;
use storefront_cart::lifecycle::{setup_tracing, StoreSystem};
use storefront_cart::model::{Customer, PaymentMethod, Product};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = StoreConfig::from_env().context("reading configuration")?;
    info!(dir = %config.storage_dir.display(), "Starting storefront cart");

    let beer = Product::new("1", "Cerveja Lata 350ml", "cervejas", 4.5)
        .with_description("Pilsen gelada")
        .with_volume("350ml")
        .with_alcohol_content("4.5%")
        .with_rating(4.6);
    let ice = Product::new("7", "Gelo 5kg", "outros", 12.0).with_stock(true);

    let system = StoreSystem::open(&config)
        .await
        .context("opening cart storage")?;
    async {
        let cart = &system.cart_client;
        cart.add_item(beer.clone(), 6).await?;
        cart.add_one(ice.clone()).await?;
        let update = cart.update_quantity(beer.id.clone(), 4).await?;
        info!(
            units = update.cart.item_count(),
            total = update.cart.total(),
            "Cart filled"
        );
        let persistence = update.persisted().await;
        info!(?persistence, "Cart mirrored");
        Ok::<_, anyhow::Error>(())
    }
    .instrument(tracing::info_span!("shopping"))
    .await?;
    system.shutdown().await?;

    // A fresh actor over the same storage picks the cart back up.
    let system = StoreSystem::open(&config).await?;
    let restored = system.cart_client.total().await?;
    info!(total = restored, "Cart restored after restart");

    let checkout = system.checkout(Arc::new(LogLauncher), &config);
    let form = CheckoutForm::new(
        Customer::new("Maria Souza", "(18) 99999-0000", "Rua das Flores, 120"),
        PaymentMethod::Pix,
    );
    match checkout
        .place_order(form)
        .instrument(tracing::info_span!("checkout"))
        .await
    {
        Ok(placed) => info!(total = placed.order.total, "Order handed off"),
        Err(e) => warn!(error = %e, "Checkout failed"),
    }

    drop(checkout);
    system.shutdown().await?;
    info!("Done");
    Ok(())
}
