//! Checkout demo - walks a small parts cart through an M-PESA payment.
//!
//! The storefront UI is out of scope here; this binary plays its role,
//! threading the cart ledger's totals into the payment flow and reacting to
//! the observable payment state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use duka_commerce::prelude::*;
use duka_mpesa::{PaymentFlow, PhoneNumber, SandboxGateway, StkPushRequest};

/// Walk a cart through an M-PESA checkout against the sandbox gateway
#[derive(Parser)]
#[command(name = "checkout-demo")]
#[command(author, version, about)]
struct Cli {
    /// M-PESA phone number to bill (e.g. "0712 345 678")
    #[arg(short, long, default_value = "0712345678")]
    phone: String,

    /// Store settings TOML file (defaults apply if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    let phone = PhoneNumber::parse(&cli.phone).context("bad --phone argument")?;

    // What the customer picked while browsing
    let pads = Product::new("prod-pads", "Brembo Brake Pads", Money::new(4_500), 12)
        .with_brand("Brembo")
        .with_category("Brakes");
    let plugs = Product::new("prod-plugs", "NGK Spark Plugs", Money::new(450), 40)
        .with_brand("NGK")
        .with_category("Ignition");
    let filter = Product::new("prod-filter", "Mann Oil Filter", Money::new(850), 30)
        .with_brand("Mann")
        .with_category("Filters");

    let mut cart = Cart::new();
    cart.add_item(&pads, 1)?;
    cart.add_item(&plugs, 4)?;
    cart.add_item(&filter, 1)?;
    // Customer changed their mind about the plugs
    cart.update_quantity(&plugs.id, 2);

    let totals = cart.totals_with(&settings.delivery);
    print_receipt(&settings, &cart, &totals);

    let mut order = Order::place(&cart, &totals);
    info!(reference = %order.reference, "order placed");

    let request = StkPushRequest::for_order(phone, &order)?;
    let mut flow = PaymentFlow::new(SandboxGateway::accepting());

    let ack = flow.initiate(&request).await.context("payment initiation failed")?;
    order.mark_processing();
    println!();
    println!("STK push sent to {} - {}", request.phone, ack.customer_message);
    println!("Waiting for confirmation (checkout request {})...", ack.checkout_request_id);

    if flow.verify(&ack.checkout_request_id).await {
        order.mark_completed();
        cart.clear();
        println!("Payment confirmed. Order {} is {}.", order.reference, order.status.as_str());
    } else {
        order.mark_failed();
        let reason = flow
            .state()
            .error
            .as_deref()
            .unwrap_or("unknown")
            .to_string();
        println!("Payment failed: {reason}");
    }

    Ok(())
}

fn load_settings(path: Option<&std::path::Path>) -> Result<StoreSettings> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(StoreSettings::default()),
    }
}

fn print_receipt(settings: &StoreSettings, cart: &Cart, totals: &CartTotals) {
    println!("{} - Shopping Cart", settings.store_name);
    println!("{:-<48}", "");
    for item in &cart.items {
        println!(
            "{:<30} x{:<3} {:>12}",
            item.product.name,
            item.quantity,
            item.line_total().to_string()
        );
    }
    println!("{:-<48}", "");
    println!("{:<34} {:>12}", "Subtotal", totals.subtotal.to_string());
    println!(
        "{:<34} {:>12}",
        format!("VAT ({}%)", settings.vat_rate_percent),
        totals.vat_at(settings.vat_rate_percent).to_string()
    );
    let delivery = if totals.has_free_delivery() {
        "FREE".to_string()
    } else {
        totals.delivery_fee.to_string()
    };
    println!("{:<34} {:>12}", "Delivery", delivery);
    println!("{:<34} {:>12}", "Total", totals.total.to_string());
}
