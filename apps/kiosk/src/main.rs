//! # Atero Kiosk
//!
//! Scripted demo driver: plays the presentation layer for one complete
//! order so the session log can be inspected end to end.
//!
//! ```text
//! welcome ──► setup ──► browse ──► cart ──► payment ──► confirmation ──► welcome
//! ```
//!
//! Run with `RUST_LOG=debug` to see every operation the session performs.

use tracing::info;
use tracing_subscriber::EnvFilter;

use atero_core::types::{Course, CourseFilter, PaymentMethod};
use atero_session::{OrderSession, Page};

fn main() {
    init_tracing();

    let mut session = OrderSession::seeded();
    info!("Atero Eats kiosk demo starting");

    // Customer walks up and starts an order
    session.navigate_to(Page::CustomerSetup);
    if let Err(e) = session.setup_customer("Alice", "5") {
        eprintln!("setup failed: {}", e);
        return;
    }

    // Browse the mains and order two portions of ribs plus a juice
    session.set_filter(CourseFilter::Only(Course::Mains));
    for item in session.visible_items() {
        info!(id = item.id, name = %item.name, price = %item.price(), "on the menu");
    }

    let ribs_token = session.add_to_cart(1).expect("ribs are on the menu");
    let _ = session.add_to_cart(1);
    session.set_filter(CourseFilter::Only(Course::Drinks));
    let _ = session.add_to_cart(4);

    // The UI's 500ms flash timer would fire about now
    session.clear_highlight(ribs_token);

    // Review the cart
    session.navigate_to(Page::CartView);
    let totals = session.cart_totals();
    info!(
        subtotal = %session.cart().subtotal(),
        discount = %session.cart().discount(),
        total = %session.cart().total(),
        mains = totals.mains_count,
        "cart reviewed"
    );

    // Pay by card (simulated) and finish up
    session.navigate_to(Page::PaymentOptions);
    session
        .select_payment_method(PaymentMethod::Card)
        .expect("card flow exists");
    match session.checkout_with_card("1234567890123456", "12/25", "123") {
        Ok(()) => info!(order_number = session.order_number(), "order confirmed"),
        Err(e) => {
            eprintln!("payment rejected: {}", e);
            return;
        }
    }

    session.finish_order();
    info!(next_order_number = session.order_number(), "kiosk ready for the next customer");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=atero=trace` - Show trace for atero crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atero=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
