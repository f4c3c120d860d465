//! End-to-end exercises of the ordering flow, driving the session exactly
//! the way a presentation layer would: one synchronous call per UI event.

use atero_core::types::{Course, CourseFilter, PaymentMethod};
use atero_session::{OrderSession, Page, ORDER_NUMBER_MAX, ORDER_NUMBER_MIN};

#[test]
fn happy_path_card_order() {
    let mut session = OrderSession::seeded();

    // Welcome -> setup -> browse
    session.navigate_to(Page::CustomerSetup);
    session.setup_customer("Alice", "5").unwrap();
    assert_eq!(session.page(), Page::Home);

    // Browse mains only, add two portions of ribs
    session.set_filter(CourseFilter::Only(Course::Mains));
    let ribs_id = session.visible_items()[0].id;
    let first = session.add_to_cart(ribs_id).unwrap();
    let second = session.add_to_cart(ribs_id).unwrap();

    // The deferred highlight clears fire in order; both are harmless
    session.clear_highlight(first);
    session.clear_highlight(second);
    assert_eq!(session.recently_added(), None);

    // Review the cart: R250 x 2, one R50 mains discount
    session.navigate_to(Page::CartView);
    let totals = session.cart_totals();
    assert_eq!(totals.subtotal_cents, 50_000);
    assert_eq!(totals.discount_cents, 5_000);
    assert_eq!(totals.total_cents, 45_000);

    // Pay by card and finish
    session.navigate_to(Page::PaymentOptions);
    session.select_payment_method(PaymentMethod::Card).unwrap();
    session
        .checkout_with_card("1234567890123456", "12/25", "123")
        .unwrap();
    assert_eq!(session.page(), Page::Confirmation);

    session.finish_order();
    assert_eq!(session.page(), Page::Welcome);
    assert!(session.cart().is_empty());
    assert_eq!(session.payment_method(), None);
    assert!((ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX).contains(&session.order_number()));
}

#[test]
fn cash_order_waits_for_acknowledgement() {
    let mut session = OrderSession::seeded();
    session.setup_customer("Bob", "12").unwrap();
    session.add_to_cart(4).unwrap(); // Fresh Orange Juice

    session.select_payment_method(PaymentMethod::Cash).unwrap();
    assert_eq!(session.page(), Page::CashPayment);

    // Showing the instructions mutates nothing
    let shown = session.checkout_with_cash();
    assert_eq!(shown, session.order_number());
    assert_eq!(session.quantity_of(4), 1);

    // Acknowledge at the counter
    session.finish_order();
    assert!(session.cart().is_empty());
}

#[test]
fn admin_stockout_evicts_customer_cart_mid_order() {
    let mut session = OrderSession::seeded();
    session.setup_customer("Carol", "3").unwrap();
    session.add_to_cart(1).unwrap(); // Rib King Ribs
    session.add_to_cart(7).unwrap(); // Burger Deluxe

    // The kitchen runs out of ribs: flag flip and eviction are one step
    session.admin_login("admin").unwrap();
    assert_eq!(session.toggle_availability(1), Some(false));
    assert_eq!(session.quantity_of(1), 0);
    assert_eq!(session.quantity_of(7), 1);

    // Ribs come back; the cart line does not
    assert_eq!(session.toggle_availability(1), Some(true));
    assert_eq!(session.quantity_of(1), 0);

    // And the customer cannot add a sold-out item in the window between
    assert_eq!(session.toggle_availability(1), Some(false));
    assert!(session.add_to_cart(1).is_none());
}

#[test]
fn declined_card_fields_keep_the_session_on_the_form() {
    let mut session = OrderSession::seeded();
    session.setup_customer("Dan", "8").unwrap();
    session.add_to_cart(2).unwrap();
    session.select_payment_method(PaymentMethod::Card).unwrap();

    let err = session.checkout_with_card("123", "12/25", "123").unwrap_err();
    assert!(err.to_string().contains("card number"));
    assert_eq!(session.page(), Page::CardPayment);
    assert_eq!(session.quantity_of(2), 1);
}

#[test]
fn logout_preserves_admin_menu_edits() {
    let mut session = OrderSession::seeded();
    session.admin_login("admin").unwrap();
    session
        .add_menu_item(
            "Bobotie",
            "Cape Malay curried mince bake.",
            Course::Mains,
            14_250,
        )
        .unwrap();

    session.setup_customer("Eve", "2").unwrap();
    session.add_to_cart(8).unwrap();
    session.logout();

    // Session state is back to defaults...
    assert_eq!(session.customer_name(), "Guest");
    assert!(session.cart().is_empty());
    assert_eq!(session.page(), Page::Welcome);

    // ...but the catalog keeps the new dish
    assert_eq!(session.catalog().item(8).unwrap().name, "Bobotie");
}
