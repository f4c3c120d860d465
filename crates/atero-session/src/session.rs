//! # Order Session
//!
//! Composes the menu catalog and the cart with customer identity,
//! navigation and checkout for one customer.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    OrderSession Operations                              │
//! │                                                                         │
//! │  UI Event                    Session Method          Touches            │
//! │  ────────                    ──────────────          ───────            │
//! │  "View Menu" tap ──────────► setup_customer()        identity, page     │
//! │  Course chip tap ──────────► set_filter()            filter, page       │
//! │  "Add to Cart" tap ────────► add_to_cart()           cart, highlight    │
//! │  +/- stepper ──────────────► set_quantity()          cart               │
//! │  "Mark Out" (admin) ───────► toggle_availability()   catalog AND cart   │
//! │  "Add Item" (admin) ───────► add_menu_item()         catalog            │
//! │  Method tile tap ──────────► select_payment_method() payment, page      │
//! │  "Submit Payment" ─────────► checkout_with_card()    page               │
//! │  Cash instructions ────────► checkout_with_cash()    (read only)        │
//! │  "Finish Order" ───────────► finish_order()          cart, order#, page │
//! │  "Logout" ─────────────────► logout()                everything but     │
//! │                                                      the catalog        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation runs synchronously on the single logical thread of UI
//! event dispatch and completes before the next event is processed, so no
//! locking is needed anywhere in the session.

use rand::Rng;
use tracing::{debug, info};

use atero_core::cart::{Cart, CartTotals};
use atero_core::catalog::MenuCatalog;
use atero_core::types::{Course, CourseAverage, CourseFilter, MenuItem, PaymentMethod};
use atero_core::validation::{
    validate_card_cvc, validate_card_expiry, validate_card_number, validate_customer_name,
    validate_feedback, validate_table_number,
};
use atero_core::GUEST_NAME;

use crate::error::{SessionError, SessionResult};
use crate::highlight::{Highlight, HighlightToken};
use crate::page::Page;
use crate::{ADMIN_PASSCODE, ORDER_NUMBER_MAX, ORDER_NUMBER_MIN};

// =============================================================================
// Order Session
// =============================================================================

/// One customer's ordering session.
///
/// Owns its catalog and cart as plain injected values; there are no global
/// service singletons. Construct with [`OrderSession::new`] (your catalog)
/// or [`OrderSession::seeded`] (the stock menu).
#[derive(Debug)]
pub struct OrderSession {
    catalog: MenuCatalog,
    cart: Cart,

    /// Customer display name; `"Guest"` until setup completes.
    customer_name: String,
    /// Table number; 0 means "unset".
    table_number: u32,

    page: Page,
    filter: CourseFilter,
    payment_method: Option<PaymentMethod>,

    /// 5-digit number shown to the customer and the cashier.
    /// Regenerated on every completed checkout cycle.
    order_number: u32,

    highlight: Highlight,
}

impl OrderSession {
    /// Creates a session over an injected catalog.
    pub fn new(catalog: MenuCatalog) -> Self {
        OrderSession {
            catalog,
            cart: Cart::new(),
            customer_name: GUEST_NAME.to_string(),
            table_number: 0,
            page: Page::Welcome,
            filter: CourseFilter::All,
            payment_method: None,
            order_number: generate_order_number(),
            highlight: Highlight::default(),
        }
    }

    /// Creates a session over the stock Atero Eats menu.
    pub fn seeded() -> Self {
        OrderSession::new(MenuCatalog::seed())
    }

    // =========================================================================
    // Read Side
    // =========================================================================

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn table_number(&self) -> u32 {
        self.table_number
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn filter(&self) -> CourseFilter {
        self.filter
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn order_number(&self) -> u32 {
        self.order_number
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The item currently carrying the "recently added" flash, if any.
    pub fn recently_added(&self) -> Option<u32> {
        self.highlight.current_item()
    }

    /// Menu items passing the active course filter, in catalog order.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.catalog.filter_by_course(self.filter)
    }

    /// Quantity of an item in the cart, 0 if absent.
    pub fn quantity_of(&self, item_id: u32) -> i64 {
        self.cart.quantity_of(item_id)
    }

    /// Cart summary for the cart and payment screens.
    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    /// Per-course average prices for the admin panel.
    pub fn average_price_by_course(&self) -> Vec<CourseAverage> {
        self.catalog.average_price_by_course()
    }

    // =========================================================================
    // Navigation & Identity
    // =========================================================================

    /// Navigates to a page without further side effects.
    pub fn navigate_to(&mut self, page: Page) {
        debug!(?page, "navigate");
        self.page = page;
    }

    /// Captures the customer's name and table number and proceeds to the
    /// menu.
    ///
    /// ## Validation
    /// - Trimmed name must be non-empty
    /// - `table_raw` must parse to an integer >= 1
    pub fn setup_customer(&mut self, name: &str, table_raw: &str) -> SessionResult<()> {
        let name = validate_customer_name(name)?;
        let table = validate_table_number(table_raw)?;

        info!(customer = %name, table, "customer setup complete");
        self.customer_name = name;
        self.table_number = table;
        self.page = Page::Home;
        Ok(())
    }

    /// Sets the active course filter and shows the menu.
    pub fn set_filter(&mut self, filter: CourseFilter) {
        debug!(?filter, "set filter");
        self.filter = filter;
        self.page = Page::Home;
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds a catalog item to the cart.
    ///
    /// ## Behavior
    /// - Unknown id: no-op, returns `None`
    /// - Unavailable item: cart unchanged, returns `None`
    /// - Otherwise: quantity bump or new line, highlight armed
    ///
    /// ## Returns
    /// The highlight token on success. The host should schedule
    /// [`OrderSession::clear_highlight`] with it after
    /// [`crate::HIGHLIGHT_MS`] milliseconds.
    pub fn add_to_cart(&mut self, item_id: u32) -> Option<HighlightToken> {
        let item = match self.catalog.item(item_id) {
            Some(item) => item.clone(),
            None => {
                debug!(item_id, "add_to_cart: unknown item");
                return None;
            }
        };

        if !self.cart.add(&item) {
            debug!(item_id, "add_to_cart: item is sold out");
            return None;
        }

        debug!(item_id, quantity = self.cart.quantity_of(item_id), "added to cart");
        Some(self.highlight.arm(item_id))
    }

    /// Clears the "recently added" flash if `token` is still current.
    ///
    /// Safe to call late or repeatedly; a superseded token is ignored.
    pub fn clear_highlight(&mut self, token: HighlightToken) {
        self.highlight.clear(token);
    }

    /// Sets a cart line's quantity; `<= 0` removes the line.
    pub fn set_quantity(&mut self, item_id: u32, quantity: i64) {
        debug!(item_id, quantity, "set quantity");
        self.cart.set_quantity(item_id, quantity);
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    /// Checks the chef panel passcode and opens the panel.
    ///
    /// A static shared-secret placeholder - not real authentication.
    pub fn admin_login(&mut self, passcode: &str) -> SessionResult<()> {
        if passcode != ADMIN_PASSCODE {
            return Err(SessionError::IncorrectPasscode);
        }
        info!("chef panel unlocked");
        self.page = Page::ChefPanel;
        Ok(())
    }

    /// Adds a new menu item from the admin panel.
    ///
    /// ## Returns
    /// The id assigned to the new item.
    pub fn add_menu_item(
        &mut self,
        name: &str,
        description: &str,
        course: Course,
        price_cents: i64,
    ) -> SessionResult<u32> {
        let item = self.catalog.add_item(name, description, course, price_cents)?;
        let id = item.id;
        info!(id, name = %item.name, "menu item added");
        Ok(id)
    }

    /// Flips an item's availability, evicting it from the cart when it goes
    /// out of stock.
    ///
    /// The eviction happens inside this call, before it returns: at no
    /// observable point does the cart hold a line for an unavailable item.
    /// The inverse toggle does not reinsert anything.
    ///
    /// ## Returns
    /// `Some(new_flag)`; `None` (silent no-op) for an unknown id.
    pub fn toggle_availability(&mut self, item_id: u32) -> Option<bool> {
        let now_available = self.catalog.toggle_availability(item_id)?;

        if !now_available {
            self.cart.evict(item_id);
            info!(item_id, "item marked out of stock and evicted from cart");
        } else {
            info!(item_id, "item marked in stock");
        }

        Some(now_available)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Records the chosen payment method and moves to its screen.
    ///
    /// `Voucher` is listed but has no flow; selecting it fails without
    /// changing the page or the stored method.
    pub fn select_payment_method(&mut self, method: PaymentMethod) -> SessionResult<()> {
        let page = match method {
            PaymentMethod::Card => Page::CardPayment,
            PaymentMethod::Cash => Page::CashPayment,
            PaymentMethod::Voucher => {
                return Err(SessionError::UnsupportedPaymentMethod(method));
            }
        };

        debug!(%method, "payment method selected");
        self.payment_method = Some(method);
        self.page = page;
        Ok(())
    }

    /// Validates the card fields and simulates the payment.
    ///
    /// ## Validation (first failing field wins)
    /// 1. `number` - exactly 16 digits
    /// 2. `expiry` - MM/YY
    /// 3. `cvc`    - 3 or 4 digits
    ///
    /// On success the session moves to the confirmation screen. The cart is
    /// left intact until [`OrderSession::finish_order`] - no gateway is
    /// called anywhere.
    pub fn checkout_with_card(
        &mut self,
        number: &str,
        expiry: &str,
        cvc: &str,
    ) -> SessionResult<()> {
        validate_card_number(number)?;
        validate_card_expiry(expiry)?;
        validate_card_cvc(cvc)?;

        info!(
            order_number = self.order_number,
            total = %self.cart.total(),
            "card payment simulated"
        );
        self.page = Page::Confirmation;
        Ok(())
    }

    /// Returns the order number for the pay-at-counter instructions.
    ///
    /// Purely a read: the cart and order number stay untouched until the
    /// customer acknowledges with [`OrderSession::finish_order`].
    pub fn checkout_with_cash(&self) -> u32 {
        debug!(order_number = self.order_number, "cash checkout instructions shown");
        self.order_number
    }

    /// Completes the checkout cycle.
    ///
    /// Clears the cart and the payment method, regenerates the 5-digit
    /// order number for the next cycle, and returns to the entry screen.
    pub fn finish_order(&mut self) {
        info!(order_number = self.order_number, "order finished");
        self.cart.clear();
        self.payment_method = None;
        self.order_number = generate_order_number();
        self.page = Page::Welcome;
    }

    /// Resets the session to its defaults.
    ///
    /// Identity, filter, cart, payment method and highlight all reset; the
    /// menu catalog is deliberately left as-is (admin edits survive).
    pub fn logout(&mut self) {
        info!("logout");
        self.customer_name = GUEST_NAME.to_string();
        self.table_number = 0;
        self.cart.clear();
        self.filter = CourseFilter::All;
        self.payment_method = None;
        self.highlight.reset();
        self.page = Page::Welcome;
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Accepts free-text feedback from the settings screen.
    ///
    /// There is no transport behind this screen - the text is validated and
    /// logged, nothing more.
    pub fn send_feedback(&mut self, text: &str) -> SessionResult<()> {
        let text = validate_feedback(text)?;
        info!(feedback = %text, "customer feedback received");
        Ok(())
    }
}

/// Draws a fresh 5-digit order number in `[10000, 99999]`.
fn generate_order_number() -> u32 {
    rand::thread_rng().gen_range(ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX)
}

// =============================================================================
// Unit Tests
// =============================================================================
