//! # Cart
//!
//! Cart lines and derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  UI Action               Cart Method            State Change            │
//! │  ─────────               ───────────            ────────────            │
//! │                                                                         │
//! │  Tap "Add to Cart" ────► add(&item) ──────────► new line / qty + 1     │
//! │                                                                         │
//! │  Tap +/- stepper ──────► set_quantity(id, n) ─► qty = n (n<=0 removes) │
//! │                                                                         │
//! │  Item marked Out ──────► evict(id) ───────────► line removed           │
//! │                                                                         │
//! │  Order finished ───────► clear() ─────────────► lines emptied          │
//! │                                                                         │
//! │  Cart summary ─────────► subtotal()/discount()/total()  (read only)    │
//! │                                                                         │
//! │  NOTE: derived values are recomputed from the lines on every read.     │
//! │        Nothing is cached, so totals can never go stale.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All operations are synchronous and total: the only operation that can
//! refuse is `add` (returns `false` for an unavailable item), and unknown
//! ids are no-ops rather than errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Course, MenuItem};
use crate::{MAINS_DISCOUNT_CENTS, MAINS_PER_DISCOUNT};

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: an item snapshot plus a quantity.
///
/// ## Design Notes
/// - The line holds a **structural copy** of the item fields at add time.
///   Catalog price or name changes after adding do not retroactively affect
///   lines already in the cart.
/// - At most one line exists per `item_id`; repeat adds bump the quantity
///   on the existing line, preserving its original snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog id of the snapshotted item.
    pub item_id: u32,

    /// Name at time of adding (frozen).
    pub name: String,

    /// Course at time of adding (frozen); drives the mains discount.
    pub course: Course,

    /// Price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub price_cents: i64,

    /// Quantity in cart. Always >= 1 for a live line.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from an item, with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the item's catalog price
    /// changes later, this line retains the original price.
    pub fn from_item(item: &MenuItem) -> Self {
        CartLine {
            item_id: item.id,
            name: item.name.clone(),
            course: item.course,
            price_cents: item.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one customer session.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item bumps quantity)
/// - `quantity >= 1` for every live line (setting quantity <= 0 removes it)
/// - `price_cents >= 0` for every line (catalog validation guarantees > 0)
/// - The cart never holds a line for an item currently marked unavailable;
///   the session evicts the line in the same call that flips the flag
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in first-add order.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item to the cart, or bumps its quantity if already present.
    ///
    /// ## Behavior
    /// - Unavailable item: returns `false`, cart unchanged
    /// - Item already in cart: quantity + 1, snapshot untouched
    /// - Otherwise: new line with quantity 1, full field snapshot
    ///
    /// ## Returns
    /// `true` when the cart was mutated.
    pub fn add(&mut self, item: &MenuItem) -> bool {
        if !item.available {
            return false;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from_item(item));
        }
        true
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line entirely
    /// - Otherwise: replaces the quantity, other snapshot fields unchanged
    /// - Unknown id: no-op (repeating `set_quantity(id, 0)` is safe)
    pub fn set_quantity(&mut self, item_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|l| l.item_id != item_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Returns the quantity of an item in the cart, 0 if absent.
    pub fn quantity_of(&self, item_id: u32) -> i64 {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map_or(0, |l| l.quantity)
    }

    /// Removes the line for an item, if present.
    ///
    /// Used when an item is toggled unavailable while sitting in the cart.
    pub fn evict(&mut self, item_id: u32) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines (the cart badge count).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal before discounts.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Sums quantities across lines whose course is Mains.
    pub fn mains_count(&self) -> i64 {
        self.lines
            .iter()
            .filter(|l| l.course == Course::Mains)
            .map(|l| l.quantity)
            .sum()
    }

    /// Calculates the special discount: R50 off per 2 main-course units.
    ///
    /// Floor division - 3 mains earn one discount step, 4 earn two.
    pub fn discount(&self) -> Money {
        let steps = self.mains_count() / MAINS_PER_DISCOUNT;
        Money::from_cents(steps * MAINS_DISCOUNT_CENTS)
    }

    /// Calculates the final total: subtotal minus discount, clamped at zero.
    ///
    /// The discount formula alone does not guarantee `discount <= subtotal`
    /// (a catalog could price a main below R25), so the subtraction
    /// saturates instead of going negative.
    pub fn total(&self) -> Money {
        self.subtotal().saturating_sub(self.discount())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub mains_count: i64,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            mains_count: cart.mains_count(),
            subtotal_cents: cart.subtotal().cents(),
            discount_cents: cart.discount().cents(),
            total_cents: cart.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(id: u32, course: Course, price_cents: i64) -> MenuItem {
        MenuItem {
            id,
            name: format!("Item {}", id),
            description: format!("Description of item {}", id),
            course,
            price_cents,
            available: true,
        }
    }

    #[test]
    fn test_repeated_adds_accumulate() {
        let mut cart = Cart::new();
        let item = test_item(1, Course::Drinks, 4_500);

        for _ in 0..4 {
            assert!(cart.add(&item));
        }

        assert_eq!(cart.line_count(), 1); // still one unique line
        assert_eq!(cart.quantity_of(1), 4);
        assert_eq!(cart.subtotal().cents(), 18_000); // price * count
    }

    #[test]
    fn test_add_unavailable_is_rejected() {
        let mut cart = Cart::new();
        let mut item = test_item(6, Course::Starters, 6_000);
        item.available = false;

        assert!(!cart.add(&item));
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(6), 0);
    }

    #[test]
    fn test_snapshot_price_is_frozen() {
        let mut cart = Cart::new();
        let mut item = test_item(5, Course::Mains, 18_000);

        cart.add(&item);
        item.price_cents = 99_900; // catalog price change after adding

        cart.add(&item); // bumps quantity on the existing line
        assert_eq!(cart.quantity_of(5), 2);
        assert_eq!(cart.subtotal().cents(), 36_000); // still the old price
    }

    #[test]
    fn test_set_quantity_zero_removes_and_is_idempotent() {
        let mut cart = Cart::new();
        let item = test_item(2, Course::Starters, 9_500);
        cart.add(&item);

        cart.set_quantity(2, 0);
        assert_eq!(cart.quantity_of(2), 0);
        assert!(cart.is_empty());

        // Repeating is safe, as is targeting an unknown id
        cart.set_quantity(2, 0);
        cart.set_quantity(999, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new();
        let item = test_item(3, Course::Desserts, 7_500);
        cart.add(&item);

        cart.set_quantity(3, 5);
        assert_eq!(cart.quantity_of(3), 5);
        assert_eq!(cart.subtotal().cents(), 37_500);
    }

    #[test]
    fn test_discount_law() {
        let mut cart = Cart::new();
        let main = test_item(1, Course::Mains, 25_000);

        // 0 and 1 mains: no discount
        assert_eq!(cart.discount(), Money::zero());
        cart.add(&main);
        assert_eq!(cart.discount(), Money::zero());

        // 2 mains: R50
        cart.add(&main);
        assert_eq!(cart.discount().cents(), 5_000);

        // 3 mains: still R50
        cart.add(&main);
        assert_eq!(cart.discount().cents(), 5_000);

        // 4 mains: R100
        cart.add(&main);
        assert_eq!(cart.discount().cents(), 10_000);
    }

    #[test]
    fn test_discount_ignores_non_mains() {
        let mut cart = Cart::new();
        let drink = test_item(4, Course::Drinks, 4_500);

        cart.add(&drink);
        cart.add(&drink);
        cart.add(&drink);
        cart.add(&drink);

        assert_eq!(cart.mains_count(), 0);
        assert_eq!(cart.discount(), Money::zero());
    }

    #[test]
    fn test_worked_example() {
        // {id:1, course:Mains, price:R250, available:true} added twice
        let mut cart = Cart::new();
        let ribs = test_item(1, Course::Mains, 25_000);

        cart.add(&ribs);
        cart.add(&ribs);

        assert_eq!(cart.subtotal().cents(), 50_000); // R500
        assert_eq!(cart.mains_count(), 2);
        assert_eq!(cart.discount().cents(), 5_000); // R50
        assert_eq!(cart.total().cents(), 45_000); // R450
    }

    #[test]
    fn test_total_clamps_at_zero() {
        // Two mains priced below R25 each: subtotal R40, discount R50
        let mut cart = Cart::new();
        let cheap_main = test_item(9, Course::Mains, 2_000);

        cart.add(&cheap_main);
        cart.add(&cheap_main);

        assert_eq!(cart.subtotal().cents(), 4_000);
        assert_eq!(cart.discount().cents(), 5_000);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_evict_and_clear() {
        let mut cart = Cart::new();
        cart.add(&test_item(1, Course::Mains, 25_000));
        cart.add(&test_item(2, Course::Starters, 9_500));

        cart.evict(1);
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.line_count(), 1);

        // Evicting an id that is not present is a no-op
        cart.evict(42);
        assert_eq!(cart.line_count(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        let ribs = test_item(1, Course::Mains, 25_000);
        cart.add(&ribs);
        cart.add(&ribs);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.mains_count, 2);
        assert_eq!(totals.subtotal_cents, 50_000);
        assert_eq!(totals.discount_cents, 5_000);
        assert_eq!(totals.total_cents, 45_000);
    }
}
