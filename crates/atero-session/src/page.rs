//! # Page Identifiers
//!
//! The view identifiers the session navigates between. The exact rendering
//! of each page is a presentation concern; the session only tracks which
//! one is current so the UI can switch on it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Current view of the ordering app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Entry screen: start an order or go to the admin login.
    Welcome,
    /// Name and table capture.
    CustomerSetup,
    /// Menu browsing with course filters.
    Home,
    /// Cart review with quantity steppers and totals.
    CartView,
    /// Admin passcode prompt.
    ChefLogin,
    /// Payment method selection.
    PaymentOptions,
    /// Simulated card form.
    CardPayment,
    /// Pay-at-counter instructions with the order number.
    CashPayment,
    /// Post-payment confirmation.
    Confirmation,
    /// Admin panel: add items, stock control, price report.
    ChefPanel,
    /// App guide and feedback form.
    Settings,
}

impl Default for Page {
    fn default() -> Self {
        Page::Welcome
    }
}
