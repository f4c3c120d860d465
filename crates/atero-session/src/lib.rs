//! # atero-session: Ordering Session State for Atero Eats
//!
//! One [`OrderSession`] per customer: it composes the menu catalog and the
//! cart with customer identity, navigation, payment selection and the order
//! number, and exposes the operations a presentation layer calls in response
//! to UI events.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Navigation State Machine                            │
//! │                                                                         │
//! │  Welcome ──► CustomerSetup ──► Home ◄──► CartView                      │
//! │     ▲                           ▲            │                          │
//! │     │                           │            ▼                          │
//! │     │                      Settings    PaymentOptions                   │
//! │     │                                   │         │                     │
//! │     │                                   ▼         ▼                     │
//! │     │                            CardPayment  CashPayment               │
//! │     │                                   │         │                     │
//! │     │                                   ▼         │                     │
//! │     │                            Confirmation ◄───┘                     │
//! │     │                                   │                               │
//! │     └──────── finish_order() ───────────┘                               │
//! │                                                                         │
//! │  Admin sub-flow (parallel):                                            │
//! │  Welcome ──► ChefLogin ──► ChefPanel                                   │
//! │              (static passcode - a placeholder, NOT a security boundary) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: the session owns its catalog and cart as plain
//!    injected values - no global singletons, no hidden shared state
//! 2. **Synchronous consistency**: cross-component effects (cart eviction on
//!    an availability toggle) happen inside the same call that triggers
//!    them, so invariants hold at every observable point
//! 3. **Derived, not stored**: totals and filtered views are recomputed from
//!    current state on every read

pub mod error;
pub mod highlight;
pub mod page;
pub mod session;

pub use error::SessionError;
pub use highlight::{HighlightToken, HIGHLIGHT_MS};
pub use page::Page;
pub use session::OrderSession;

/// Static admin passcode for the chef panel gate.
///
/// A shared-secret placeholder - it is deliberately not hashed, rotated or
/// otherwise treated as a credential.
pub const ADMIN_PASSCODE: &str = "admin";

/// Inclusive bounds of the 5-digit customer order number.
pub const ORDER_NUMBER_MIN: u32 = 10_000;
pub const ORDER_NUMBER_MAX: u32 = 99_999;
