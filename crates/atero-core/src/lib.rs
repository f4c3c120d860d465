//! # atero-core: Pure Business Logic for Atero Eats
//!
//! This crate is the **heart** of the Atero Eats ordering system. It contains
//! all business logic as pure functions and plain state containers with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Atero Eats Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (out of scope)                    │   │
//! │  │    Menu UI ──► Cart UI ──► Payment UI ──► Confirmation UI       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    atero-session                                │   │
//! │  │    OrderSession: identity, navigation, checkout, admin          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atero-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │   │   │
//! │  │   │ MenuItem  │  │   Money   │  │   Cart    │  │MenuCatalog│   │   │
//! │  │   │  Course   │  │  R-cents  │  │ CartLine  │  │   seed    │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO RANDOMNESS • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Course, PaymentMethod, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`cart`] - Cart lines and derived totals
//! - [`catalog`] - Menu catalog and availability control
//! - [`draft`] - Mobile add-item form records and field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derived value is recomputed from current
//!    state - same input = same output, no cached totals to go stale
//! 2. **No I/O**: Network, file system, clock and RNG access is FORBIDDEN
//!    here (timestamps enter through `chrono` constructors at the edge)
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use atero_core::catalog::MenuCatalog;
//! use atero_core::cart::Cart;
//!
//! let catalog = MenuCatalog::seed();
//! let mut cart = Cart::new();
//!
//! // Rib King Ribs, R250.00, Mains
//! let ribs = catalog.item(1).unwrap().clone();
//! assert!(cart.add(&ribs));
//! assert!(cart.add(&ribs));
//!
//! // Two mains -> one R50 special discount
//! assert_eq!(cart.subtotal().cents(), 50_000);
//! assert_eq!(cart.discount().cents(), 5_000);
//! assert_eq!(cart.total().cents(), 45_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod draft;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atero_core::Money` instead of
// `use atero_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::MenuCatalog;
pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Special discount: R50 off the order for every 2 main-course units.
///
/// ## Business Reason
/// Promotional rule rewarding bulk main-course orders. Computed from the
/// current cart contents on every read, never stored, so it can never go
/// stale when quantities change.
pub const MAINS_DISCOUNT_CENTS: i64 = 5_000;

/// How many main-course units earn one discount step.
pub const MAINS_PER_DISCOUNT: i64 = 2;

/// Default customer display name before setup completes.
pub const GUEST_NAME: &str = "Guest";
