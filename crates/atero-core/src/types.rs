//! # Domain Types
//!
//! Core domain types used throughout Atero Eats.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │     Course      │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  Starters       │   │  Card           │       │
//! │  │  name           │   │  Mains          │   │  Cash           │       │
//! │  │  description    │   │  Desserts       │   │  Voucher        │       │
//! │  │  price_cents    │   │  Drinks         │   └─────────────────┘       │
//! │  │  available      │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  CourseFilter   │   │  CourseAverage  │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  All            │   │  course         │                              │
//! │  │  Only(Course)   │   │  average_cents  │                              │
//! │  └─────────────────┘   │  count          │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Menu items use small integer ids assigned monotonically by the catalog
//! (`max(existing) + 1`, or 1 for an empty catalog). Items are never
//! physically deleted by the ordering flow; availability is a flag.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Course
// =============================================================================

/// Menu category for a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Course {
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl Course {
    /// All courses, in the order the menu screens and reports present them.
    pub const ALL: [Course; 4] = [
        Course::Mains,
        Course::Starters,
        Course::Desserts,
        Course::Drinks,
    ];
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
            Course::Drinks => "Drinks",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Course Filter
// =============================================================================

/// Menu browse filter: a single course, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum CourseFilter {
    /// No filtering; the full catalog in catalog order.
    All,
    /// Only items of the given course, preserving catalog order.
    Only(Course),
}

impl Default for CourseFilter {
    fn default() -> Self {
        CourseFilter::All
    }
}

impl CourseFilter {
    /// Whether an item of `course` passes this filter.
    #[inline]
    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(c) => *c == course,
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish or drink that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier, assigned monotonically by the catalog.
    pub id: u32,

    /// Display name shown on the menu and on cart lines.
    pub name: String,

    /// Short description shown on the menu card.
    pub description: String,

    /// Menu category.
    pub course: Course,

    /// Price in cents (smallest currency unit). Always positive.
    pub price_cents: i64,

    /// Whether the item can currently be ordered (stock control).
    /// Toggling this off evicts the item from any cart holding it.
    pub available: bool,
}

impl MenuItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Menu Item Draft
// =============================================================================

/// A plain item record produced by the mobile add-item form.
///
/// Has **no id**: id assignment is deferred to the catalog that accepts the
/// draft. The form collaborator only validates and collects fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price_cents: i64,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer intends to settle the order.
///
/// `Voucher` appears on the payment screen but is not implemented; selecting
/// it is rejected by the session with a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Simulated online card payment.
    Card,
    /// Pay at the counter, reconciled by order number.
    Cash,
    /// Placeholder; not implemented.
    Voucher,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Voucher => "Voucher",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Course Average
// =============================================================================

/// Per-course price statistics for the admin report.
///
/// Courses with zero items are omitted from the report entirely rather than
/// emitted with a zero or undefined average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CourseAverage {
    pub course: Course,
    /// Average price in cents, rounded to the nearest cent.
    pub average_cents: i64,
    /// Number of items in the course.
    pub count: usize,
}

impl CourseAverage {
    /// Returns the average as a Money type.
    #[inline]
    pub fn average(&self) -> Money {
        Money::from_cents(self.average_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
