//! # Menu Catalog
//!
//! The set of orderable items and their availability flags.
//!
//! ## Lifecycle of an Item
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Item Lifecycle                                     │
//! │                                                                         │
//! │  seed() / add_item() ──► { available: true }                           │
//! │                               │        ▲                                │
//! │              toggle_availability       │ toggle_availability            │
//! │                               ▼        │                                │
//! │                          { available: false }                           │
//! │                               │                                         │
//! │                               └──► session evicts any cart line for    │
//! │                                    the id in the SAME call             │
//! │                                                                         │
//! │  remove_item() exists for the service layer but is never called by     │
//! │  the ordering flow - the reactive app only ever toggles the flag.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are assigned monotonically: `max(existing ids) + 1`, or 1 when the
//! catalog is empty. Catalog order is insertion order and is preserved by
//! every read operation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Course, CourseAverage, CourseFilter, MenuItem, MenuItemDraft};
use crate::validation::{validate_item_description, validate_item_name, validate_price_cents};

// =============================================================================
// Menu Catalog
// =============================================================================

/// Owns the menu items for one restaurant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        MenuCatalog { items: Vec::new() }
    }

    /// Creates the stock Atero Eats menu.
    ///
    /// Seven items across all four courses; Garlic Breadsticks start out of
    /// stock so the availability path is exercised from the first screen.
    pub fn seed() -> Self {
        let seed = [
            // (name, description, course, price_cents, available)
            (
                "Rib King Ribs",
                "Slow cooked ribs with smoky BBQ sauce.",
                Course::Mains,
                25_000,
                true,
            ),
            (
                "Caesar Salad",
                "Romaine lettuce, croutons, parmesan, Caesar dressing.",
                Course::Starters,
                9_500,
                true,
            ),
            (
                "Chocolate Lava Cake",
                "Warm molten chocolate cake with vanilla ice cream.",
                Course::Desserts,
                7_500,
                true,
            ),
            (
                "Fresh Orange Juice",
                "Freshly squeezed, no sugar added.",
                Course::Drinks,
                4_500,
                true,
            ),
            (
                "Grilled Salmon",
                "Served with asparagus and lemon butter sauce.",
                Course::Mains,
                18_000,
                true,
            ),
            (
                "Garlic Breadsticks",
                "Toasted bread with garlic butter and herbs.",
                Course::Starters,
                6_000,
                false,
            ),
            (
                "Burger Deluxe",
                "Wagyu patty, cheddar, lettuce, tomato, special sauce.",
                Course::Mains,
                16_500,
                true,
            ),
        ];

        let items = seed
            .iter()
            .enumerate()
            .map(|(i, (name, description, course, price_cents, available))| MenuItem {
                id: i as u32 + 1,
                name: (*name).to_string(),
                description: (*description).to_string(),
                course: *course,
                price_cents: *price_cents,
                available: *available,
            })
            .collect();

        MenuCatalog { items }
    }

    /// Calculates the next available id: `max(existing) + 1`, or 1.
    fn next_id(&self) -> u32 {
        self.items.iter().map(|i| i.id).max().map_or(1, |max| max + 1)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a new menu item.
    ///
    /// ## Validation
    /// - `name` and `description` must be non-empty after trimming
    /// - `price_cents` must be positive
    ///
    /// ## Side Effects
    /// Appends to the catalog with the next monotonic id; new items default
    /// to `available = true`.
    ///
    /// ## Returns
    /// A reference to the stored item (with its assigned id).
    pub fn add_item(
        &mut self,
        name: &str,
        description: &str,
        course: Course,
        price_cents: i64,
    ) -> Result<&MenuItem, ValidationError> {
        let name = validate_item_name(name)?;
        let description = validate_item_description(description)?;
        validate_price_cents(price_cents)?;

        let item = MenuItem {
            id: self.next_id(),
            name,
            description,
            course,
            price_cents,
            available: true,
        };
        self.items.push(item);

        // Just pushed, so last() cannot be None
        Ok(self.items.last().unwrap())
    }

    /// Accepts a validated draft from the mobile add-item form.
    ///
    /// The draft carries no id; the catalog assigns one here. The draft's
    /// fields passed the form's stricter rules already, but the catalog
    /// re-checks its own invariants - the two collaborators validate
    /// independently.
    pub fn add_draft(&mut self, draft: MenuItemDraft) -> Result<&MenuItem, ValidationError> {
        self.add_item(&draft.name, &draft.description, draft.course, draft.price_cents)
    }

    /// Flips the availability flag of an item.
    ///
    /// ## Returns
    /// `Some(new_flag)` on success; `None` (silent no-op) for an unknown id.
    ///
    /// ## Eviction Contract
    /// When the flip transitions available → unavailable, any cart line for
    /// the id must be evicted before the toggling call returns. The catalog
    /// has no reference to the cart; `OrderSession::toggle_availability`
    /// performs both steps inside one call so the invariant holds at every
    /// observable point.
    pub fn toggle_availability(&mut self, item_id: u32) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| i.id == item_id)?;
        item.available = !item.available;
        Some(item.available)
    }

    /// Physically removes an item by id.
    ///
    /// Service-layer operation; the ordering flow never calls it (items are
    /// taken off sale with the availability flag instead).
    ///
    /// ## Returns
    /// `true` when an item was removed.
    pub fn remove_item(&mut self, item_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        self.items.len() != before
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All items, in catalog (insertion) order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn item(&self, item_id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Returns the items matching a course filter, preserving catalog order.
    ///
    /// `CourseFilter::All` returns the full catalog.
    pub fn filter_by_course(&self, filter: CourseFilter) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|i| filter.matches(i.course))
            .collect()
    }

    /// Per-course average prices for the admin report.
    ///
    /// Iterates courses in presentation order (`Course::ALL`); a course with
    /// zero items is omitted from the result rather than reported as zero.
    /// Averages are rounded to the nearest cent.
    pub fn average_price_by_course(&self) -> Vec<CourseAverage> {
        let mut averages = Vec::new();

        for course in Course::ALL {
            let mut total: i64 = 0;
            let mut count: i64 = 0;

            for item in &self.items {
                if item.course == course {
                    total += item.price_cents;
                    count += 1;
                }
            }

            if count > 0 {
                averages.push(CourseAverage {
                    course,
                    average_cents: (total + count / 2) / count,
                    count: count as usize,
                });
            }
        }

        averages
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = MenuCatalog::seed();
        assert_eq!(catalog.items().len(), 7);

        let ribs = catalog.item(1).unwrap();
        assert_eq!(ribs.name, "Rib King Ribs");
        assert_eq!(ribs.course, Course::Mains);
        assert_eq!(ribs.price_cents, 25_000);
        assert!(ribs.available);

        // Garlic Breadsticks start out of stock
        let breadsticks = catalog.item(6).unwrap();
        assert!(!breadsticks.available);
    }

    #[test]
    fn test_add_item_assigns_next_id() {
        let mut catalog = MenuCatalog::seed();
        let item = catalog
            .add_item("Oxtail Potjie", "Slow braised oxtail.", Course::Mains, 21_000)
            .unwrap();

        assert_eq!(item.id, 8); // max(1..=7) + 1
        assert!(item.available);
    }

    #[test]
    fn test_add_item_on_empty_catalog_starts_at_one() {
        let mut catalog = MenuCatalog::new();
        let item = catalog
            .add_item("Rooibos Tea", "Served with honey.", Course::Drinks, 3_000)
            .unwrap();
        assert_eq!(item.id, 1);
    }

    #[test]
    fn test_add_item_ids_stay_monotonic_after_removal() {
        let mut catalog = MenuCatalog::new();
        catalog
            .add_item("First", "The first dish.", Course::Starters, 1_000)
            .unwrap();
        catalog
            .add_item("Second", "The second dish.", Course::Starters, 2_000)
            .unwrap();

        catalog.remove_item(1);
        let item = catalog
            .add_item("Third", "The third dish.", Course::Starters, 3_000)
            .unwrap();
        // max(existing) is 2, so the new id is 3 - not a reused 1
        assert_eq!(item.id, 3);
    }

    #[test]
    fn test_add_item_validation() {
        let mut catalog = MenuCatalog::new();

        assert!(catalog
            .add_item("", "A description.", Course::Mains, 1_000)
            .is_err());
        assert!(catalog
            .add_item("Dish", "   ", Course::Mains, 1_000)
            .is_err());
        assert!(catalog.add_item("Dish", "A description.", Course::Mains, 0).is_err());
        assert!(catalog
            .add_item("Dish", "A description.", Course::Mains, -500)
            .is_err());
        assert!(catalog.items().is_empty());

        // Name and description are stored trimmed
        let item = catalog
            .add_item("  Dish  ", "  A description.  ", Course::Mains, 1_000)
            .unwrap();
        assert_eq!(item.name, "Dish");
        assert_eq!(item.description, "A description.");
    }

    #[test]
    fn test_add_draft_assigns_id() {
        use crate::draft::draft_from_form;

        let mut catalog = MenuCatalog::seed();
        let draft = draft_from_form(
            "Bobotie",
            "Cape Malay curried mince bake.",
            Course::Mains,
            "142.50",
        )
        .unwrap();

        let item = catalog.add_draft(draft).unwrap();
        assert_eq!(item.id, 8);
        assert_eq!(item.price_cents, 14_250);
        assert!(item.available);
    }

    #[test]
    fn test_toggle_availability() {
        let mut catalog = MenuCatalog::seed();

        assert_eq!(catalog.toggle_availability(1), Some(false));
        assert!(!catalog.item(1).unwrap().available);

        assert_eq!(catalog.toggle_availability(1), Some(true));
        assert!(catalog.item(1).unwrap().available);

        // Unknown id: silent no-op
        assert_eq!(catalog.toggle_availability(999), None);
    }

    #[test]
    fn test_remove_item() {
        let mut catalog = MenuCatalog::seed();

        assert!(catalog.remove_item(3));
        assert!(catalog.item(3).is_none());
        assert_eq!(catalog.items().len(), 6);

        // Second removal of the same id reports nothing removed
        assert!(!catalog.remove_item(3));
    }

    #[test]
    fn test_filter_by_course() {
        let catalog = MenuCatalog::seed();

        let mains = catalog.filter_by_course(CourseFilter::Only(Course::Mains));
        let names: Vec<&str> = mains.iter().map(|i| i.name.as_str()).collect();
        // Catalog order preserved
        assert_eq!(names, vec!["Rib King Ribs", "Grilled Salmon", "Burger Deluxe"]);

        let all = catalog.filter_by_course(CourseFilter::All);
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn test_average_price_by_course() {
        let catalog = MenuCatalog::seed();
        let averages = catalog.average_price_by_course();

        // All four courses are populated in the seed
        assert_eq!(averages.len(), 4);

        // Mains: (25000 + 18000 + 16500) / 3 = 19833.33 -> 19833
        let mains = averages
            .iter()
            .find(|a| a.course == Course::Mains)
            .unwrap();
        assert_eq!(mains.count, 3);
        assert_eq!(mains.average_cents, 19_833);

        // Drinks: single item
        let drinks = averages
            .iter()
            .find(|a| a.course == Course::Drinks)
            .unwrap();
        assert_eq!(drinks.count, 1);
        assert_eq!(drinks.average_cents, 4_500);
    }

    #[test]
    fn test_average_omits_empty_courses() {
        let mut catalog = MenuCatalog::new();
        catalog
            .add_item("Malva Pudding", "With custard.", Course::Desserts, 6_500)
            .unwrap();

        let averages = catalog.average_price_by_course();
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].course, Course::Desserts);
    }
}
