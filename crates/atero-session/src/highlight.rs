//! # Recently-Added Highlight
//!
//! The transient visual flag shown on a menu card right after its item is
//! added to the cart.
//!
//! ## Timing Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Highlight Lifecycle                                   │
//! │                                                                         │
//! │  add_to_cart(5) ──► arm(5) ──► token A (generation 1)                  │
//! │        host schedules clear(A) in HIGHLIGHT_MS                          │
//! │                                                                         │
//! │  add_to_cart(7) ──► arm(7) ──► token B (generation 2)                  │
//! │        host schedules clear(B) in HIGHLIGHT_MS                          │
//! │                                                                         │
//! │  ...clear(A) fires: generation 1 is stale ──► no-op                    │
//! │  ...clear(B) fires: generation 2 matches ──► flag cleared              │
//! │                                                                         │
//! │  Both timers may fire harmlessly: a stale token never clears a newer   │
//! │  highlight, and clearing twice is idempotent.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session does not own a timer thread. Arming hands the host a token;
//! the host's scheduler (UI event loop, test harness, whatever embeds the
//! session) is responsible for the deferred `clear` call after
//! [`HIGHLIGHT_MS`]. This keeps the flag an explicit cancellable task tied
//! to the session's lifetime instead of a fire-and-forget timer.

use serde::{Deserialize, Serialize};

/// How long the highlight stays armed before the host should clear it.
pub const HIGHLIGHT_MS: u64 = 500;

/// Handle for one arming of the highlight.
///
/// Opaque to the host: it only travels from `arm` to the deferred `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightToken {
    item_id: u32,
    generation: u64,
}

/// The highlight flag itself. One per session.
#[derive(Debug, Default)]
pub struct Highlight {
    /// Currently highlighted item and the generation that armed it.
    current: Option<(u32, u64)>,
    /// Monotonic arm counter; distinguishes superseded timers.
    generation: u64,
}

impl Highlight {
    /// Arms the highlight for an item, superseding any previous arming.
    ///
    /// Returns the token the host must pass back after [`HIGHLIGHT_MS`].
    pub fn arm(&mut self, item_id: u32) -> HighlightToken {
        self.generation += 1;
        self.current = Some((item_id, self.generation));
        HighlightToken {
            item_id,
            generation: self.generation,
        }
    }

    /// Clears the highlight if `token` is still the current arming.
    ///
    /// A stale token (superseded by a newer `arm`) clears nothing, and
    /// clearing twice with the same token is a no-op.
    ///
    /// Returns `true` when the flag was actually cleared.
    pub fn clear(&mut self, token: HighlightToken) -> bool {
        match self.current {
            Some((_, generation)) if generation == token.generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Unconditionally drops the highlight (logout path).
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// The item currently highlighted, if any.
    pub fn current_item(&self) -> Option<u32> {
        self.current.map(|(item_id, _)| item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_and_clear() {
        let mut highlight = Highlight::default();
        let token = highlight.arm(5);

        assert_eq!(highlight.current_item(), Some(5));
        assert!(highlight.clear(token));
        assert_eq!(highlight.current_item(), None);

        // Second clear with the same token is a no-op
        assert!(!highlight.clear(token));
    }

    #[test]
    fn test_stale_token_does_not_clear_newer_highlight() {
        let mut highlight = Highlight::default();
        let stale = highlight.arm(5);
        let fresh = highlight.arm(7);

        // The superseded timer fires first: nothing happens
        assert!(!highlight.clear(stale));
        assert_eq!(highlight.current_item(), Some(7));

        // The current timer fires: flag cleared
        assert!(highlight.clear(fresh));
        assert_eq!(highlight.current_item(), None);
    }

    #[test]
    fn test_reset() {
        let mut highlight = Highlight::default();
        let token = highlight.arm(3);

        highlight.reset();
        assert_eq!(highlight.current_item(), None);

        // The outstanding timer firing after reset is harmless
        assert!(!highlight.clear(token));
    }
}
