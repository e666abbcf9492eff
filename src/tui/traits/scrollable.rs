//! Scrollable trait for components whose rows can outgrow their area
//!
//! Components own a `ScrollState` and expose it here; the navigation
//! methods come for free.

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
///
/// # Example
///
/// ```ignore
/// impl Scrollable for TableBody {
///     fn scroll_state(&self) -> &ScrollState {
///         &self.scroll
///     }
///
///     fn scroll_state_mut(&mut self) -> &mut ScrollState {
///         &mut self.scroll
///     }
/// }
/// ```
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    /// Scroll up by one row
    fn scroll_up(&mut self) -> bool {
        self.scroll_state_mut().scroll_up()
    }

    /// Scroll down by one row
    fn scroll_down(&mut self) -> bool {
        self.scroll_state_mut().scroll_down()
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    /// Update content and viewport sizes; call once per frame
    fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.scroll_state_mut().update_dimensions(total, viewport);
    }

    /// Rows cut off above and below the viewport
    fn hidden(&self) -> (usize, usize) {
        self.scroll_state().hidden()
    }
}
