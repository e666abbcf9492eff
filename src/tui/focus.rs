// Focus ring - which control receives keyboard input
//
// Tab order follows the screen: sortable headers left to right, filter
// inputs left to right, the row body, then the footer controls.

use super::traits::ComponentId;
use crate::data::Field;
use crate::view::{PagerButton, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Sortable column header
    Header(Field),
    /// Column filter input
    Filter(Field),
    /// Visible rows, scrollable when the page is taller than the screen
    Body,
    Pager(PagerButton),
    PageJump,
    PageSize,
}

impl Focus {
    /// Controls that take typed characters
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Focus::Filter(_) | Focus::PageJump)
    }

    pub fn component(&self) -> ComponentId {
        match self {
            Focus::Header(_) => ComponentId::HeaderRow,
            Focus::Filter(_) => ComponentId::FilterRow,
            Focus::Body => ComponentId::TableBody,
            Focus::Pager(_) => ComponentId::PaginationBar,
            Focus::PageJump => ComponentId::PageJump,
            Focus::PageSize => ComponentId::PageSizeSelect,
        }
    }
}

/// All focusable controls in tab order
pub fn focus_order(view: &TableView) -> Vec<Focus> {
    let headers = view
        .headers
        .iter()
        .filter(|h| h.can_sort)
        .map(|h| Focus::Header(h.field));
    let filters = view
        .headers
        .iter()
        .filter_map(|h| h.filter.as_ref())
        .map(|f| Focus::Filter(f.field));
    let footer = std::iter::once(Focus::Body)
        .chain(PagerButton::all().iter().map(|&b| Focus::Pager(b)))
        .chain([Focus::PageJump, Focus::PageSize]);

    headers.chain(filters).chain(footer).collect()
}

/// Step through `order`, wrapping at both ends
///
/// A focus that is no longer in the order restarts from the first entry.
pub fn cycle(order: &[Focus], current: Focus, forward: bool) -> Focus {
    let Some(pos) = order.iter().position(|&f| f == current) else {
        return order.first().copied().unwrap_or(current);
    };
    let len = order.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    order[next]
}
