//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::tui::focus::Focus;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use crate::view::TableView;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for focus tracking and border highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Title line above the table (non-focusable)
    TitleBar,
    /// Column header labels
    HeaderRow,
    /// Per-column filter inputs
    FilterRow,
    /// Visible page of rows
    TableBody,
    /// First/Previous/Next/Last buttons
    PaginationBar,
    /// Go-to-page input
    PageJump,
    /// "Show N" select
    PageSizeSelect,
    /// Status bar (non-focusable)
    StatusBar,
    /// Toast notification (non-focusable)
    Toast,
}

impl ComponentId {
    /// Whether this component can receive focus
    #[cfg(test)]
    pub fn is_focusable(&self) -> bool {
        !matches!(self, ComponentId::TitleBar | ComponentId::StatusBar | ComponentId::Toast)
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which control currently has focus
    pub focus: Focus,

    /// Frame snapshot of the table
    pub view: &'a TableView,

    /// Width class of the terminal
    pub breakpoint: Breakpoint,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        theme: &'a Theme,
        focus: Focus,
        view: &'a TableView,
        breakpoint: Breakpoint,
    ) -> Self {
        Self {
            theme,
            focus,
            view,
            breakpoint,
        }
    }

    /// Check if exactly this control is focused
    pub fn is_focused(&self, focus: Focus) -> bool {
        self.focus == focus
    }

    /// Check if focus sits anywhere inside a component
    pub fn is_within(&self, id: ComponentId) -> bool {
        self.focus.component() == id
    }
}

/// Base trait for all UI components
///
/// # Example
///
/// ```ignore
/// impl Component for TableBody {
///     fn id(&self) -> ComponentId {
///         ComponentId::TableBody
///     }
///
///     fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
///         // ... render ctx.view.rows
///     }
/// }
/// ```
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, focus, table view)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
