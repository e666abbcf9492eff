// Table body component
//
// Draws the visible page, one terminal line per row, cells clipped to their
// column span. When the page has more rows than the body has lines, the
// body scrolls within the page and reports how many rows are cut off.

use super::formatters::truncate_to_width;
use crate::tui::focus::Focus;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct TableBody {
    scroll: ScrollState,
    /// Column spans from the last layout
    columns: Vec<Rect>,
}

impl TableBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit to the frame about to be drawn
    pub fn fit(&mut self, columns: &[Rect], rows: usize, height: u16) {
        self.columns = columns.to_vec();
        self.update_dimensions(rows, usize::from(height));
    }

    /// "↑ 2  ↓ 3 more" style marker, when rows are cut off
    pub fn overflow_label(&self) -> Option<String> {
        match self.hidden() {
            (0, 0) => None,
            (above, 0) => Some(format!("↑ {} more", above)),
            (0, below) => Some(format!("↓ {} more", below)),
            (above, below) => Some(format!("↑ {}  ↓ {} more", above, below)),
        }
    }
}

impl Component for TableBody {
    fn id(&self) -> ComponentId {
        ComponentId::TableBody
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;

        if ctx.view.rows.is_empty() {
            let empty = Paragraph::new("No matching rows")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.placeholder));
            f.render_widget(empty, Rect::new(area.x, area.y, area.width, area.height.min(1)));
            return;
        }

        let (start, end) = self.scroll.visible_range();
        let focused = ctx.is_focused(Focus::Body);
        let visible = ctx.view.rows.iter().enumerate().skip(start).take(end - start);

        for (line, (i, row)) in (0..area.height).zip(visible) {
            // Stripes follow the row, not the screen line
            let mut style = if i % 2 == 0 {
                Style::default().fg(theme.foreground)
            } else {
                Style::default().fg(theme.row_alt)
            };
            if focused && line == 0 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            for (cell, span) in row.iter().zip(&self.columns) {
                let text = truncate_to_width(cell, span.width as usize);
                let rect = Rect::new(span.x, area.y + line, span.width, 1);
                f.render_widget(Paragraph::new(text).style(style), rect);
            }
        }
    }
}

impl Scrollable for TableBody {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for TableBody {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up => {
                self.scroll_up();
                Handled::Yes
            }
            KeyCode::Down => {
                self.scroll_down();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll rows  PgUp/PgDn:page  Tab:next")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn body(rows: usize, height: u16) -> TableBody {
        let mut body = TableBody::new();
        body.fit(&[Rect::new(0, 0, 10, 1)], rows, height);
        body
    }

    #[test]
    fn arrows_scroll_within_the_page() {
        let mut body = body(10, 7);
        assert_eq!(body.overflow_label().as_deref(), Some("↓ 3 more"));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(body.handle_key(down), Handled::Yes);
        assert_eq!(body.overflow_label().as_deref(), Some("↑ 1  ↓ 2 more"));

        for _ in 0..5 {
            body.handle_key(down);
        }
        assert_eq!(body.overflow_label().as_deref(), Some("↑ 3 more"));
    }

    #[test]
    fn fitting_page_has_no_marker() {
        let mut body = body(5, 7);
        body.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(body.overflow_label(), None);
    }

    #[test]
    fn other_keys_bubble_up() {
        let mut body = body(10, 7);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(body.handle_key(enter), Handled::No);
    }
}
