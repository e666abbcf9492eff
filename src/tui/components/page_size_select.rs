// "Show N" page-size select
//
// Arrow keys step through the presets; Enter and Space advance and wrap
// around like cycling through an open dropdown.

use crate::table::step_page_size;
use crate::tui::focus::Focus;
use crate::tui::layout::page_size_text;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

#[derive(Debug, Clone, PartialEq)]
pub struct PageSizeSelect {
    pub current: usize,
    pub options: Vec<usize>,
}

impl PageSizeSelect {
    pub fn new(current: usize, options: Vec<usize>) -> Self {
        Self { current, options }
    }

    fn step(&mut self, forward: bool) {
        self.current = step_page_size(self.current, &self.options, forward);
    }

    fn advance_wrapping(&mut self) {
        let next = step_page_size(self.current, &self.options, true);
        self.current = if next == self.current {
            self.options.first().copied().unwrap_or(self.current)
        } else {
            next
        };
    }
}

impl Component for PageSizeSelect {
    fn id(&self) -> ComponentId {
        ComponentId::PageSizeSelect
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let text = format!(" {} ", page_size_text(&ctx.view.footer));
        let style = if ctx.is_focused(Focus::PageSize) {
            theme.focused()
        } else {
            Style::default().fg(theme.button)
        };
        f.render_widget(Paragraph::new(text).style(style), area);
    }
}

impl Interactive for PageSizeSelect {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Left | KeyCode::Up => {
                self.step(false);
                Handled::Yes
            }
            KeyCode::Right | KeyCode::Down => {
                self.step(true);
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.advance_wrapping();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("←→:page size  Enter:next size")
    }
}
