// Go-to-page input
//
// Jumps on every edit, like an input whose change handler sets the page.

use crate::tui::focus::Focus;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageJump {
    /// 1-based page number as typed
    pub buffer: String,
}

impl PageJump {
    /// Start editing from the page currently shown
    pub fn reset(&mut self, page_number: usize) {
        self.buffer = page_number.to_string();
    }
}

impl Component for PageJump {
    fn id(&self) -> ComponentId {
        ComponentId::PageJump
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let value = &ctx.view.footer.jump_value;

        let input = if ctx.is_focused(Focus::PageJump) {
            Paragraph::new(format!("{}▏", value)).style(theme.focused())
        } else {
            Paragraph::new(value.as_str()).style(
                Style::default()
                    .fg(theme.input)
                    .bg(theme.selection),
            )
        };
        f.render_widget(input, area);
    }
}

impl Interactive for PageJump {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Handled::No;
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                self.buffer.push(c);
                Handled::Yes
            }
            KeyCode::Char(_) => Handled::Yes,
            KeyCode::Backspace => {
                self.buffer.pop();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type:page number  Backspace:delete  Esc:leave")
    }
}
