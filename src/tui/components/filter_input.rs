// Filter input component
//
// One text box under each filterable header. Numeric columns show a "Min"
// placeholder and only take number characters; text columns show "Search...".

use crate::data::Field;
use crate::table::ColumnKind;
use crate::tui::focus::Focus;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterInput {
    pub field: Field,
    pub kind: ColumnKind,
    /// Raw text as typed
    pub buffer: String,
}

impl FilterInput {
    pub fn new(field: Field, kind: ColumnKind) -> Self {
        Self {
            field,
            kind,
            buffer: String::new(),
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            ColumnKind::Text => !c.is_control(),
            ColumnKind::Numeric => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
        }
    }
}

impl Component for FilterInput {
    fn id(&self) -> ComponentId {
        ComponentId::FilterRow
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(Focus::Filter(self.field));

        let placeholder = ctx
            .view
            .headers
            .iter()
            .filter_map(|h| h.filter.as_ref())
            .find(|control| control.field == self.field)
            .map(|control| control.placeholder())
            .unwrap_or_default();

        let (text, style) = if self.buffer.is_empty() && !focused {
            (
                placeholder.to_string(),
                Style::default().fg(theme.placeholder),
            )
        } else if focused {
            (format!("{}▏", self.buffer), theme.focused())
        } else {
            (self.buffer.clone(), Style::default().fg(theme.input))
        };

        f.render_widget(Paragraph::new(text).style(style), area);
    }
}

impl Interactive for FilterInput {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Handled::No;
        }
        match key.code {
            KeyCode::Char(c) if self.accepts(c) => {
                self.buffer.push(c);
                Handled::Yes
            }
            // Swallow rejected characters so they don't trigger shortcuts
            KeyCode::Char(_) => Handled::Yes,
            KeyCode::Backspace => {
                self.buffer.pop();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self.kind {
            ColumnKind::Numeric => Some("type:min value  Backspace:delete  Esc:leave"),
            ColumnKind::Text => Some("type:search  Backspace:delete  Esc:leave"),
        }
    }
}
