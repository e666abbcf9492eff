// Header row component
//
// Column labels with the sort glyph (▲/▼) appended to the sorted column.

use crate::tui::focus::Focus;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draws one header cell per column span
pub struct HeaderRow<'a> {
    pub columns: &'a [Rect],
}

impl Component for HeaderRow<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::HeaderRow
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        for (header, span) in ctx.view.headers.iter().zip(self.columns) {
            let cell = Rect::new(span.x, area.y, span.width, 1);
            let base = if ctx.is_focused(Focus::Header(header.field)) {
                theme.focused()
            } else {
                Style::default()
                    .fg(theme.header)
                    .add_modifier(Modifier::BOLD)
            };

            let mut spans = vec![Span::styled(header.label.clone(), base)];
            if let Some(glyph) = header.sort_indicator {
                spans.push(Span::styled(
                    format!(" {}", glyph),
                    base.fg(theme.sort_indicator),
                ));
            }
            f.render_widget(Paragraph::new(Line::from(spans)), cell);
        }
    }
}
