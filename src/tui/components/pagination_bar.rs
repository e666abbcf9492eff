// Pagination bar component
//
// First/Previous/Next/Last buttons, the "Page X of Y" label and the label of
// the go-to-page input. The input and the page-size select draw themselves.

use crate::tui::focus::Focus;
use crate::tui::layout::{button_text, jump_label, FooterLayout};
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub struct PaginationBar<'a> {
    pub layout: &'a FooterLayout,
}

impl Component for PaginationBar<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::PaginationBar
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let footer = &ctx.view.footer;

        f.render_widget(
            Paragraph::new("").style(Style::default().bg(theme.background)),
            area,
        );

        for &(button, rect) in &self.layout.buttons {
            let enabled = footer.is_enabled(button);
            let style = if ctx.is_focused(Focus::Pager(button)) {
                theme.focused()
            } else if enabled {
                Style::default().fg(theme.button)
            } else {
                Style::default()
                    .fg(theme.disabled)
                    .add_modifier(Modifier::DIM)
            };
            f.render_widget(
                Paragraph::new(button_text(button, ctx.breakpoint)).style(style),
                rect,
            );
        }

        f.render_widget(
            Paragraph::new(footer.page_label()).style(
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            self.layout.page_label,
        );
        f.render_widget(
            Paragraph::new(jump_label(ctx.breakpoint)).style(Style::default().fg(theme.foreground)),
            self.layout.jump_label,
        );
    }
}
