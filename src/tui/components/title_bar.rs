// Title bar component
//
// Renders the data source name with the row count, and key hints on the right.

use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use crate::view::format_number;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct TitleBar;

impl TitleBar {
    fn row_summary(ctx: &RenderContext) -> String {
        let view = ctx.view;
        if view.filtered_rows == view.total_rows {
            format!("{} rows", format_number(view.total_rows as u64))
        } else {
            format!(
                "{} of {} rows",
                format_number(view.filtered_rows as u64),
                format_number(view.total_rows as u64)
            )
        }
    }
}

impl Component for TitleBar {
    fn id(&self) -> ComponentId {
        ComponentId::TitleBar
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let mut spans = vec![
            Span::styled(
                format!(" {}", ctx.view.title),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ── {}", Self::row_summary(ctx)),
                Style::default().fg(theme.foreground),
            ),
        ];
        if ctx.breakpoint.at_least(Breakpoint::Wide) {
            spans.push(Span::styled(
                "   Tab:focus  Enter:activate  t:theme  y/Y:copy  q:quit",
                Style::default().fg(theme.placeholder),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
