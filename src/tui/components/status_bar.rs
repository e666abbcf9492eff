// Status bar component
//
// Bottom line: key hint for the focused control, the latest log message and
// the active theme.

use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatusBar<'a> {
    pub hint: &'a str,
    pub latest_log: Option<String>,
    pub theme_name: &'a str,
}

impl Component for StatusBar<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::StatusBar
    }

    /// Adapts to terminal width:
    /// - Normal and up: hint, latest log, theme
    /// - Compact: hint only
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let status_text = if ctx.breakpoint.at_least(Breakpoint::Normal) {
            match &self.latest_log {
                Some(log) => format!(" {} │ {} │ 🎨 {}", self.hint, log, self.theme_name),
                None => format!(" {} │ 🎨 {}", self.hint, self.theme_name),
            }
        } else {
            format!(" {}", self.hint)
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().fg(ctx.theme.status_bar))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(ctx.theme.border)),
            );

        f.render_widget(status, area);
    }
}
