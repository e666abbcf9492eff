// UI rendering - composes the table screen from components
//
// Layout (top to bottom):
//   title bar
//   ┌ header row ─────────────────┐
//   │ filter inputs               │
//   │ ─────────────────────────── │
//   │ visible page                │
//   └──────────────── ↓ 3 more ───┘
//   pagination bar, page jump, page-size select
//   status bar

use super::app::App;
use super::components::{HeaderRow, PaginationBar, StatusBar, TitleBar};
use super::layout::TableLayout;
use super::traits::{Component, ComponentId, RenderContext};
use crate::table::ColumnKind;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one frame and remember its geometry for mouse input
pub fn draw(f: &mut Frame, app: &mut App) {
    let screen = f.area();
    let view = app.view();
    let kinds: Vec<ColumnKind> = app.table.columns().iter().map(|c| c.kind).collect();
    let layout = TableLayout::compute(screen, &view, &kinds);
    app.body.fit(&layout.columns, view.rows.len(), layout.body.height);

    let theme = &app.theme;
    let ctx = RenderContext::new(theme, app.focus, &view, layout.breakpoint);

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        screen,
    );

    TitleBar.render(f, layout.title, &ctx);

    // Table frame lights up while focus is anywhere inside the table
    let border_color = if [
        ComponentId::HeaderRow,
        ComponentId::FilterRow,
        ComponentId::TableBody,
    ]
    .into_iter()
    .any(|id| ctx.is_within(id))
    {
        theme.highlight
    } else {
        theme.border
    };
    let mut frame = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color));
    if let Some(label) = app.body.overflow_label() {
        frame = frame.title_bottom(
            Line::from(format!(" {} ", label))
                .alignment(Alignment::Right)
                .style(Style::default().fg(theme.sort_indicator)),
        );
    }
    f.render_widget(frame, layout.table);

    HeaderRow {
        columns: &layout.columns,
    }
    .render(f, layout.header, &ctx);

    for input in &app.filter_inputs {
        let cell = view
            .headers
            .iter()
            .position(|h| h.field == input.field)
            .and_then(|index| layout.cell(index, layout.filters));
        if let Some(cell) = cell {
            input.render(f, cell, &ctx);
        }
    }

    f.render_widget(
        Paragraph::new("─".repeat(layout.rule.width as usize))
            .style(Style::default().fg(theme.border)),
        layout.rule,
    );

    app.body.render(f, layout.body, &ctx);

    PaginationBar {
        layout: &layout.footer,
    }
    .render(f, layout.footer.area, &ctx);
    app.page_jump.render(f, layout.footer.jump, &ctx);
    app.page_size_select.render(f, layout.footer.page_size, &ctx);

    StatusBar {
        hint: app.focus_hint(),
        latest_log: app.log_buffer.latest().map(|entry| entry.summary()),
        theme_name: app.theme_kind.name(),
    }
    .render(f, layout.status, &ctx);

    if let Some(toast) = &app.toast {
        toast.render(f, screen, &ctx);
    }

    app.layout = Some(layout);
}
