// Screen geometry for the table view
//
// Breakpoints pick label styles; TableLayout splits the frame into the title,
// the bordered table, the footer and the status bar, and remembers every
// clickable rectangle so mouse input maps back onto controls.

use super::focus::Focus;
use crate::table::ColumnKind;
use crate::view::{FooterView, PagerButton, TableView};
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};
use unicode_width::UnicodeWidthStr;

/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// Width of a numeric column (ids, ages)
const NUMERIC_COLUMN_WIDTH: u16 = 16;
/// Width of the go-to-page input
const PAGE_JUMP_WIDTH: u16 = 6;

/// Rows inside the table block taken by the header, filter and rule lines
const HEAD_ROWS: u16 = 3;

/// Pager button text, bracketed, full or glyph-only by breakpoint
pub fn button_text(button: PagerButton, bp: Breakpoint) -> String {
    if bp.at_least(Breakpoint::Normal) {
        format!("[{}]", button.label())
    } else {
        format!("[{}]", button.short_label())
    }
}

/// Label before the page-jump input
pub fn jump_label(bp: Breakpoint) -> &'static str {
    if bp.at_least(Breakpoint::Wide) {
        "Go to page:"
    } else {
        "Go:"
    }
}

/// Text shown in the closed page-size select
pub fn page_size_text(footer: &FooterView) -> String {
    format!("{} ▾", footer.page_size_label())
}

/// Footer rectangles, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLayout {
    pub area: Rect,
    pub buttons: Vec<(PagerButton, Rect)>,
    pub page_label: Rect,
    pub jump_label: Rect,
    pub jump: Rect,
    pub page_size: Rect,
}

impl FooterLayout {
    pub fn compute(area: Rect, footer: &FooterView, bp: Breakpoint) -> Self {
        let width = |s: &str| s.width() as u16;

        let mut constraints: Vec<Constraint> = PagerButton::all()
            .iter()
            .map(|&b| Constraint::Length(width(&button_text(b, bp))))
            .collect();
        constraints.push(Constraint::Length(width(&footer.page_label())));
        constraints.push(Constraint::Length(width(jump_label(bp))));
        constraints.push(Constraint::Length(PAGE_JUMP_WIDTH));
        constraints.push(Constraint::Length(width(&page_size_text(footer)) + 2));

        let chunks = Layout::horizontal(constraints)
            .flex(Flex::Start)
            .spacing(1)
            .split(area);
        let buttons = PagerButton::all()
            .iter()
            .copied()
            .zip(chunks.iter().copied())
            .collect();

        Self {
            area,
            buttons,
            page_label: chunks[4],
            jump_label: chunks[5],
            jump: chunks[6],
            page_size: chunks[7],
        }
    }
}

/// Every region of the table screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub breakpoint: Breakpoint,
    pub title: Rect,
    /// Bordered block around header, filters and body
    pub table: Rect,
    pub header: Rect,
    pub filters: Rect,
    pub rule: Rect,
    pub body: Rect,
    /// One span per column, sized on the header row
    pub columns: Vec<Rect>,
    pub footer: FooterLayout,
    pub status: Rect,
}

impl TableLayout {
    pub fn compute(area: Rect, view: &TableView, kinds: &[ColumnKind]) -> Self {
        let breakpoint = Breakpoint::from_width(area.width);

        let [title, table, footer, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(HEAD_ROWS + 3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(area);

        let inner = Block::default().borders(Borders::ALL).inner(table);
        let [header, filters, rule, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let columns = Layout::horizontal(kinds.iter().map(|kind| match kind {
            ColumnKind::Numeric => Constraint::Length(NUMERIC_COLUMN_WIDTH),
            ColumnKind::Text => Constraint::Fill(1),
        }))
        .spacing(1)
        .split(header)
        .to_vec();

        Self {
            breakpoint,
            title,
            table,
            header,
            filters,
            rule,
            body,
            columns,
            footer: FooterLayout::compute(footer, &view.footer, breakpoint),
            status,
        }
    }

    /// Column `index` projected onto another row of the table
    pub fn cell(&self, index: usize, row: Rect) -> Option<Rect> {
        self.columns
            .get(index)
            .map(|span| Rect::new(span.x, row.y, span.width, row.height.min(1)))
    }

    /// Map a mouse position onto the control drawn there
    pub fn hit_test(&self, x: u16, y: u16, view: &TableView) -> Option<Focus> {
        let pos = Position::new(x, y);

        for (index, header) in view.headers.iter().enumerate() {
            if self.cell(index, self.header).is_some_and(|r| r.contains(pos)) {
                return header.can_sort.then_some(Focus::Header(header.field));
            }
            if self.cell(index, self.filters).is_some_and(|r| r.contains(pos)) {
                return header.filter.as_ref().map(|f| Focus::Filter(f.field));
            }
        }

        if self.body.contains(pos) {
            return Some(Focus::Body);
        }

        if let Some((button, _)) = self
            .footer
            .buttons
            .iter()
            .find(|(_, rect)| rect.contains(pos))
        {
            return Some(Focus::Pager(*button));
        }
        if self.footer.jump.contains(pos) || self.footer.jump_label.contains(pos) {
            return Some(Focus::PageJump);
        }
        if self.footer.page_size.contains(pos) {
            return Some(Focus::PageSize);
        }
        None
    }
}
