// Application state for the TUI
//
// App owns the Table and everything the user is editing (filter buffers,
// the page-jump buffer, the page-size select). Keys and clicks are routed
// here; components edit their own state and App turns the result into
// table actions.

use super::clipboard;
use super::components::{FilterInput, PageJump, PageSizeSelect, TableBody, Toast};
use super::focus::{cycle, focus_order, Focus};
use super::input::InputHandler;
use super::layout::TableLayout;
use super::theme::{Theme, ThemeKind};
use super::traits::{Handled, Interactive, Scrollable};
use crate::logging::LogBuffer;
use crate::table::{Action, Table};
use crate::view::{PagerButton, TableView};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub struct App {
    pub table: Table,
    page_size_options: Vec<usize>,

    pub focus: Focus,
    pub filter_inputs: Vec<FilterInput>,
    pub page_jump: PageJump,
    pub page_size_select: PageSizeSelect,
    pub body: TableBody,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub log_buffer: LogBuffer,
    pub toast: Option<Toast>,
    pub should_quit: bool,

    /// Geometry of the last drawn frame, for mouse hit-testing
    pub layout: Option<TableLayout>,

    input_handler: InputHandler,
}

impl App {
    pub fn new(
        table: Table,
        page_size_options: Vec<usize>,
        theme_kind: ThemeKind,
        log_buffer: LogBuffer,
    ) -> Self {
        let filter_inputs = table
            .columns()
            .iter()
            .filter(|c| c.filterable)
            .map(|c| {
                let mut input = FilterInput::new(c.accessor, c.kind);
                if let Some(value) = table.filter_value(c.accessor) {
                    input.buffer = value.input_text();
                }
                input
            })
            .collect();
        let page_size_select =
            PageSizeSelect::new(table.pagination().page_size, page_size_options.clone());

        let mut app = Self {
            table,
            page_size_options,
            focus: Focus::PageSize,
            filter_inputs,
            page_jump: PageJump::default(),
            page_size_select,
            body: TableBody::new(),
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            toast: None,
            should_quit: false,
            layout: None,
            input_handler: InputHandler::with_default_config(),
        };
        if let Some(&first) = app.focus_order().first() {
            app.focus = first;
        }
        app
    }

    /// Frame snapshot with in-progress input text overlaid
    pub fn view(&self) -> TableView {
        let mut view = TableView::build(&self.table, &self.page_size_options);
        for input in &self.filter_inputs {
            view.set_filter_text(input.field, &input.buffer);
        }
        if self.focus == Focus::PageJump {
            view.footer.jump_value = self.page_jump.buffer.clone();
        }
        view
    }

    fn focus_order(&self) -> Vec<Focus> {
        focus_order(&TableView::build(&self.table, &self.page_size_options))
    }

    pub fn dispatch(&mut self, action: Action) {
        let clears_filters = action == Action::ClearFilters;
        let before = self.table.state().clone();
        self.table.dispatch(action);
        if *self.table.state() != before {
            self.body.scroll_to_top();
        }
        if clears_filters {
            for input in &mut self.filter_inputs {
                input.buffer.clear();
            }
        }
        self.page_size_select.current = self.table.pagination().page_size;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::PageJump && self.focus != Focus::PageJump {
            self.page_jump.reset(self.table.pagination().page_index + 1);
        }
        tracing::trace!("focus {:?} -> {:?}", self.focus, focus);
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        let next = cycle(&self.focus_order(), self.focus, true);
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = cycle(&self.focus_order(), self.focus, false);
        self.set_focus(prev);
    }

    /// Esc from an input: filters return to their header, the page jump to Last Page
    fn leave_input(&mut self) {
        let target = match self.focus {
            Focus::Filter(field) => Some(Focus::Header(field)),
            Focus::PageJump => Some(Focus::Pager(PagerButton::Last)),
            _ => None,
        };
        match target {
            Some(target) if self.focus_order().contains(&target) => self.set_focus(target),
            _ => self.focus_next(),
        }
    }

    fn focused_interactive(&mut self) -> Option<&mut dyn Interactive> {
        match self.focus {
            Focus::Filter(field) => self
                .filter_inputs
                .iter_mut()
                .find(|input| input.field == field)
                .map(|input| input as &mut dyn Interactive),
            Focus::PageJump => Some(&mut self.page_jump as &mut dyn Interactive),
            Focus::PageSize => Some(&mut self.page_size_select as &mut dyn Interactive),
            Focus::Body => Some(&mut self.body as &mut dyn Interactive),
            Focus::Header(_) | Focus::Pager(_) => None,
        }
    }

    /// Turn the focused component's edited state into a table action
    fn sync_focused(&mut self) {
        let action = match self.focus {
            Focus::Filter(field) => self
                .filter_inputs
                .iter()
                .find(|input| input.field == field)
                .map(|input| Action::SetFilter(field, input.buffer.clone())),
            Focus::PageJump => Some(Action::JumpToPage(self.page_jump.buffer.clone())),
            Focus::PageSize => {
                let size = self.page_size_select.current;
                (size != self.table.pagination().page_size).then_some(Action::SetPageSize(size))
            }
            Focus::Header(_) | Focus::Body | Focus::Pager(_) => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Enter/Space on a header or button
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Header(field) => self.dispatch(Action::ToggleSort(field)),
            Focus::Pager(button) => {
                if self.view().footer.is_enabled(button) {
                    self.dispatch(button.action());
                } else {
                    tracing::debug!("{} is disabled", button.label());
                }
            }
            Focus::Filter(_) | Focus::Body | Focus::PageJump | Focus::PageSize => {}
        }
    }

    /// Hint for the status bar
    pub fn focus_hint(&self) -> &'static str {
        let component_hint = match self.focus {
            Focus::Filter(field) => self
                .filter_inputs
                .iter()
                .find(|input| input.field == field)
                .and_then(|input| input.focus_hint()),
            Focus::PageJump => self.page_jump.focus_hint(),
            Focus::PageSize => self.page_size_select.focus_hint(),
            Focus::Body => self.body.focus_hint(),
            Focus::Header(_) => Some("Enter:sort  Tab:next  PgUp/PgDn:page"),
            Focus::Pager(_) => Some("Enter:press  Tab:next  PgUp/PgDn:page"),
        };
        component_hint.unwrap_or("Tab:next")
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Layered dispatch: Global → Focused component → App shortcuts
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.kind == KeyEventKind::Release {
            self.input_handler.release(key.code);
            return Handled::Yes;
        }

        // Layer 1: global keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Handled::Yes;
        }
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                if self.input_handler.accept(&key) {
                    if key.code == KeyCode::BackTab || key.modifiers.contains(KeyModifiers::SHIFT)
                    {
                        self.focus_prev();
                    } else {
                        self.focus_next();
                    }
                }
                return Handled::Yes;
            }
            KeyCode::Esc if self.focus.is_text_entry() => {
                if self.input_handler.accept(&key) {
                    self.leave_input();
                }
                return Handled::Yes;
            }
            _ => {}
        }

        // Layer 2: text entry bypasses debounce so "55" types two fives
        if self.focus.is_text_entry() {
            let handled = self
                .focused_interactive()
                .map_or(Handled::No, |component| component.handle_key(key));
            if handled.was_handled() {
                self.sync_focused();
            }
            return handled;
        }

        if !self.input_handler.accept(&key) {
            // Auto-repeat of a held key
            return Handled::Yes;
        }

        let handled = self
            .focused_interactive()
            .map_or(Handled::No, |component| component.handle_key(key));
        if handled.was_handled() {
            self.sync_focused();
            return handled;
        }

        // Layer 3: app shortcuts
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Home => self.dispatch(Action::FirstPage),
            KeyCode::End => self.dispatch(Action::LastPage),
            KeyCode::PageUp => self.dispatch(Action::PreviousPage),
            KeyCode::PageDown => self.dispatch(Action::NextPage),
            KeyCode::Char('c') => self.dispatch(Action::ClearFilters),
            KeyCode::Char('t') => self.next_theme(),
            KeyCode::Char('y') => self.copy_page_text(),
            KeyCode::Char('Y') => self.copy_page_jsonl(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => return Handled::No,
        }
        Handled::Yes
    }

    /// Left click at a terminal cell
    pub fn click(&mut self, x: u16, y: u16) -> Handled {
        let Some(layout) = &self.layout else {
            return Handled::No;
        };
        let Some(target) = layout.hit_test(x, y, &self.view()) else {
            return Handled::No;
        };

        self.set_focus(target);
        match target {
            Focus::Header(_) | Focus::Pager(_) => self.activate(),
            Focus::Filter(_) | Focus::Body | Focus::PageJump | Focus::PageSize => {}
        }
        Handled::Yes
    }

    /// Mouse wheel: scroll rows while the page overflows, then turn the page
    pub fn wheel(&mut self, down: bool) {
        let scrolled = if down {
            self.body.scroll_down()
        } else {
            self.body.scroll_up()
        };
        if !scrolled {
            self.dispatch(if down {
                Action::NextPage
            } else {
                Action::PreviousPage
            });
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Clipboard, theme, toast
    // ─────────────────────────────────────────────────────────────────────

    /// Visible page as tab-separated text with a header line
    pub fn page_tsv(&self) -> String {
        self.view().to_tsv()
    }

    /// Visible page as one JSON record per line
    pub fn page_jsonl(&self) -> Result<String> {
        let lines = self
            .table
            .rows()
            .iter()
            .map(|row| serde_json::to_string(row.record).context("Failed to serialize record"))
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }

    fn copy_page_text(&mut self) {
        let text = self.page_tsv();
        self.copy_with_toast(&text, "rows");
    }

    fn copy_page_jsonl(&mut self) {
        match self.page_jsonl() {
            Ok(text) => self.copy_with_toast(&text, "rows as JSONL"),
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    fn copy_with_toast(&mut self, text: &str, what: &str) {
        let count = self.table.rows().len();
        match clipboard::copy_to_clipboard(text) {
            Ok(()) => self.show_toast(format!("✓ Copied {} {}", count, what)),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::info!("Theme: {}", self.theme_kind.name());
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}
