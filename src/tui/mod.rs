// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Sidebar with the filterable prompt list next to the title and content regions. Every key
//! handler runs to completion before the next frame is drawn; the store persists inside the
//! handler that changed it.

use std::{
    env,
    error::Error,
    fs, io,
    path::{Path, PathBuf},
    process::Command as ProcessCommand,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::editor::{Clipboard, EditorBinding, Osc52Clipboard};
use crate::model::PromptId;
use crate::ops::{apply_command, Command, CommandKind};
use crate::render::text::{single_line, truncate_with_ellipsis};
use crate::render::{project_rows, PromptRow};
use crate::store::PromptStore;

mod input;

use input::Motion;

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const DESCRIPTION_COLOR: Color = Color::DarkGray;
const PLACEHOLDER_COLOR: Color = Color::DarkGray;
const TOAST_COLOR: Color = Color::Yellow;
const FOOTER_BRAND: &str = "promptbox";
const TOAST_TTL: Duration = Duration::from_secs(2);
const TICK: Duration = Duration::from_millis(250);

/// Runs the interactive terminal UI until the user quits.
///
/// `storage_label` names where prompts are persisted; it is only shown in the help overlay.
pub fn run(store: PromptStore, storage_label: impl Into<String>) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(store, Box::new(Osc52Clipboard::stdout()));
    app.storage_label = storage_label.into();
    tracing::info!(prompts = app.store.len(), "tui started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    if let Some(action) = app.take_external_action() {
                        let result =
                            terminal.run_external_action(|| app.execute_external_action(action));
                        if let Err(err) = result {
                            tracing::warn!(%err, "external editor failed");
                            app.set_toast(format!("External editor failed: {err}"));
                        }
                    }
                }
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }
    }

    tracing::info!("tui stopped");
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let (sidebar_area, editor_area) = if app.sidebar_visible {
        let (direction, constraints) = if stack_main_panes_vertically(main_area) {
            (Direction::Vertical, [Constraint::Percentage(40), Constraint::Percentage(60)])
        } else {
            (Direction::Horizontal, [Constraint::Percentage(32), Constraint::Percentage(68)])
        };
        let panes = Layout::default()
            .direction(direction)
            .constraints(constraints)
            .split(main_area);
        (Some(panes[0]), panes[1])
    } else {
        (None, main_area)
    };

    if let Some(sidebar_area) = sidebar_area {
        draw_sidebar(frame, app, sidebar_area);
    }
    draw_editor(frame, app, editor_area);

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    let status = Paragraph::new(footer_help_line(app, &toast_suffix));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn draw_sidebar(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let search_area = parts[0];
    let list_area = parts[1];

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style_for_focus(app.focus, Focus::Search))
        .title(view_title("Search", None));
    let search_inner = search_block.inner(search_area);
    let search_text = region_text(&app.search_query, app.search_query.is_empty(), "/ to filter");
    frame.render_widget(Paragraph::new(search_text).block(search_block), search_area);
    if app.focus == Focus::Search && !app.show_help {
        let (_, column) = input::cursor_position(&app.search_query, app.search_cursor);
        set_cursor_in(frame, search_inner, column, 0);
    }

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style_for_focus(app.focus, Focus::List))
        .title(list_view_title(app.rows.len(), app.store.len()));
    let item_width = usize::from(list_block.inner(list_area).width.saturating_sub(2));

    if app.rows.is_empty() {
        let message = if app.store.is_empty() {
            "No prompts yet. Ctrl-N starts one."
        } else {
            "No title matches the filter."
        };
        let empty = Paragraph::new(Span::styled(message, Style::default().fg(PLACEHOLDER_COLOR)))
            .wrap(Wrap { trim: true })
            .block(list_block);
        frame.render_widget(empty, list_area);
        return;
    }

    let selected = app.store.selected_id().cloned();
    let items = app
        .rows
        .iter()
        .map(|row| {
            let item = prompt_list_item(row, item_width);
            if selected.as_ref() == Some(&row.id) {
                item.style(Style::default().fg(FOCUS_COLOR))
            } else {
                item
            }
        })
        .collect::<Vec<_>>();

    let highlight = if app.focus == Focus::List {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .block(list_block)
        .highlight_style(highlight)
        .highlight_symbol("▌ ");
    frame.render_stateful_widget(list, list_area, &mut app.list_state);
}

fn draw_editor(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let title_area = parts[0];
    let content_area = parts[1];

    let mode_tail = match app.editor.mode() {
        crate::editor::EditorMode::New => "(new)".to_owned(),
        crate::editor::EditorMode::Editing(id) => format!("({id})"),
    };
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style_for_focus(app.focus, Focus::Title))
        .title(view_title("Title", Some(&mode_tail)));
    let title_inner = title_block.inner(title_area);
    let title_text = region_text(app.editor.title(), app.editor.title_is_empty(), "Prompt title");
    frame.render_widget(Paragraph::new(title_text).block(title_block), title_area);

    let content_block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style_for_focus(app.focus, Focus::Content))
        .title(view_title("Content", None));
    let content_inner = content_block.inner(content_area);

    let (line, column) = input::cursor_position(app.editor.content(), app.content_cursor);
    let visible = usize::from(content_inner.height.max(1));
    let scroll = usize::from(app.content_scroll);
    let scroll = if line < scroll {
        line
    } else if line >= scroll + visible {
        line + 1 - visible
    } else {
        scroll
    };
    app.content_scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let content_text = region_text(
        app.editor.content(),
        app.editor.content_is_empty(),
        "Write the prompt here.",
    );
    let content = Paragraph::new(content_text)
        .block(content_block)
        .scroll((app.content_scroll, 0));
    frame.render_widget(content, content_area);

    if app.show_help {
        return;
    }
    match app.focus {
        Focus::Title => {
            let (_, column) = input::cursor_position(app.editor.title(), app.title_cursor);
            set_cursor_in(frame, title_inner, column, 0);
        }
        Focus::Content => {
            set_cursor_in(frame, content_inner, column, line - scroll);
        }
        Focus::List | Focus::Search => {}
    }
}

fn set_cursor_in(frame: &mut Frame<'_>, area: Rect, column: usize, row: usize) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let column = u16::try_from(column).unwrap_or(u16::MAX).min(area.width - 1);
    let row = u16::try_from(row).unwrap_or(u16::MAX).min(area.height - 1);
    frame.set_cursor_position((area.x + column, area.y + row));
}

// Extracted panel/header/footer/help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExternalAction {
    EditContent,
}

struct App {
    store: PromptStore,
    editor: EditorBinding,
    rows: Vec<PromptRow>,
    list_state: ListState,
    search_query: String,
    search_cursor: usize,
    title_cursor: usize,
    content_cursor: usize,
    content_scroll: u16,
    focus: Focus,
    sidebar_visible: bool,
    show_help: bool,
    help_scroll: u16,
    toast: Option<Toast>,
    pending_external_action: Option<ExternalAction>,
    clipboard: Box<dyn Clipboard>,
    storage_label: String,
    should_quit: bool,
}

impl App {
    fn new(store: PromptStore, clipboard: Box<dyn Clipboard>) -> Self {
        let focus = if store.is_empty() { Focus::Title } else { Focus::List };
        let mut app = Self {
            store,
            editor: EditorBinding::new(),
            rows: Vec::new(),
            list_state: ListState::default(),
            search_query: String::new(),
            search_cursor: 0,
            title_cursor: 0,
            content_cursor: 0,
            content_scroll: 0,
            focus,
            sidebar_visible: true,
            show_help: false,
            help_scroll: 0,
            toast: None,
            pending_external_action: None,
            clipboard,
            storage_label: "local storage".to_owned(),
            should_quit: false,
        };
        app.refresh_rows();
        app
    }

    /// Recomputes the visible rows from the store and the current filter.
    ///
    /// The list cursor follows the row it was on when that row is still visible.
    fn refresh_rows(&mut self) {
        let previous = self.cursor_row_id();
        let previous_index = self.list_state.selected();
        self.rows = project_rows(self.store.filtered(&self.search_query));

        let index = previous
            .and_then(|id| self.row_index(&id))
            .or_else(|| previous_index.map(|idx| idx.min(self.rows.len().saturating_sub(1))))
            .or(Some(0))
            .filter(|_| !self.rows.is_empty());
        self.list_state.select(index);
    }

    fn row_index(&self, id: &PromptId) -> Option<usize> {
        self.rows.iter().position(|row| &row.id == id)
    }

    fn cursor_row_id(&self) -> Option<PromptId> {
        self.list_state
            .selected()
            .and_then(|idx| self.rows.get(idx))
            .map(|row| row.id.clone())
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_event(key) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control_key(key.code);
        }

        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                KeyCode::Home => self.help_scroll = 0,
                KeyCode::End => self.help_scroll = u16::MAX,
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.cycle(self.sidebar_visible);
                return false;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.cycle_back(self.sidebar_visible);
                return false;
            }
            _ => {}
        }

        match self.focus {
            Focus::List => return self.handle_list_key(key.code),
            Focus::Search => self.handle_search_key(key),
            Focus::Title => self.handle_title_key(key),
            Focus::Content => self.handle_content_key(key),
        }
        false
    }

    fn handle_control_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('c') => return true,
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('n') => self.new_prompt(),
            KeyCode::Char('y') => self.copy_content(),
            KeyCode::Char('e') => self.queue_edit_content(),
            KeyCode::Char('o') => self.open_sidebar(),
            KeyCode::Char('b') => self.collapse_sidebar(),
            _ => {}
        }
        false
    }

    fn handle_list_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            KeyCode::Char('/') => {
                self.focus = Focus::Search;
                self.search_cursor = self.search_query.len();
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_list_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_list_cursor(-1),
            KeyCode::Home | KeyCode::Char('g') => self.select_list_index(0),
            KeyCode::End | KeyCode::Char('G') => {
                self.select_list_index(self.rows.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(id) = self.cursor_row_id() {
                    self.dispatch(Command::Select(id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.cursor_row_id() {
                    self.dispatch(Command::Remove(id));
                }
            }
            _ => {}
        }
        false
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_query.clear();
                self.search_cursor = 0;
                self.focus = Focus::List;
                self.refresh_rows();
            }
            KeyCode::Enter | KeyCode::Down => self.focus = Focus::List,
            _ => {
                if edit_single_line(&mut self.search_query, &mut self.search_cursor, key) {
                    self.refresh_rows();
                }
            }
        }
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.leave_editor(),
            KeyCode::Enter | KeyCode::Down => {
                self.focus = Focus::Content;
            }
            _ => {
                let mut cursor = self.title_cursor;
                self.editor.edit_title(|title| {
                    edit_single_line(title, &mut cursor, key);
                });
                self.title_cursor = cursor;
            }
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.leave_editor();
            return;
        }

        let mut cursor = self.content_cursor;
        self.editor.edit_content(|content| match key.code {
            KeyCode::Enter => input::insert_char(content, &mut cursor, '\n'),
            KeyCode::Up => input::move_cursor(content, &mut cursor, Motion::Up),
            KeyCode::Down => input::move_cursor(content, &mut cursor, Motion::Down),
            _ => {
                edit_single_line(content, &mut cursor, key);
            }
        });
        self.content_cursor = cursor;
    }

    fn handle_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Title => {
                let mut cursor = self.title_cursor;
                self.editor
                    .edit_title(|title| input::insert_str(title, &mut cursor, &single_line(text)));
                self.title_cursor = cursor;
            }
            Focus::Content => {
                let mut cursor = self.content_cursor;
                let text = text.replace("\r\n", "\n");
                self.editor.edit_content(|content| input::insert_str(content, &mut cursor, &text));
                self.content_cursor = cursor;
            }
            Focus::Search => {
                input::insert_str(&mut self.search_query, &mut self.search_cursor, &single_line(text));
                self.refresh_rows();
            }
            Focus::List => {}
        }
    }

    fn leave_editor(&mut self) {
        if self.sidebar_visible {
            self.focus = Focus::List;
        }
    }

    fn move_list_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(self.rows.len() - 1);
        self.list_state.select(Some(next));
    }

    fn select_list_index(&mut self, index: usize) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(index.min(self.rows.len() - 1)));
        }
    }

    fn dispatch(&mut self, command: Command) {
        let result = apply_command(&mut self.store, &mut self.editor, command);
        match result.kind {
            CommandKind::Select => {
                self.title_cursor = self.editor.title().len();
                self.content_cursor = self.editor.content().len();
                self.content_scroll = 0;
                if !result.found {
                    self.set_toast("Prompt not found.");
                }
            }
            CommandKind::Remove => {
                if result.list_changed {
                    self.refresh_rows();
                    self.set_toast("Prompt removed.");
                }
            }
        }
    }

    fn save(&mut self) {
        match self.editor.save(&mut self.store) {
            Ok(outcome) => {
                self.refresh_rows();
                if let Some(index) = self.row_index(&outcome.id) {
                    self.list_state.select(Some(index));
                }
                self.set_toast("Prompt saved.");
            }
            Err(err) => self.set_toast(err.to_string()),
        }
    }

    fn new_prompt(&mut self) {
        self.editor.start_new(&mut self.store);
        self.title_cursor = 0;
        self.content_cursor = 0;
        self.content_scroll = 0;
        self.focus = Focus::Title;
    }

    fn copy_content(&mut self) {
        match self.editor.copy_content(self.clipboard.as_mut()) {
            Ok(backend) => self.set_toast(format!("Content copied to clipboard ({backend}).")),
            Err(err) => {
                tracing::warn!(%err, "copy to clipboard failed");
                self.set_toast(format!("Clipboard error: {err}"));
            }
        }
    }

    fn open_sidebar(&mut self) {
        self.sidebar_visible = true;
        self.focus = Focus::List;
    }

    fn collapse_sidebar(&mut self) {
        self.sidebar_visible = false;
        if self.focus.is_sidebar() {
            self.focus = Focus::Title;
        }
    }

    fn take_external_action(&mut self) -> Option<ExternalAction> {
        self.pending_external_action.take()
    }

    fn queue_edit_content(&mut self) {
        self.pending_external_action = Some(ExternalAction::EditContent);
    }

    fn execute_external_action(&mut self, action: ExternalAction) -> Result<(), String> {
        match action {
            ExternalAction::EditContent => self.edit_content_in_editor(),
        }
    }

    fn edit_content_in_editor(&mut self) -> Result<(), String> {
        let temp_path = write_temp_content_file(self.editor.content())?;
        let editor_command = resolve_editor_command();
        let edited = launch_editor_command(&editor_command, &temp_path).and_then(|()| {
            fs::read_to_string(&temp_path)
                .map_err(|err| format!("failed to read {}: {err}", temp_path.display()))
        });
        let _ = fs::remove_file(&temp_path);
        let edited = edited?;

        // Editors append a final newline; it is not part of the prompt.
        let edited = edited.strip_suffix('\n').unwrap_or(&edited);
        if edited != self.editor.content() {
            self.editor.set_content(edited);
            self.content_cursor = self.editor.content().len();
            self.set_toast("Content updated from editor.");
        }
        self.focus = Focus::Content;
        Ok(())
    }
}

/// Applies a text-editing key to a single-line buffer. Returns whether the text changed.
fn edit_single_line(text: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            input::insert_char(text, cursor, ch);
            true
        }
        KeyCode::Backspace => {
            let before = text.len();
            input::backspace(text, cursor);
            text.len() != before
        }
        KeyCode::Delete => {
            let before = text.len();
            input::delete(text, cursor);
            text.len() != before
        }
        KeyCode::Left => {
            input::move_cursor(text, cursor, Motion::Left);
            false
        }
        KeyCode::Right => {
            input::move_cursor(text, cursor, Motion::Right);
            false
        }
        KeyCode::Home => {
            input::move_cursor(text, cursor, Motion::LineStart);
            false
        }
        KeyCode::End => {
            input::move_cursor(text, cursor, Motion::LineEnd);
            false
        }
        _ => false,
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }

    fn run_external_action(
        &mut self,
        action: impl FnOnce() -> Result<(), String>,
    ) -> Result<(), String> {
        let _suspend = TerminalSuspendGuard::new(&mut self.terminal)
            .map_err(|err| format!("terminal suspend failed: {err}"))?;
        action()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

struct TerminalSuspendGuard<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>,
}

impl<'a> TerminalSuspendGuard<'a> {
    fn new(terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<Self> {
        terminal.show_cursor()?;
        disable_raw_mode()?;

        if let Err(err) =
            execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)
        {
            let _ = enable_raw_mode();
            let _ = execute!(terminal.backend_mut(), EnterAlternateScreen, EnableBracketedPaste);
            let _ = terminal.hide_cursor();
            let _ = ratatui::backend::Backend::flush(terminal.backend_mut());
            return Err(err);
        }

        ratatui::backend::Backend::flush(terminal.backend_mut())?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSuspendGuard<'_> {
    fn drop(&mut self) {
        let _ = enable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), EnterAlternateScreen, EnableBracketedPaste);
        let _ = self.terminal.clear();
        let _ = self.terminal.hide_cursor();
        let _ = ratatui::backend::Backend::flush(self.terminal.backend_mut());
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableBracketedPaste, LeaveAlternateScreen);
}

fn resolve_editor_command() -> String {
    env::var("VISUAL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| env::var("EDITOR").ok().filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_owned())
}

fn write_temp_content_file(content: &str) -> Result<PathBuf, String> {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let mut temp_path = env::temp_dir();
    temp_path.push(format!("promptbox-{}-{ts}.html", std::process::id()));
    fs::write(&temp_path, content).map_err(|err| {
        format!("failed to create temporary prompt file {}: {err}", temp_path.display())
    })?;
    Ok(temp_path)
}

fn launch_editor_command(command: &str, path: &Path) -> Result<(), String> {
    let path_text = path.to_string_lossy();
    if path_text.starts_with('-') {
        return Err("invalid editor temp path".to_owned());
    }

    let status = ProcessCommand::new("sh")
        .arg("-lc")
        .arg(format!("{command} {}", shell_single_quote(path_text.as_ref())))
        .status()
        .map_err(|err| format!("failed to run editor command `{command}`: {err}"))?;
    if !status.success() {
        return Err(format!("editor command failed with status {status}"));
    }
    Ok(())
}

fn shell_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

#[cfg(test)]
mod tests;
