// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, style::Color, Terminal};

use super::{
    draw, footer_help_line, panel_border_style_for_focus, shell_single_quote,
    stack_main_panes_vertically, App, ExternalAction, Focus,
};
use crate::editor::{Clipboard, ClipboardError, EditorMode};
use crate::model::fixtures::{alpha_beta_prompts, sample_prompts};
use crate::model::Prompt;
use crate::store::{MemoryStore, PromptStore, StorageAdapter};

#[derive(Clone, Default)]
struct SharedClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl Clipboard for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<&'static str, ClipboardError> {
        self.writes.borrow_mut().push(text.to_owned());
        Ok("test")
    }
}

struct Harness {
    app: App,
    memory: MemoryStore,
    clipboard: SharedClipboard,
}

impl Harness {
    fn with_prompts(prompts: &[Prompt]) -> Self {
        let memory = MemoryStore::new();
        if !prompts.is_empty() {
            assert!(StorageAdapter::new(memory.clone()).save_all(prompts));
        }
        let store = PromptStore::load(StorageAdapter::new(memory.clone()));
        let clipboard = SharedClipboard::default();
        let app = App::new(store, Box::new(clipboard.clone()));
        Self { app, memory, clipboard }
    }

    fn press(&mut self, code: KeyCode) -> bool {
        self.app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(&mut self, ch: char) -> bool {
        self.app.handle_key_event(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let code = if ch == '\n' { KeyCode::Enter } else { KeyCode::Char(ch) };
            self.press(code);
        }
    }

    fn row_titles(&self) -> Vec<String> {
        self.app.rows.iter().map(|row| row.title.clone()).collect()
    }

    fn toast(&self) -> Option<&str> {
        self.app.toast.as_ref().map(|toast| toast.message.as_str())
    }

    fn persisted(&self) -> Vec<Prompt> {
        StorageAdapter::new(self.memory.clone()).load_all()
    }
}

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

#[test]
fn starts_on_list_when_prompts_exist_and_on_title_otherwise() {
    let seeded = Harness::with_prompts(&sample_prompts());
    assert_eq!(seeded.app.focus, Focus::List);
    assert_eq!(seeded.app.list_state.selected(), Some(0));

    let empty = Harness::with_prompts(&[]);
    assert_eq!(empty.app.focus, Focus::Title);
    assert_eq!(empty.app.list_state.selected(), None);
}

#[test]
fn typing_and_ctrl_s_creates_a_prompt() {
    let mut h = Harness::with_prompts(&[]);

    h.type_text("Hello");
    h.press(KeyCode::Enter);
    h.type_text("World");
    assert!(!h.ctrl('s'));

    assert_eq!(h.toast(), Some("Prompt saved."));
    assert_eq!(h.row_titles(), vec!["Hello"]);
    assert_eq!(h.app.rows[0].description, "World");
    assert_eq!(h.persisted().len(), 1);
    assert!(matches!(h.app.editor.mode(), EditorMode::Editing(_)));
}

#[test]
fn empty_save_shows_validation_message_and_changes_nothing() {
    let mut h = Harness::with_prompts(&sample_prompts());
    h.ctrl('n');
    let writes = h.memory.write_count();

    h.ctrl('s');

    assert_eq!(h.toast(), Some("Title and content cannot be empty."));
    assert_eq!(h.app.store.len(), 3);
    assert_eq!(h.memory.write_count(), writes);
}

#[test]
fn enter_on_list_loads_prompt_and_edits_update_in_place() {
    let mut h = Harness::with_prompts(&sample_prompts());
    h.press(KeyCode::Down);
    h.press(KeyCode::Enter);

    assert_eq!(h.app.editor.title(), "Summarize meeting notes");
    assert_eq!(h.app.store.selected_id().map(|id| id.as_str()), Some("m1x9k1zz"));

    h.press(KeyCode::Tab);
    assert_eq!(h.app.focus, Focus::Title);
    h.type_text(" (short)");
    h.ctrl('s');

    assert_eq!(h.app.store.len(), 3);
    assert_eq!(h.row_titles()[1], "Summarize meeting notes (short)");
    assert_eq!(h.persisted()[1].title(), "Summarize meeting notes (short)");
}

#[test]
fn ctrl_n_clears_editor_and_focuses_title() {
    let mut h = Harness::with_prompts(&sample_prompts());
    h.press(KeyCode::Enter);

    h.ctrl('n');

    assert_eq!(h.app.focus, Focus::Title);
    assert_eq!(h.app.editor.title(), "");
    assert_eq!(h.app.editor.content(), "");
    assert_eq!(h.app.store.selected_id(), None);
}

#[test]
fn search_filters_live_and_esc_restores_the_list() {
    let mut h = Harness::with_prompts(&alpha_beta_prompts());

    h.press(KeyCode::Char('/'));
    assert_eq!(h.app.focus, Focus::Search);
    h.type_text("TASK");
    assert_eq!(h.row_titles(), vec!["Alpha Task", "Beta Task"]);
    h.press(KeyCode::Backspace);
    h.press(KeyCode::Backspace);
    h.press(KeyCode::Backspace);
    h.press(KeyCode::Backspace);
    h.type_text("beta");
    assert_eq!(h.row_titles(), vec!["Beta Task"]);

    h.press(KeyCode::Enter);
    assert_eq!(h.app.focus, Focus::List);
    assert_eq!(h.app.list_state.selected(), Some(0));
    h.press(KeyCode::Enter);
    assert_eq!(h.app.editor.title(), "Beta Task");

    h.press(KeyCode::Char('/'));
    h.press(KeyCode::Esc);
    assert_eq!(h.app.search_query, "");
    assert_eq!(h.row_titles(), vec!["Alpha Task", "Beta Task"]);
}

#[test]
fn search_with_no_match_empties_the_list() {
    let mut h = Harness::with_prompts(&alpha_beta_prompts());
    h.press(KeyCode::Char('/'));
    h.type_text("zzz");

    assert!(h.app.rows.is_empty());
    assert_eq!(h.app.list_state.selected(), None);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    assert_eq!(h.app.store.selected_id(), None);
}

#[test]
fn d_removes_row_under_cursor_and_keeps_selection() {
    let mut h = Harness::with_prompts(&sample_prompts());
    h.press(KeyCode::Enter);
    let selected = h.app.store.selected_id().cloned();

    h.press(KeyCode::Char('d'));

    assert_eq!(h.toast(), Some("Prompt removed."));
    assert_eq!(h.app.store.len(), 2);
    assert_eq!(h.persisted().len(), 2);
    assert_eq!(h.app.store.selected_id().cloned(), selected);
    assert!(h.app.store.selected().is_none());
    assert_eq!(h.app.list_state.selected(), Some(0));

    h.press(KeyCode::End);
    h.press(KeyCode::Delete);
    assert_eq!(h.row_titles(), vec!["Summarize meeting notes"]);
}

#[test]
fn save_after_removing_selected_prompt_creates_a_new_one() {
    let mut h = Harness::with_prompts(&sample_prompts());
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char('d'));

    h.ctrl('s');

    assert_eq!(h.app.store.len(), 3);
    assert_eq!(h.row_titles()[0], "Code review checklist");
    assert_ne!(h.app.rows[0].id.as_str(), "m1x9k2a0");
}

#[test]
fn ctrl_y_copies_plain_text_of_content() {
    let mut h = Harness::with_prompts(&sample_prompts());
    h.press(KeyCode::Down);
    h.press(KeyCode::Enter);

    h.ctrl('y');

    assert_eq!(
        h.clipboard.writes.borrow().as_slice(),
        ["Summarize the following notes in five bullet points.".to_owned()]
    );
    assert_eq!(h.toast(), Some("Content copied to clipboard (test)."));
}

#[test]
fn typed_angle_brackets_are_kept_as_text() {
    let mut h = Harness::with_prompts(&[]);
    h.type_text("Generics");
    h.press(KeyCode::Enter);
    h.type_text("Use Vec<String> when a<b");

    h.ctrl('s');
    h.ctrl('y');

    assert_eq!(h.app.rows[0].description, "Use Vec<String> when a<b");
    assert_eq!(h.persisted()[0].content().plain_text(), "Use Vec<String> when a<b");
    assert_eq!(h.clipboard.writes.borrow().as_slice(), ["Use Vec<String> when a<b".to_owned()]);
}

#[test]
fn pasted_tag_like_content_passes_validation() {
    let mut h = Harness::with_prompts(&[]);
    h.type_text("Task");
    h.press(KeyCode::Enter);
    h.app.handle_paste("<task>");

    h.ctrl('s');

    assert_eq!(h.toast(), Some("Prompt saved."));
    assert_eq!(h.persisted()[0].content().as_markup(), "&lt;task&gt;");
}

#[test]
fn ctrl_y_with_empty_content_reports_error() {
    let mut h = Harness::with_prompts(&[]);
    h.ctrl('y');
    assert_eq!(h.toast(), Some("Clipboard error: nothing to copy"));
    assert!(h.clipboard.writes.borrow().is_empty());
}

#[test]
fn sidebar_collapse_and_open_move_focus() {
    let mut h = Harness::with_prompts(&sample_prompts());

    h.ctrl('b');
    assert!(!h.app.sidebar_visible);
    assert_eq!(h.app.focus, Focus::Title);
    h.press(KeyCode::Tab);
    h.press(KeyCode::Tab);
    assert_eq!(h.app.focus, Focus::Title);

    h.ctrl('o');
    assert!(h.app.sidebar_visible);
    assert_eq!(h.app.focus, Focus::List);
}

#[test]
fn quit_keys_depend_on_focus() {
    let mut h = Harness::with_prompts(&sample_prompts());
    assert!(h.press(KeyCode::Char('q')));

    let mut h = Harness::with_prompts(&[]);
    assert!(!h.press(KeyCode::Char('q')));
    assert_eq!(h.app.editor.title(), "q");
    assert!(h.ctrl('q'));
}

#[test]
fn help_overlay_swallows_keys_until_closed() {
    let mut h = Harness::with_prompts(&sample_prompts());
    h.press(KeyCode::Char('?'));
    assert!(h.app.show_help);

    h.press(KeyCode::Char('d'));
    assert_eq!(h.app.store.len(), 3);

    h.press(KeyCode::Esc);
    assert!(!h.app.show_help);
}

#[test]
fn content_region_edits_multiple_lines() {
    let mut h = Harness::with_prompts(&[]);
    h.press(KeyCode::Enter);
    assert_eq!(h.app.focus, Focus::Content);

    h.type_text("one\nthree");
    h.press(KeyCode::Up);
    h.press(KeyCode::End);
    h.type_text("\ntwo");

    assert_eq!(h.app.editor.content(), "one\ntwo\nthree");
    assert!(!h.app.editor.content_is_empty());
}

#[test]
fn paste_goes_to_focused_region() {
    let mut h = Harness::with_prompts(&[]);
    h.app.handle_paste("Pasted\ntitle");
    assert_eq!(h.app.editor.title(), "Pasted title");

    h.press(KeyCode::Enter);
    h.app.handle_paste("line 1\r\nline 2");
    assert_eq!(h.app.editor.content(), "line 1\nline 2");
}

#[test]
fn ctrl_e_queues_external_editor() {
    let mut h = Harness::with_prompts(&[]);
    h.ctrl('e');
    assert_eq!(h.app.take_external_action(), Some(ExternalAction::EditContent));
    assert_eq!(h.app.take_external_action(), None);
}

#[test]
fn footer_greys_out_save_until_editor_is_valid() {
    let mut h = Harness::with_prompts(&[]);
    let footer = line_to_string(&footer_help_line(&h.app, ""));
    assert!(footer.contains("Save:^S"));
    assert!(footer.contains("Quit:^Q"));

    let save_span = |app: &App| {
        footer_help_line(app, "")
            .spans
            .into_iter()
            .find(|span| span.content == "^S")
            .and_then(|span| span.style.fg)
    };
    assert_eq!(save_span(&h.app), Some(Color::DarkGray));

    h.type_text("T");
    h.press(KeyCode::Enter);
    h.type_text("c");
    assert_eq!(save_span(&h.app), Some(Color::Cyan));
}

#[test]
fn footer_shows_toast_message() {
    let mut h = Harness::with_prompts(&[]);
    h.app.set_toast("Prompt saved.");
    let footer = line_to_string(&footer_help_line(&h.app, " | Prompt saved."));
    assert!(footer.ends_with(" | Prompt saved."));
}

#[test]
fn focused_panel_border_is_green() {
    assert_eq!(panel_border_style_for_focus(Focus::List, Focus::List).fg, Some(Color::LightGreen));
    assert_eq!(panel_border_style_for_focus(Focus::List, Focus::Title).fg, None);
}

#[test]
fn narrow_terminals_stack_sidebar_above_editor() {
    assert!(stack_main_panes_vertically(Rect::new(0, 0, 79, 24)));
    assert!(!stack_main_panes_vertically(Rect::new(0, 0, 120, 24)));
}

#[test]
fn draw_renders_titles_descriptions_and_placeholders() {
    let mut h = Harness::with_prompts(&sample_prompts());
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");

    terminal.draw(|frame| draw(frame, &mut h.app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let screen = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_owned())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert!(screen.contains("Code review checklist"));
    assert!(screen.contains("Review the diff for"));
    assert!(!screen.contains("<b>"));
    assert!(screen.contains("Prompt title"));
    assert!(screen.contains("Prompts (3)"));
}

#[test]
fn shell_single_quote_escapes_embedded_quotes() {
    assert_eq!(shell_single_quote("/tmp/a b"), "'/tmp/a b'");
    assert_eq!(shell_single_quote("it's"), "'it'\\''s'");
}
