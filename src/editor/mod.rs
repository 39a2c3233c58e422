// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Title/content editing regions bound to the prompt store selection.
//!
//! The binding is either in the "new prompt" state (regions cleared, no selection) or editing a
//! selected id. Saving goes through a validation gate before the store is touched.
//!
//! The content region holds the visible text of the prompt body. A record's markup is loaded
//! through plain-text extraction and kept aside; a save writes it back unchanged while the
//! visible text still matches, and otherwise serializes the text as escaped markup.

mod clipboard;

pub use clipboard::{osc52_sequence, Clipboard, ClipboardError, Osc52Clipboard, RecordingClipboard};

use crate::model::{PromptId, RichText};
use crate::store::PromptStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    New,
    Editing(PromptId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title and content cannot be empty.")]
    EmptyTitle,
    #[error("Title and content cannot be empty.")]
    EmptyContent,
    #[error("Title and content cannot be empty.")]
    EmptyTitleAndContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub id: PromptId,
    pub is_new: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Region {
    text: String,
    is_empty: bool,
}

impl Region {
    fn cleared() -> Self {
        Self { text: String::new(), is_empty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBinding {
    mode: EditorMode,
    title: Region,
    content: Region,
    loaded_markup: Option<RichText>,
}

impl Default for EditorBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorBinding {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::New,
            title: Region::cleared(),
            content: Region::cleared(),
            loaded_markup: None,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn title(&self) -> &str {
        &self.title.text
    }

    /// Visible text of the content region.
    pub fn content(&self) -> &str {
        &self.content.text
    }

    /// Placeholder flag: the title has no visible characters.
    pub fn title_is_empty(&self) -> bool {
        self.title.is_empty
    }

    /// Placeholder flag: the content has no visible characters.
    pub fn content_is_empty(&self) -> bool {
        self.content.is_empty
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.edit_title(|title| *title = text.into());
    }

    pub fn set_content(&mut self, text: impl Into<String>) {
        self.edit_content(|content| *content = text.into());
    }

    /// Populates the content region from stored markup.
    pub fn load_content(&mut self, markup: impl Into<RichText>) {
        let markup = markup.into();
        self.set_content(markup.plain_text());
        self.loaded_markup = Some(markup);
    }

    /// The markup a save would write for the current content text, trimmed.
    pub fn content_markup(&self) -> RichText {
        let text = self.content.text.trim();
        match &self.loaded_markup {
            Some(markup) if markup.plain_text() == text => RichText::new(markup.as_markup().trim()),
            _ => RichText::from_plain_text(text),
        }
    }

    pub fn edit_title(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.title.text);
        self.title.is_empty = self.title.text.trim().is_empty();
    }

    pub fn edit_content(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.content.text);
        self.content.is_empty = self.content.text.trim().is_empty();
    }

    /// Enters the "new prompt" state: both regions cleared and the store selection dropped.
    pub fn start_new(&mut self, store: &mut PromptStore) {
        self.set_title(String::new());
        self.set_content(String::new());
        self.loaded_markup = None;
        store.clear_selection();
        self.mode = EditorMode::New;
    }

    /// Selects `id` and loads its record into the regions.
    ///
    /// An unknown id still becomes the selection; the regions keep whatever they held. Returns
    /// whether the record was found.
    pub fn activate(&mut self, store: &mut PromptStore, id: PromptId) -> bool {
        store.select(id.clone());
        let found = match store.find(&id) {
            Some(prompt) => {
                let title = prompt.title().to_owned();
                let content = prompt.content().clone();
                self.set_title(title);
                self.load_content(content);
                true
            }
            None => false,
        };
        self.mode = EditorMode::Editing(id);
        found
    }

    /// Checks both regions and yields the values a save would write.
    pub fn validate(&self) -> Result<(String, RichText), ValidationError> {
        match (self.title.is_empty, self.content.is_empty) {
            (true, true) => Err(ValidationError::EmptyTitleAndContent),
            (true, false) => Err(ValidationError::EmptyTitle),
            (false, true) => Err(ValidationError::EmptyContent),
            (false, false) => Ok((self.title.text.trim().to_owned(), self.content_markup())),
        }
    }

    /// Validates, then creates or updates the selected prompt. A rejected save leaves the store
    /// untouched and does not persist.
    pub fn save(&mut self, store: &mut PromptStore) -> Result<SaveOutcome, ValidationError> {
        let (title, content) = self.validate()?;
        let (id, is_new) = store.upsert(title, content.clone());
        self.loaded_markup = Some(content);
        self.mode = EditorMode::Editing(id.clone());
        Ok(SaveOutcome { id, is_new })
    }

    /// Copies the visible text of the content region. The store is never involved.
    pub fn copy_content(&self, clipboard: &mut dyn Clipboard) -> Result<&'static str, ClipboardError> {
        let text = self.content.text.trim();
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        clipboard.write_text(text)
    }
}
