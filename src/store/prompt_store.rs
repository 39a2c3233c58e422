// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::slot::StorageAdapter;
use crate::model::{unix_millis_now, IdGenerator, Prompt, PromptId, RichText};
use crate::query::{title_filter, TitleFilter};

/// Ordered prompt list (newest first) plus the id currently being edited.
///
/// The store is the only writer of the storage slot: `upsert` and `remove` persist the whole
/// list before returning. The selection may point at a prompt that no longer exists; that is a
/// valid state and reads as "nothing selected" wherever it matters.
#[derive(Debug)]
pub struct PromptStore {
    prompts: Vec<Prompt>,
    selected_id: Option<PromptId>,
    storage: StorageAdapter,
    ids: IdGenerator,
    clock: fn() -> u64,
}

impl PromptStore {
    /// Hydrates from storage. Selection always starts empty.
    pub fn load(storage: StorageAdapter) -> Self {
        let prompts = storage.load_all();
        Self {
            prompts,
            selected_id: None,
            storage,
            ids: IdGenerator::new(),
            clock: unix_millis_now,
        }
    }

    /// Overrides the millisecond clock used for new ids.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn selected_id(&self) -> Option<&PromptId> {
        self.selected_id.as_ref()
    }

    /// The selected prompt, or `None` when nothing is selected or the selection dangles.
    pub fn selected(&self) -> Option<&Prompt> {
        self.selected_id.as_ref().and_then(|id| self.find(id))
    }

    pub fn find(&self, id: &PromptId) -> Option<&Prompt> {
        self.prompts.iter().find(|prompt| prompt.id() == id)
    }

    pub fn position(&self, id: &PromptId) -> Option<usize> {
        self.prompts.iter().position(|prompt| prompt.id() == id)
    }

    /// Saves the editor contents.
    ///
    /// Overwrites the selected prompt in place when the selection resolves; otherwise creates a
    /// prompt with a fresh id at the front of the list and selects it. Returns the id written and
    /// whether it was created. Callers validate title and content beforehand.
    pub fn upsert(
        &mut self,
        title: impl Into<String>,
        content: impl Into<RichText>,
    ) -> (PromptId, bool) {
        let title = title.into();
        let content = content.into();

        let existing = self
            .selected_id
            .as_ref()
            .and_then(|id| self.prompts.iter_mut().find(|prompt| prompt.id() == id));

        let result = match existing {
            Some(prompt) => {
                prompt.set_title(title);
                prompt.set_content(content);
                (prompt.id().clone(), false)
            }
            None => {
                let id = self.next_id();
                self.prompts.insert(0, Prompt::new(id.clone(), title, content));
                self.selected_id = Some(id.clone());
                (id, true)
            }
        };

        tracing::debug!(id = %result.0, created = result.1, "upserted prompt");
        self.persist();
        result
    }

    /// Removes the prompt with `id`, if any. The selection is left untouched.
    pub fn remove(&mut self, id: &PromptId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.prompts.remove(index);
        tracing::debug!(%id, "removed prompt");
        self.persist();
        true
    }

    /// Sets the selection, whether or not a prompt with `id` exists.
    pub fn select(&mut self, id: PromptId) {
        self.selected_id = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Prompts whose title contains `text`, case-insensitively, in store order.
    pub fn filtered(&self, text: &str) -> TitleFilter<'_> {
        title_filter(&self.prompts, text)
    }

    fn next_id(&mut self) -> PromptId {
        let now = (self.clock)();
        let prompts = &self.prompts;
        self.ids.next_id(now, |candidate| {
            prompts.iter().any(|prompt| prompt.id().as_str() == candidate)
        })
    }

    fn persist(&mut self) {
        // A lost write is already logged by the adapter; memory stays authoritative.
        let _ = self.storage.save_all(&self.prompts);
    }
}
