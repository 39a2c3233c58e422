// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! List commands.
//!
//! The UI turns activation of a list row into a [`Command`] and applies it here; the command
//! names the row by id, never by position, so a stale row cannot hit the wrong prompt.

use std::fmt;

use crate::editor::EditorBinding;
use crate::model::PromptId;
use crate::store::PromptStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the prompt into the editor and make it the selection.
    Select(PromptId),
    /// Delete the prompt. Selection and editor are left as they are.
    Remove(PromptId),
}

impl Command {
    pub fn id(&self) -> &PromptId {
        match self {
            Self::Select(id) | Self::Remove(id) => id,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Select(_) => CommandKind::Select,
            Self::Remove(_) => CommandKind::Remove,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Select,
    Remove,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => f.write_str("select"),
            Self::Remove => f.write_str("remove"),
        }
    }
}

/// What a command changed, for UI feedback and list refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyResult {
    pub kind: CommandKind,
    /// A prompt with the command's id existed.
    pub found: bool,
    /// The stored list changed and was persisted.
    pub list_changed: bool,
}

pub fn apply_command(
    store: &mut PromptStore,
    editor: &mut EditorBinding,
    command: Command,
) -> ApplyResult {
    let kind = command.kind();
    tracing::debug!(%kind, id = %command.id(), "applying command");

    match command {
        Command::Select(id) => {
            let found = editor.activate(store, id);
            ApplyResult { kind, found, list_changed: false }
        }
        Command::Remove(id) => {
            let removed = store.remove(&id);
            ApplyResult { kind, found: removed, list_changed: removed }
        }
    }
}
