// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Prompt, PromptId};

use super::text::{single_line, truncate_with_ellipsis};

/// One entry of the prompt list as the UI shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRow {
    pub id: PromptId,
    pub title: String,
    /// Plain text of the prompt body; markup is stripped, never rendered.
    pub description: String,
}

impl PromptRow {
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            id: prompt.id().clone(),
            title: prompt.title().to_owned(),
            description: prompt.content().plain_text(),
        }
    }

    /// Description folded onto one line and cut to `width` characters.
    pub fn description_line(&self, width: usize) -> String {
        truncate_with_ellipsis(&single_line(&self.description), width)
    }

    /// `id<TAB>title<TAB>description` with whitespace runs folded so the line stays one record.
    pub fn tab_separated(&self) -> String {
        format!("{}\t{}\t{}", self.id, single_line(&self.title), single_line(&self.description))
    }
}

/// Maps a (usually filtered) prompt sequence to display rows, keeping its order.
pub fn project_rows<'a>(prompts: impl IntoIterator<Item = &'a Prompt>) -> Vec<PromptRow> {
    prompts.into_iter().map(PromptRow::from_prompt).collect()
}
