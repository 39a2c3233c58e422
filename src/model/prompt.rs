// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::PromptId;
use super::rich_text::RichText;

/// A user-authored title plus rich-text body.
///
/// The serialized shape is exactly `{ "id", "title", "content" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    id: PromptId,
    title: String,
    content: RichText,
}

impl Prompt {
    pub fn new(id: PromptId, title: impl Into<String>, content: impl Into<RichText>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> &PromptId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &RichText {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<RichText>) {
        self.content = content.into();
    }
}
