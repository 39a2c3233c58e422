// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A prompt is an id, a title and a markup body. Ordering and selection live in
//! [`crate::store::PromptStore`].

pub(crate) mod fixtures;
pub mod ids;
pub mod prompt;
pub mod rich_text;

pub use fixtures::sample_prompts;
pub use ids::{unix_millis_now, IdError, IdGenerator, PromptId};
pub use prompt::Prompt;
pub use rich_text::{extract_plain_text, RichText};
