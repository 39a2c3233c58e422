// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::PromptId;
use super::prompt::Prompt;

const SAMPLES: &[(&str, &str, &str)] = &[
    (
        "m1x9k2a0",
        "Code review checklist",
        "<p>Review the diff for <b>correctness</b>, naming and missing tests.</p>\
         <ul><li>Flag unsafe unwraps</li><li>Check error paths</li></ul>",
    ),
    (
        "m1x9k1zz",
        "Summarize meeting notes",
        "<p>Summarize the following notes in five bullet points.</p>",
    ),
    (
        "m1x9k1aa",
        "Commit message",
        "<p>Write an imperative, 50-character commit subject for this change.</p>",
    ),
];

/// Newest first, as a hydrated store would hold them.
pub fn sample_prompts() -> Vec<Prompt> {
    SAMPLES
        .iter()
        .filter_map(|&(id, title, content)| {
            PromptId::new(id).ok().map(|id| Prompt::new(id, title, content))
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn prompt(id: &str, title: &str, content: &str) -> Prompt {
    Prompt::new(PromptId::new(id).expect("prompt id"), title, content)
}

#[cfg(test)]
pub(crate) fn alpha_beta_prompts() -> Vec<Prompt> {
    vec![
        prompt("a1", "Alpha Task", "<p>first</p>"),
        prompt("b2", "Beta Task", "<p>second</p>"),
    ]
}
