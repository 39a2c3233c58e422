// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::slice;

use crate::model::Prompt;

/// Lazy, order-preserving view of the prompts whose title contains a needle.
///
/// Matching is a case-insensitive substring test on the title only. The needle is trimmed first;
/// an empty needle passes every prompt through.
#[derive(Debug, Clone)]
pub struct TitleFilter<'a> {
    prompts: slice::Iter<'a, Prompt>,
    needle: String,
}

pub fn title_filter<'a>(prompts: &'a [Prompt], text: &str) -> TitleFilter<'a> {
    TitleFilter {
        prompts: prompts.iter(),
        needle: text.trim().to_lowercase(),
    }
}

impl TitleFilter<'_> {
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl<'a> Iterator for TitleFilter<'a> {
    type Item = &'a Prompt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.needle.is_empty() {
            return self.prompts.next();
        }
        let needle = self.needle.as_str();
        self.prompts
            .by_ref()
            .find(|prompt| prompt.title().to_lowercase().contains(needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.prompts.size_hint();
        if self.needle.is_empty() {
            (lower, upper)
        } else {
            (0, upper)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::title_filter;
    use crate::model::fixtures::{alpha_beta_prompts, prompt, sample_prompts};

    fn titles(prompts: &[crate::model::Prompt], text: &str) -> Vec<String> {
        title_filter(prompts, text).map(|p| p.title().to_owned()).collect()
    }

    #[rstest]
    #[case::lowercase("task", &["Alpha Task", "Beta Task"])]
    #[case::uppercase("TASK", &["Alpha Task", "Beta Task"])]
    #[case::prefix("Alpha", &["Alpha Task"])]
    #[case::padded("  beta ", &["Beta Task"])]
    #[case::no_match("zzz", &[])]
    fn filter_matches_titles_case_insensitively(#[case] text: &str, #[case] expected: &[&str]) {
        let prompts = alpha_beta_prompts();
        assert_eq!(titles(&prompts, text), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_filter_passes_everything_through(#[case] text: &str) {
        let prompts = sample_prompts();
        let filtered = title_filter(&prompts, text).collect::<Vec<_>>();
        assert_eq!(filtered.len(), prompts.len());
        assert!(filtered.iter().zip(&prompts).all(|(a, b)| a.id() == b.id()));
    }

    #[test]
    fn filter_ignores_content() {
        let prompts = vec![prompt("x", "Greeting", "<p>needle in content</p>")];
        assert!(titles(&prompts, "needle").is_empty());
    }

    #[test]
    fn filter_preserves_relative_order() {
        let prompts = vec![
            prompt("3", "c report", "c"),
            prompt("2", "skip", "s"),
            prompt("1", "a report", "a"),
        ];
        assert_eq!(titles(&prompts, "REPORT"), vec!["c report", "a report"]);
    }

    #[test]
    fn filter_handles_non_ascii_case_folding() {
        let prompts = vec![prompt("x", "Über Prompt", "c")];
        assert_eq!(titles(&prompts, "über"), vec!["Über Prompt"]);
    }
}
