// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use scraper::{ElementRef, Html, Node};
use serde::{Deserialize, Serialize};

/// Elements whose bodies never contribute visible text.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "template", "noscript", "head", "title"];

const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "dd",
    "div",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tr",
    "ul",
];

/// Prompt body stored as markup.
///
/// The model never renders or executes the markup; the one operation it needs is
/// [`RichText::plain_text`], which parses the value as an inert fragment and keeps text nodes only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_markup(&self) -> &str {
        &self.0
    }

    pub fn into_markup(self) -> String {
        self.0
    }

    /// Text content with block boundaries turned into line breaks, trimmed at both ends.
    pub fn plain_text(&self) -> String {
        extract_plain_text(&self.0)
    }

    /// Markup whose plain text is exactly `text`: `&`, `<` and `>` are escaped and line breaks
    /// become `<br>`.
    pub fn from_plain_text(text: &str) -> Self {
        let mut markup = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => markup.push_str("&amp;"),
                '<' => markup.push_str("&lt;"),
                '>' => markup.push_str("&gt;"),
                '\n' => markup.push_str("<br>"),
                '\r' => {}
                _ => markup.push(ch),
            }
        }
        Self(markup)
    }

    /// `true` when the markup carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RichText {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

impl From<&str> for RichText {
    fn from(markup: &str) -> Self {
        Self(markup.to_owned())
    }
}

pub fn extract_plain_text(markup: &str) -> String {
    if !markup.contains(['<', '&']) {
        return markup.trim().to_owned();
    }

    let fragment = Html::parse_fragment(markup);
    let mut out = String::with_capacity(markup.len());
    collect_text(fragment.root_element(), &mut out);
    out.trim().to_owned()
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }

                let is_block = BLOCK_ELEMENTS.contains(&name);
                if is_block {
                    push_line_break(out);
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
                if is_block {
                    push_line_break(out);
                }
            }
            _ => {}
        }
    }
}

fn push_line_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
