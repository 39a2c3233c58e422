// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cursor editing for the title and content regions.
//!
//! The cursor is a byte offset that always sits on a char boundary of the edited text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Motion {
    Left,
    Right,
    LineStart,
    LineEnd,
    Up,
    Down,
}

pub(crate) fn insert_char(text: &mut String, cursor: &mut usize, ch: char) {
    let at = clamp(text, *cursor);
    text.insert(at, ch);
    *cursor = at + ch.len_utf8();
}

pub(crate) fn insert_str(text: &mut String, cursor: &mut usize, value: &str) {
    let at = clamp(text, *cursor);
    text.insert_str(at, value);
    *cursor = at + value.len();
}

pub(crate) fn backspace(text: &mut String, cursor: &mut usize) {
    let at = clamp(text, *cursor);
    if let Some((prev, _)) = text[..at].char_indices().next_back() {
        text.replace_range(prev..at, "");
        *cursor = prev;
    } else {
        *cursor = at;
    }
}

pub(crate) fn delete(text: &mut String, cursor: &mut usize) {
    let at = clamp(text, *cursor);
    if let Some(ch) = text[at..].chars().next() {
        text.replace_range(at..at + ch.len_utf8(), "");
    }
    *cursor = at;
}

pub(crate) fn move_cursor(text: &str, cursor: &mut usize, motion: Motion) {
    let at = clamp(text, *cursor);
    *cursor = match motion {
        Motion::Left => text[..at].char_indices().next_back().map_or(0, |(idx, _)| idx),
        Motion::Right => text[at..].chars().next().map_or(at, |ch| at + ch.len_utf8()),
        Motion::LineStart => line_start(text, at),
        Motion::LineEnd => line_end(text, at),
        Motion::Up => {
            let start = line_start(text, at);
            if start == 0 {
                0
            } else {
                let column = text[start..at].chars().count();
                let prev_start = line_start(text, start - 1);
                offset_at_column(text, prev_start, column)
            }
        }
        Motion::Down => {
            let end = line_end(text, at);
            if end == text.len() {
                end
            } else {
                let column = text[line_start(text, at)..at].chars().count();
                offset_at_column(text, end + 1, column)
            }
        }
    };
}

/// Zero-based (line, column) of the cursor, in chars.
pub(crate) fn cursor_position(text: &str, cursor: usize) -> (usize, usize) {
    let at = clamp(text, cursor);
    let before = &text[..at];
    let line = before.matches('\n').count();
    let column = before[line_start(text, at)..].chars().count();
    (line, column)
}

fn clamp(text: &str, cursor: usize) -> usize {
    let mut at = cursor.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

fn line_start(text: &str, at: usize) -> usize {
    text[..at].rfind('\n').map_or(0, |idx| idx + 1)
}

fn line_end(text: &str, at: usize) -> usize {
    text[at..].find('\n').map_or(text.len(), |idx| at + idx)
}

fn offset_at_column(text: &str, start: usize, column: usize) -> usize {
    let end = line_end(text, start);
    text[start..end]
        .char_indices()
        .nth(column)
        .map_or(end, |(idx, _)| start + idx)
}
