// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Promptbox: a local prompt manager for the terminal.
//!
//! Prompts (a title plus a markup body) live in an ordered in-memory store that rewrites one
//! key-value slot after every change. The TUI is a thin layer over [`store::PromptStore`],
//! [`editor::EditorBinding`] and the list projection in [`render`].

pub mod editor;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod store;
pub mod tui;
