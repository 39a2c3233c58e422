// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Projection of prompts into display rows.
//!
//! Rows carry plain text only. Titles are shown verbatim and descriptions are the text content of
//! the stored markup, so nothing the user typed is ever interpreted by the terminal.

pub mod rows;
pub(crate) mod text;

pub use rows::{project_rows, PromptRow};
