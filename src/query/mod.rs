// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the prompt list.
//!
//! Queries borrow the list and never mutate it; the UI re-runs them on every keystroke.

pub mod filter;

pub use filter::{title_filter, TitleFilter};
