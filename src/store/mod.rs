// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence and the in-memory prompt store.
//!
//! `kv` provides the key-value backends (a directory of files, or memory), `slot` serializes the
//! prompt list into one key of such a backend, and `prompt_store` owns the list and writes it back
//! after every mutation.

pub mod kv;
pub mod prompt_store;
pub mod slot;

pub use kv::{DirectoryStore, KeyValueStore, MemoryStore, StoreError, WriteDurability};
pub use prompt_store::PromptStore;
pub use slot::{StorageAdapter, STORAGE_KEY};
