// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::kv::{KeyValueStore, StoreError};
use crate::model::{Prompt, PromptId, RichText};

/// Storage key of the one slot holding the serialized prompt list.
pub const STORAGE_KEY: &str = "prompts_storage";

#[derive(Debug, Serialize, Deserialize)]
struct PromptJson {
    id: String,
    title: String,
    content: String,
}

fn prompt_to_json(prompt: &Prompt) -> PromptJson {
    PromptJson {
        id: prompt.id().to_string(),
        title: prompt.title().to_owned(),
        content: prompt.content().as_markup().to_owned(),
    }
}

fn prompt_from_json(key: &str, prompt_json: PromptJson) -> Result<Prompt, StoreError> {
    let id = PromptId::new(&prompt_json.id).map_err(|source| StoreError::InvalidId {
        key: key.to_owned(),
        value: prompt_json.id.clone(),
        source,
    })?;
    Ok(Prompt::new(
        id,
        prompt_json.title,
        RichText::new(prompt_json.content),
    ))
}

/// Fail-soft bridge between the prompt list and one key-value slot.
///
/// Neither direction ever returns an error: failures are reported through `tracing` and the
/// caller carries on with its in-memory state.
pub struct StorageAdapter {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl StorageAdapter {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            key: STORAGE_KEY.to_owned(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the slot. A missing slot and any read or parse failure both yield an empty list.
    pub fn load_all(&self) -> Vec<Prompt> {
        match self.try_load_all() {
            Ok(prompts) => {
                tracing::debug!(key = %self.key, count = prompts.len(), "loaded prompts");
                prompts
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to load prompts; starting empty");
                Vec::new()
            }
        }
    }

    /// Writes the full list over the slot. Returns `false` when the write was lost.
    pub fn save_all(&mut self, prompts: &[Prompt]) -> bool {
        match self.try_save_all(prompts) {
            Ok(()) => {
                tracing::debug!(key = %self.key, count = prompts.len(), "persisted prompts");
                true
            }
            Err(err) => {
                tracing::error!(key = %self.key, error = %err, "failed to persist prompts");
                false
            }
        }
    }

    fn try_load_all(&self) -> Result<Vec<Prompt>, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let prompts_json: Vec<PromptJson> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                key: self.key.clone(),
                source,
            })?;

        let mut seen = HashSet::with_capacity(prompts_json.len());
        let mut prompts = Vec::with_capacity(prompts_json.len());
        for prompt_json in prompts_json {
            let prompt = prompt_from_json(&self.key, prompt_json)?;
            if !seen.insert(prompt.id().clone()) {
                tracing::warn!(key = %self.key, id = %prompt.id(), "dropping duplicate prompt id");
                continue;
            }
            prompts.push(prompt);
        }
        Ok(prompts)
    }

    fn try_save_all(&mut self, prompts: &[Prompt]) -> Result<(), StoreError> {
        let prompts_json = prompts.iter().map(prompt_to_json).collect::<Vec<_>>();
        let raw = serde_json::to_string(&prompts_json).map_err(|source| StoreError::Json {
            key: self.key.clone(),
            source,
        })?;
        self.backend.set(&self.key, &raw)
    }
}

impl std::fmt::Debug for StorageAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageAdapter").field("key", &self.key).finish_non_exhaustive()
    }
}
