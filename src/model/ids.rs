// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Opaque identifier of a stored prompt.
///
/// Ids are compared as strings and never re-parsed: values read back from storage may come from
/// an older generator, so the only structural rule is that an id is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromptId(SmolStr);

impl PromptId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PromptId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for PromptId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for PromptId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PromptId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PromptId> for String {
    fn from(id: PromptId) -> Self {
        id.0.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
}

/// Issues time-derived ids: milliseconds since the UNIX epoch, rendered in base 36.
///
/// The generator never issues a timestamp at or below the previous one, and callers pass a
/// `taken` predicate so ids loaded from storage are skipped as well.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_millis: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, now_millis: u64, taken: impl Fn(&str) -> bool) -> PromptId {
        let mut candidate = now_millis.max(self.last_millis.saturating_add(1));
        loop {
            let encoded = encode_base36(candidate);
            if !taken(&encoded) {
                self.last_millis = candidate;
                return PromptId(SmolStr::new(encoded));
            }
            candidate = candidate.saturating_add(1);
        }
    }
}

pub fn unix_millis_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}

fn encode_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_owned();
    }

    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    // Every byte comes from the ASCII digit table.
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{encode_base36, IdError, IdGenerator, PromptId};

    #[test]
    fn id_rejects_empty() {
        assert_eq!(PromptId::new(""), Err(IdError::Empty));
    }

    #[test]
    fn base36_matches_js_radix_rendering() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(35), "z");
        assert_eq!(encode_base36(36), "10");
        // (1_700_000_000_000).toString(36)
        assert_eq!(encode_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn generator_is_monotonic_within_the_same_millisecond() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id(1_000, |_| false);
        let second = ids.next_id(1_000, |_| false);
        let third = ids.next_id(999, |_| false);

        assert_eq!(first.as_str(), encode_base36(1_000));
        assert_eq!(second.as_str(), encode_base36(1_001));
        assert_eq!(third.as_str(), encode_base36(1_002));
    }

    #[test]
    fn generator_skips_taken_ids() {
        let mut ids = IdGenerator::new();
        let taken = [encode_base36(5_000), encode_base36(5_001)];
        let id = ids.next_id(5_000, |candidate| taken.iter().any(|t| t == candidate));
        assert_eq!(id.as_str(), encode_base36(5_002));
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = PromptId::new("lk3x9a").expect("id");
        assert_eq!(serde_json::to_string(&id).expect("json"), "\"lk3x9a\"");
        let back: PromptId = serde_json::from_str("\"lk3x9a\"").expect("parse");
        assert_eq!(back, id);
        serde_json::from_str::<PromptId>("\"\"").unwrap_err();
    }
}
