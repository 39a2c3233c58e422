// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Promptbox-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Promptbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),
    #[error("nothing to copy")]
    Empty,
}

/// Write-only system clipboard.
pub trait Clipboard {
    /// Places `text` on the clipboard. Returns a short backend label for user feedback.
    fn write_text(&mut self, text: &str) -> Result<&'static str, ClipboardError>;
}

/// Clipboard that asks the hosting terminal to copy via an OSC 52 escape sequence.
///
/// Works over SSH and inside multiplexers that forward OSC 52; there is no way to confirm the
/// terminal honored it, so success only means the sequence was written.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<&'static str, ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok("osc52")
    }
}

pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// In-memory clipboard for tests.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<&'static str, ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "clipboard offline",
            )));
        }
        self.writes.push(text.to_owned());
        Ok("memory")
    }
}
