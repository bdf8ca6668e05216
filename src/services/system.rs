// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::io;
use std::process::{Command, Stdio};

use crossterm::{execute, style::Print};

use super::{
    Clipboard, MailComposer, MailDraft, RatingService, ServiceError, ShareService, UrlOpener,
};
use crate::config::rating_url;

const OPENER_ENV: &str = "BASECONV_OPENER";

#[derive(Debug, Clone)]
pub struct SystemOpener {
    command: String,
}

impl SystemOpener {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// `$BASECONV_OPENER`, else `open` on macOS, `explorer` on Windows and `xdg-open` elsewhere.
    pub fn from_env() -> Self {
        let command = env::var(OPENER_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_opener_command().to_owned());
        Self::new(command)
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

fn default_opener_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

impl UrlOpener for SystemOpener {
    fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }

    fn open(&mut self, url: &str) -> Result<(), ServiceError> {
        tracing::debug!(command = %self.command, url, "opening url");
        let status = Command::new(&self.command)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| ServiceError::Launch {
                command: self.command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ServiceError::Exit {
                command: self.command.clone(),
                status,
            })
        }
    }
}

pub struct StoreRating {
    opener: Box<dyn UrlOpener>,
}

impl StoreRating {
    pub fn new(opener: Box<dyn UrlOpener>) -> Self {
        Self { opener }
    }
}

impl RatingService for StoreRating {
    fn rate(&mut self, app_id: &str) -> Result<(), ServiceError> {
        self.opener.open(&rating_url(app_id))
    }
}

pub struct ClipboardShare {
    clipboard: Box<dyn Clipboard>,
}

impl ClipboardShare {
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self { clipboard }
    }
}

impl ShareService for ClipboardShare {
    fn share(&mut self, message: &str) -> Result<&'static str, ServiceError> {
        self.clipboard.copy(message)
    }
}

pub struct MailtoComposer {
    opener: Box<dyn UrlOpener>,
}

impl MailtoComposer {
    pub fn new(opener: Box<dyn UrlOpener>) -> Self {
        Self { opener }
    }
}

impl MailComposer for MailtoComposer {
    fn can_send_mail(&self) -> bool {
        self.opener.is_available()
    }

    fn compose(&mut self, draft: &MailDraft) -> Result<(), ServiceError> {
        if !self.can_send_mail() {
            return Err(ServiceError::Unavailable("mail client"));
        }
        self.opener.open(&mailto_url(draft))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> Result<&'static str, ServiceError> {
        let mut stdout = io::stdout();
        execute!(stdout, Print(osc52_sequence(text))).map_err(ServiceError::Clipboard)?;
        Ok("osc52")
    }
}

pub fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

pub fn mailto_url(draft: &MailDraft) -> String {
    let recipients = draft
        .to
        .iter()
        .map(|address| percent_encode(address, b"@"))
        .collect::<Vec<_>>()
        .join(",");
    format!("mailto:{recipients}?subject={}", percent_encode(&draft.subject, b""))
}

/// Percent-encodes everything outside RFC 3986 unreserved characters and `keep`.
fn percent_encode(value: &str, keep: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(value.len());
    for &b in value.as_bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') || keep.contains(&b)
        {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}
