// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Platform collaborators used by the converter screens.
//!
//! Each collaborator (ads, rating, share, mail, clipboard) sits behind its own trait so the TUI can
//! be driven against recording doubles in tests. [`Platform::system`] wires the real ones.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;
use tokio::runtime::Handle;

use crate::config::{AppConfig, FEEDBACK_RECIPIENT, FEEDBACK_SUBJECT};

pub mod ads;
pub mod system;

#[cfg(test)]
pub(crate) mod testing;

pub use ads::{AdFill, DisabledAds, LocalAdService};
pub use system::{
    mailto_url, osc52_sequence, ClipboardShare, MailtoComposer, Osc52Clipboard, StoreRating,
    SystemOpener,
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to launch {command:?}: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command:?} exited with {status}")]
    Exit { command: String, status: ExitStatus },
    #[error("clipboard write failed: {0}")]
    Clipboard(#[source] io::Error),
    #[error("{0} is not available")]
    Unavailable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdEvent {
    BannerLoaded { unit_id: String, headline: String },
    BannerFailed { reason: String },
    InterstitialLoaded { unit_id: String, headline: String },
    InterstitialFailed { reason: String },
}

/// Banner and interstitial loading.
///
/// Loads are fire-and-forget; results are collected later with [`poll_event`](Self::poll_event),
/// which must never block.
pub trait AdService {
    fn load_banner(&mut self);
    fn load_interstitial(&mut self);
    fn poll_event(&mut self) -> Option<AdEvent>;
}

pub trait RatingService {
    fn rate(&mut self, app_id: &str) -> Result<(), ServiceError>;
}

pub trait ShareService {
    /// Hands `message` to the system share target and returns the backend used.
    fn share(&mut self, message: &str) -> Result<&'static str, ServiceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub to: Vec<String>,
    pub subject: String,
}

impl MailDraft {
    pub fn feedback() -> Self {
        Self {
            to: vec![FEEDBACK_RECIPIENT.to_owned()],
            subject: FEEDBACK_SUBJECT.to_owned(),
        }
    }
}

pub trait MailComposer {
    fn can_send_mail(&self) -> bool;
    fn compose(&mut self, draft: &MailDraft) -> Result<(), ServiceError>;
}

pub trait Clipboard {
    /// Copies `text` and returns the backend used.
    fn copy(&mut self, text: &str) -> Result<&'static str, ServiceError>;
}

/// Opens URLs with whatever the host system associates with them.
pub trait UrlOpener {
    fn is_available(&self) -> bool;
    fn open(&mut self, url: &str) -> Result<(), ServiceError>;
}

pub struct Platform {
    pub ads: Box<dyn AdService>,
    pub rating: Box<dyn RatingService>,
    pub share: Box<dyn ShareService>,
    pub mail: Box<dyn MailComposer>,
    pub clipboard: Box<dyn Clipboard>,
}

impl Platform {
    /// Real collaborators for the terminal build.
    ///
    /// Ads are only loaded for the free edition and only when a runtime handle is available to
    /// drive them.
    pub fn system(config: &AppConfig, runtime: Option<Handle>) -> Self {
        let ads: Box<dyn AdService> = match runtime {
            Some(handle) if config.edition.shows_ads() => {
                Box::new(LocalAdService::new(handle, config.ads.clone()))
            }
            _ => Box::new(DisabledAds),
        };

        Self {
            ads,
            rating: Box::new(StoreRating::new(Box::new(SystemOpener::from_env()))),
            share: Box::new(ClipboardShare::new(Box::new(Osc52Clipboard))),
            mail: Box::new(MailtoComposer::new(Box::new(SystemOpener::from_env()))),
            clipboard: Box::new(Osc52Clipboard),
        }
    }
}
