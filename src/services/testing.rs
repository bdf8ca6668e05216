// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recording doubles for the platform collaborators.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{
    AdEvent, AdService, Clipboard, MailComposer, MailDraft, Platform, RatingService, ServiceError,
    ShareService, UrlOpener,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlatformCall {
    LoadBanner,
    LoadInterstitial,
    Rate(String),
    Share(String),
    Mail(MailDraft),
    Copy(String),
}

pub(crate) type CallLog = Rc<RefCell<Vec<PlatformCall>>>;
pub(crate) type AdQueue = Rc<RefCell<VecDeque<AdEvent>>>;

pub(crate) struct FakeOpener {
    available: bool,
    opened: Rc<RefCell<Vec<String>>>,
}

impl FakeOpener {
    pub(crate) fn new(available: bool) -> (Self, Rc<RefCell<Vec<String>>>) {
        let opened = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                available,
                opened: opened.clone(),
            },
            opened,
        )
    }
}

impl UrlOpener for FakeOpener {
    fn is_available(&self) -> bool {
        self.available
    }

    fn open(&mut self, url: &str) -> Result<(), ServiceError> {
        self.opened.borrow_mut().push(url.to_owned());
        Ok(())
    }
}

struct Recorder {
    calls: CallLog,
    ad_events: AdQueue,
    can_send_mail: bool,
}

impl AdService for Recorder {
    fn load_banner(&mut self) {
        self.calls.borrow_mut().push(PlatformCall::LoadBanner);
    }

    fn load_interstitial(&mut self) {
        self.calls.borrow_mut().push(PlatformCall::LoadInterstitial);
    }

    fn poll_event(&mut self) -> Option<AdEvent> {
        self.ad_events.borrow_mut().pop_front()
    }
}

impl RatingService for Recorder {
    fn rate(&mut self, app_id: &str) -> Result<(), ServiceError> {
        self.calls.borrow_mut().push(PlatformCall::Rate(app_id.to_owned()));
        Ok(())
    }
}

impl ShareService for Recorder {
    fn share(&mut self, message: &str) -> Result<&'static str, ServiceError> {
        self.calls.borrow_mut().push(PlatformCall::Share(message.to_owned()));
        Ok("recorder")
    }
}

impl MailComposer for Recorder {
    fn can_send_mail(&self) -> bool {
        self.can_send_mail
    }

    fn compose(&mut self, draft: &MailDraft) -> Result<(), ServiceError> {
        if !self.can_send_mail {
            return Err(ServiceError::Unavailable("mail client"));
        }
        self.calls.borrow_mut().push(PlatformCall::Mail(draft.clone()));
        Ok(())
    }
}

impl Clipboard for Recorder {
    fn copy(&mut self, text: &str) -> Result<&'static str, ServiceError> {
        self.calls.borrow_mut().push(PlatformCall::Copy(text.to_owned()));
        Ok("recorder")
    }
}

pub(crate) struct RecordingPlatform {
    pub(crate) calls: CallLog,
    pub(crate) ad_events: AdQueue,
}

impl RecordingPlatform {
    /// Builds a platform whose collaborators all log into one shared call list.
    pub(crate) fn new(can_send_mail: bool) -> (Platform, Self) {
        let calls = CallLog::default();
        let ad_events = AdQueue::default();
        let recorder = || Recorder {
            calls: calls.clone(),
            ad_events: ad_events.clone(),
            can_send_mail,
        };

        let platform = Platform {
            ads: Box::new(recorder()),
            rating: Box::new(recorder()),
            share: Box::new(recorder()),
            mail: Box::new(recorder()),
            clipboard: Box::new(recorder()),
        };
        (platform, Self { calls, ad_events })
    }

    pub(crate) fn push_ad_event(&self, event: AdEvent) {
        self.ad_events.borrow_mut().push_back(event);
    }

    pub(crate) fn calls(&self) -> Vec<PlatformCall> {
        self.calls.borrow().clone()
    }
}
