// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use super::{AdEvent, AdService};
use crate::config::{AdConfig, APP_NAME};

const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AdFill {
    #[default]
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdSlot {
    Banner,
    Interstitial,
}

/// Serves house creatives for the configured ad units.
///
/// Each load is spawned on `handle` and reports back through an unbounded channel, so callers
/// never wait on a load.
#[derive(Debug)]
pub struct LocalAdService {
    handle: Handle,
    config: AdConfig,
    fill: AdFill,
    latency: Duration,
    tx: mpsc::UnboundedSender<AdEvent>,
    rx: mpsc::UnboundedReceiver<AdEvent>,
}

impl LocalAdService {
    pub fn new(handle: Handle, config: AdConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            config,
            fill: AdFill::default(),
            latency: DEFAULT_LATENCY,
            tx,
            rx,
        }
    }

    pub fn with_fill(mut self, fill: AdFill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn spawn_load(&self, slot: AdSlot, unit_id: String) {
        let tx = self.tx.clone();
        let fill = self.fill;
        let latency = self.latency;
        tracing::debug!(?slot, %unit_id, "ad load requested");

        self.handle.spawn(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            let event = match (slot, fill) {
                (AdSlot::Banner, AdFill::Always) => AdEvent::BannerLoaded {
                    unit_id,
                    headline: house_headline(slot),
                },
                (AdSlot::Banner, AdFill::Never) => AdEvent::BannerFailed {
                    reason: format!("no fill for {unit_id}"),
                },
                (AdSlot::Interstitial, AdFill::Always) => AdEvent::InterstitialLoaded {
                    unit_id,
                    headline: house_headline(slot),
                },
                (AdSlot::Interstitial, AdFill::Never) => AdEvent::InterstitialFailed {
                    reason: format!("no fill for {unit_id}"),
                },
            };
            // The receiver is gone once the screen is torn down.
            let _ = tx.send(event);
        });
    }
}

fn house_headline(slot: AdSlot) -> String {
    match slot {
        AdSlot::Banner => format!("{APP_NAME}: go ad-free with the full version"),
        AdSlot::Interstitial => format!("Enjoying {APP_NAME}? The full version has no ads."),
    }
}

impl AdService for LocalAdService {
    fn load_banner(&mut self) {
        self.spawn_load(AdSlot::Banner, self.config.banner_unit_id.clone());
    }

    fn load_interstitial(&mut self) {
        let Some(unit_id) = self.config.interstitial_unit_id.clone() else {
            tracing::debug!("no interstitial unit configured");
            return;
        };
        self.spawn_load(AdSlot::Interstitial, unit_id);
    }

    fn poll_event(&mut self) -> Option<AdEvent> {
        self.rx.try_recv().ok()
    }
}

/// Ads for the paid edition: nothing is ever loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledAds;

impl AdService for DisabledAds {
    fn load_banner(&mut self) {}

    fn load_interstitial(&mut self) {}

    fn poll_event(&mut self) -> Option<AdEvent> {
        None
    }
}
