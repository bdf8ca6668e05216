// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Application configuration.
//!
//! Everything a screen needs is passed in through [`AppConfig`] at construction. Preferences are
//! re-read only at explicit reload points (see [`AppConfig::reload_preferences`]).

use crate::store::{PreferenceStore, Preferences, StoreError};
use crate::sync::SyncOptions;

pub const APP_NAME: &str = "Base Converter++";
pub const FREE_APP_ID: &str = "id1290607683";
pub const PAID_APP_ID: &str = "id1283197781";
pub const FEEDBACK_RECIPIENT: &str = "universappteam@gmail.com";
pub const FEEDBACK_SUBJECT: &str = "[Base-Converter++ Feedback]";
pub const UPGRADE_MESSAGE: &str =
    "Upgrade to the full version to remove ads and support further development.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    #[default]
    Free,
    Paid,
}

impl Edition {
    pub fn shows_ads(self) -> bool {
        self == Self::Free
    }

    pub fn app_id(self) -> &'static str {
        match self {
            Self::Free => FREE_APP_ID,
            Self::Paid => PAID_APP_ID,
        }
    }
}

/// Store page opened by the rating flow.
pub fn rating_url(app_id: &str) -> String {
    format!("itms-apps://itunes.apple.com/app/{app_id}")
}

/// Message handed to the share flow.
pub fn share_message(app_id: &str) -> String {
    format!("https://itunes.apple.com/app/{app_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdConfig {
    pub banner_unit_id: String,
    /// `None` disables interstitials.
    pub interstitial_unit_id: Option<String>,
}

impl AdConfig {
    pub fn production() -> Self {
        Self {
            banner_unit_id: "ca-app-pub-7005013141953077/4204266995".to_owned(),
            interstitial_unit_id: None,
        }
    }

    /// Sample units that always serve test creatives.
    pub fn test() -> Self {
        Self {
            banner_unit_id: "ca-app-pub-3940256099942544/2934735716".to_owned(),
            interstitial_unit_id: Some("ca-app-pub-3940256099942544/4411468910".to_owned()),
        }
    }
}

impl Default for AdConfig {
    fn default() -> Self {
        Self::production()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub edition: Edition,
    pub preferences: Preferences,
    pub sync: SyncOptions,
    pub ads: AdConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(Edition::default(), Preferences::default())
    }
}

impl AppConfig {
    pub fn new(edition: Edition, preferences: Preferences) -> Self {
        let preferences = preferences.normalized();
        let mut config = Self {
            edition,
            preferences,
            sync: SyncOptions::default(),
            ads: AdConfig::default(),
        };
        config.sync.decimal_places = preferences.decimal_places;
        config
    }

    pub fn with_ads(mut self, ads: AdConfig) -> Self {
        self.ads = ads;
        self
    }

    pub fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.sync.max_digits = max_digits;
        self
    }

    /// Replaces the in-memory preferences. Returns whether anything changed.
    pub fn apply_preferences(&mut self, preferences: Preferences) -> bool {
        let preferences = preferences.normalized();
        if self.preferences == preferences {
            return false;
        }
        self.preferences = preferences;
        self.sync.decimal_places = preferences.decimal_places;
        true
    }

    /// Re-reads preferences from `store`. Returns whether anything changed.
    pub fn reload_preferences(&mut self, store: &PreferenceStore) -> Result<bool, StoreError> {
        let preferences = store.load()?;
        Ok(self.apply_preferences(preferences))
    }

    /// The app id whose store page the rating and share flows point at.
    pub fn store_app_id(&self) -> &'static str {
        self.edition.app_id()
    }
}
