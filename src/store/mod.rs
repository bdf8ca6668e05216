// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for user preferences.
//!
//! Preferences live in a single JSON file that is replaced atomically on every save.

pub mod preferences;

pub use preferences::{
    PreferenceStore, Preferences, StoreError, WriteDurability, MAX_DECIMAL_PLACES,
};
