// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Baseconv: keeps binary, octal, decimal and hexadecimal views of one number in sync.
//!
//! [`sync`] holds the conversion core, [`tui`] the terminal shell around it.

pub mod config;
pub mod model;
pub mod services;
pub mod store;
pub mod sync;
#[cfg(test)]
pub(crate) mod test_support;
pub mod tui;
pub mod ui;
