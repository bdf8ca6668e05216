// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`BaseSet`] holds the four converter fields, one per [`Radix`].

pub mod base_set;
pub mod radix;

pub use base_set::{Base, BaseSet};
pub use radix::{ParseRadixError, Radix};
