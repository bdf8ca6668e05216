// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{BaseSet, Radix};

use super::{SyncError, SyncOptions, Synchronizer};

/// The converter screen's single owned [`BaseSet`] plus the synchronizer that updates it.
///
/// Each call runs to completion before returning; a failed edit leaves the set untouched.
#[derive(Debug, Clone, Default)]
pub struct ConverterSession {
    bases: BaseSet,
    synchronizer: Synchronizer,
    last_source: Option<Radix>,
}

impl ConverterSession {
    pub fn new(options: SyncOptions) -> Self {
        Self {
            bases: BaseSet::new(),
            synchronizer: Synchronizer::new(options),
            last_source: None,
        }
    }

    pub fn bases(&self) -> &BaseSet {
        &self.bases
    }

    pub fn options(&self) -> SyncOptions {
        self.synchronizer.options()
    }

    /// The field of the most recent successful edit, `None` once cleared.
    pub fn last_source(&self) -> Option<Radix> {
        self.last_source
    }

    pub fn reconfigure(&mut self, options: SyncOptions) {
        if self.synchronizer.options() != options {
            tracing::debug!(
                max_digits = options.max_digits,
                decimal_places = options.decimal_places,
                "converter reconfigured"
            );
        }
        self.synchronizer.set_options(options);
    }

    pub fn on_field_edited(&mut self, source: Radix, text: &str) -> Result<&BaseSet, SyncError> {
        match self.synchronizer.apply(&self.bases, source, text) {
            Ok(next) => {
                tracing::debug!(%source, len = text.len(), "field edited");
                self.last_source = if next.is_cleared() { None } else { Some(source) };
                self.bases = next;
                Ok(&self.bases)
            }
            Err(err) => {
                tracing::debug!(%source, error = %err, "edit rejected");
                Err(err)
            }
        }
    }

    pub fn on_clear(&mut self) -> &BaseSet {
        tracing::debug!("fields cleared");
        self.bases.clear();
        self.last_source = None;
        &self.bases
    }
}
